//! HTTP Visualizer API
//!
//! Exposes the session over JSON so a browser renderer can search, receive
//! the graph feed and report clicks.

pub mod handler;
pub mod server;

pub use handler::{AppState, GraphFeed};
pub use server::{router, HttpServer};
