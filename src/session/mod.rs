//! Interactive session state
//!
//! The selection controller owns the view; the camera director keeps the
//! renderer focused on whatever the last search centered.

pub mod camera;
pub mod selection;

pub use camera::{CameraConfig, CameraDirector, FocusOutcome};
pub use selection::{SearchOutcome, Selection, SelectionController};
