//! In-process force-directed layout
//!
//! A small many-body + spring simulation. Positions only exist after the
//! simulation has run, which mirrors browser renderers that settle
//! asynchronously after new graph data arrives.

use super::{CameraCommand, Position, Renderer};
use crate::graph::{ProfileId, VisibleSubgraph};
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use tracing::debug;

/// Simulation parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Many-body strength; negative repels
    pub charge_strength: f64,
    /// Rest length of link springs
    pub link_distance: f64,
    pub spring_constant: f64,
    /// Pull toward the origin per iteration
    pub gravity: f64,
    pub iterations: usize,
    /// Seed for initial placement
    pub seed: u64,
    /// Run the simulation as soon as graph data arrives
    pub auto_settle: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            charge_strength: -250.0,
            link_distance: 30.0,
            spring_constant: 0.05,
            gravity: 0.01,
            iterations: 300,
            seed: 42,
            auto_settle: true,
            width: 800,
            height: 600,
        }
    }
}

/// Camera as last set by `center_at`/`zoom`
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraState {
    pub center: Position,
    pub zoom: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            center: Position::new(0.0, 0.0),
            zoom: 1.0,
        }
    }
}

/// Point-in-time copy of the layout, for drawing and for the HTTP feed
#[derive(Debug, Clone, Serialize)]
pub struct LayoutSnapshot {
    pub width: u32,
    pub height: u32,
    pub center: Option<ProfileId>,
    pub positions: IndexMap<ProfileId, Position>,
    pub camera: CameraState,
}

#[derive(Debug, Default)]
struct LayoutState {
    width: u32,
    height: u32,
    center: Option<ProfileId>,
    /// Node -> position, `None` until the simulation has run
    nodes: IndexMap<ProfileId, Option<Position>>,
    links: Vec<(ProfileId, ProfileId)>,
    camera: CameraState,
    commands: Vec<CameraCommand>,
}

/// Force-directed renderer
#[derive(Debug)]
pub struct ForceLayout {
    config: LayoutConfig,
    state: RwLock<LayoutState>,
}

impl ForceLayout {
    pub fn new(config: LayoutConfig) -> Self {
        let state = LayoutState {
            width: config.width,
            height: config.height,
            ..Default::default()
        };
        Self {
            config,
            state: RwLock::new(state),
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Run the simulation to completion and assign every node a position
    pub fn tick(&self) {
        let mut state = self.state.write().unwrap();
        let ids: Vec<ProfileId> = state.nodes.keys().cloned().collect();
        let positions = simulate(&self.config, &ids, &state.links);
        for (id, pos) in ids.into_iter().zip(positions) {
            state.nodes.insert(id, Some(pos));
        }
        debug!("Layout settled for {} nodes", state.nodes.len());
    }

    /// Whether every displayed node has a position
    pub fn is_settled(&self) -> bool {
        self.state.read().unwrap().nodes.values().all(Option::is_some)
    }

    pub fn camera(&self) -> CameraState {
        self.state.read().unwrap().camera
    }

    /// Every camera command received, oldest first
    pub fn commands(&self) -> Vec<CameraCommand> {
        self.state.read().unwrap().commands.clone()
    }

    pub fn snapshot(&self) -> LayoutSnapshot {
        let state = self.state.read().unwrap();
        LayoutSnapshot {
            width: state.width,
            height: state.height,
            center: state.center.clone(),
            positions: state
                .nodes
                .iter()
                .filter_map(|(id, pos)| pos.map(|p| (id.clone(), p)))
                .collect(),
            camera: state.camera,
        }
    }
}

impl Default for ForceLayout {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl Renderer for ForceLayout {
    fn set_graph_data(&self, data: &VisibleSubgraph) {
        {
            let mut state = self.state.write().unwrap();
            state.center = data.center.clone();
            state.nodes = data.nodes.iter().map(|n| (n.id.clone(), None)).collect();
            state.links = data
                .edges
                .iter()
                .map(|e| (e.source.clone(), e.target.clone()))
                .collect();
        }
        if self.config.auto_settle {
            self.tick();
        }
    }

    fn node_position(&self, id: &ProfileId) -> Option<Position> {
        self.state.read().unwrap().nodes.get(id).copied().flatten()
    }

    fn center_at(&self, x: f64, y: f64, duration_ms: u64) {
        let mut state = self.state.write().unwrap();
        state.camera.center = Position::new(x, y);
        state.commands.push(CameraCommand::CenterAt { x, y, duration_ms });
    }

    fn zoom(&self, level: f64, duration_ms: u64) {
        let mut state = self.state.write().unwrap();
        state.camera.zoom = level;
        state.commands.push(CameraCommand::Zoom { level, duration_ms });
    }

    fn resize(&self, width: u32, height: u32) {
        let mut state = self.state.write().unwrap();
        state.width = width;
        state.height = height;
    }
}

/// Run the force simulation for `ids`, returning positions in the same order
fn simulate(config: &LayoutConfig, ids: &[ProfileId], links: &[(ProfileId, ProfileId)]) -> Vec<Position> {
    let n = ids.len();
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut positions: Vec<Position> = (0..n)
        .map(|_| Position::new(rng.gen_range(-50.0..50.0), rng.gen_range(-50.0..50.0)))
        .collect();

    let index: IndexMap<&ProfileId, usize> = ids.iter().enumerate().map(|(i, id)| (id, i)).collect();
    let springs: Vec<(usize, usize)> = links
        .iter()
        .filter_map(|(a, b)| Some((*index.get(a)?, *index.get(b)?)))
        .collect();

    let repulsion = -config.charge_strength;

    for iteration in 0..config.iterations {
        let alpha = 1.0 - iteration as f64 / config.iterations as f64;
        let mut forces = vec![Position::new(0.0, 0.0); n];

        // Repulsion
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = positions[i].x - positions[j].x;
                let dy = positions[i].y - positions[j].y;
                let dist_sq = dx * dx + dy * dy + 0.1;
                let force = repulsion / dist_sq;

                forces[i].x += dx * force;
                forces[i].y += dy * force;
                forces[j].x -= dx * force;
                forces[j].y -= dy * force;
            }
        }

        // Attraction (links)
        for &(s, t) in &springs {
            let dx = positions[t].x - positions[s].x;
            let dy = positions[t].y - positions[s].y;
            let dist = (dx * dx + dy * dy).sqrt().max(0.01);
            let force = (dist - config.link_distance) * config.spring_constant;

            let fx = (dx / dist) * force;
            let fy = (dy / dist) * force;
            forces[s].x += fx;
            forces[s].y += fy;
            forces[t].x -= fx;
            forces[t].y -= fy;
        }

        for (pos, force) in positions.iter_mut().zip(&forces) {
            pos.x += (force.x * alpha).clamp(-10.0, 10.0);
            pos.y += (force.y * alpha).clamp(-10.0, 10.0);

            // Center gravity
            pos.x -= pos.x * config.gravity;
            pos.y -= pos.y * config.gravity;
        }
    }

    positions
}
