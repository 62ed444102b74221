//! Camera director
//!
//! Centers and zooms the renderer on a searched profile. Renderers place
//! nodes some time after receiving graph data, so focus is deferred by a
//! short settle delay and then attempted once. A newer request supersedes
//! any pending one; a target without a position is skipped silently.

use crate::graph::ProfileId;
use crate::render::Renderer;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// Camera timing and zoom settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Delay between handing over graph data and attempting focus
    pub settle_delay_ms: u64,
    pub center_duration_ms: u64,
    pub zoom_level: f64,
    pub zoom_duration_ms: u64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 100,
            center_duration_ms: 1000,
            zoom_level: 5.0,
            zoom_duration_ms: 500,
        }
    }
}

/// Result of a focus attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusOutcome {
    /// `center_at` and `zoom` were issued
    Applied,
    /// The target had no position in the current layout
    Skipped,
}

/// Issues best-effort focus instructions to a renderer
pub struct CameraDirector {
    renderer: Arc<dyn Renderer>,
    config: CameraConfig,

    /// Bumped on every request; a deferred focus only fires if still current
    generation: Arc<AtomicU64>,

    pending: Mutex<Option<JoinHandle<()>>>,
}

impl CameraDirector {
    pub fn new(renderer: Arc<dyn Renderer>, config: CameraConfig) -> Self {
        Self {
            renderer,
            config,
            generation: Arc::new(AtomicU64::new(0)),
            pending: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Schedule a focus on `target` after the settle delay.
    ///
    /// Outside a tokio runtime there is nothing to defer on, so the attempt
    /// happens immediately. A renderer that has not placed the target yet
    /// (for example a [`ForceLayout`](crate::render::ForceLayout) without
    /// `auto_settle`) gets no focus at all; call `tick` first and use
    /// [`focus_now`](Self::focus_now) from synchronous code.
    pub fn focus(&self, target: ProfileId) {
        let generation = self.supersede();

        let Ok(runtime) = Handle::try_current() else {
            debug!("No async runtime; focusing {} immediately", target);
            apply_focus(self.renderer.as_ref(), &self.config, &target);
            return;
        };

        let renderer = Arc::clone(&self.renderer);
        let latest = Arc::clone(&self.generation);
        let config = self.config.clone();

        let handle = runtime.spawn(async move {
            tokio::time::sleep(Duration::from_millis(config.settle_delay_ms)).await;
            if latest.load(Ordering::SeqCst) != generation {
                debug!("Focus on {} superseded", target);
                return;
            }
            apply_focus(renderer.as_ref(), &config, &target);
        });

        *self.pending.lock().unwrap() = Some(handle);
    }

    /// Attempt focus right away, without deferral
    pub fn focus_now(&self, target: &ProfileId) -> FocusOutcome {
        self.supersede();
        apply_focus(self.renderer.as_ref(), &self.config, target)
    }

    /// Drop any pending focus request
    pub fn cancel(&self) {
        self.supersede();
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap()
            .as_ref()
            .is_some_and(|h| !h.is_finished())
    }

    /// Wait for the pending focus request, if any, to run or be aborted
    pub async fn wait_pending(&self) {
        let handle = self.pending.lock().unwrap().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
    }

    /// Invalidate earlier requests and return the new generation
    fn supersede(&self) -> u64 {
        if let Some(handle) = self.pending.lock().unwrap().take() {
            handle.abort();
        }
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }
}

fn apply_focus(renderer: &dyn Renderer, config: &CameraConfig, target: &ProfileId) -> FocusOutcome {
    match renderer.node_position(target) {
        Some(pos) => {
            renderer.center_at(pos.x, pos.y, config.center_duration_ms);
            renderer.zoom(config.zoom_level, config.zoom_duration_ms);
            debug!("Focused camera on {} at ({:.1}, {:.1})", target, pos.x, pos.y);
            FocusOutcome::Applied
        }
        None => {
            debug!("No layout position for {}; focus skipped", target);
            FocusOutcome::Skipped
        }
    }
}
