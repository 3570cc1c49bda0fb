use std::sync::Arc;
use tokio::sync::Mutex;

use crate::config::PlotSettings;
use crate::groundtrack::Session;
use crate::render::{Canvas, Renderer};

/// Session and canvas shared by every request, like one open plot window.
#[derive(Debug, Default)]
pub struct Workspace {
    pub session: Session,
    pub canvas: Canvas,
}

impl Workspace {
    pub fn reset(&mut self) {
        self.session.reset();
        self.canvas.clear();
    }
}

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<PlotSettings>,
    pub workspace: Arc<Mutex<Workspace>>,
}

impl AppState {
    pub fn new(settings: PlotSettings) -> Self {
        Self {
            settings: Arc::new(settings),
            workspace: Arc::new(Mutex::new(Workspace::default())),
        }
    }
}
