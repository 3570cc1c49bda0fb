use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use utoipa::ToSchema;

use crate::groundtrack::{Plot, RenderError};
use crate::render::Renderer;

const DEFAULT_FILE_STEM: &str = "groundtrack";

/// In-memory surface that overlays every drawn plot and exports them as JSON.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct Canvas {
    /// Title of the most recent plot.
    pub title: String,
    pub plots: Vec<Plot>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn export(&self, path: &Path) -> Result<(), RenderError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        log::info!("exported {} plot(s) to {}", self.plots.len(), path.display());
        Ok(())
    }

    /// File name offered when saving: the title, or a generic stem.
    pub fn default_file_name(&self) -> String {
        let title = self.title.trim();
        let stem = if title.is_empty() {
            DEFAULT_FILE_STEM
        } else {
            title
        };
        format!("{}.json", stem)
    }
}

impl Renderer for Canvas {
    fn draw(&mut self, plot: &Plot) -> Result<(), RenderError> {
        self.title = plot.title.clone();
        self.plots.push(plot.clone());
        Ok(())
    }

    fn clear(&mut self) {
        self.title.clear();
        self.plots.clear();
    }
}
