mod canvas;

pub use canvas::Canvas;

use crate::groundtrack::{Plot, RenderError};

/// Drawing surface the finished geometry is handed to.
pub trait Renderer {
    /// Draw `plot` on top of whatever is already on the surface.
    fn draw(&mut self, plot: &Plot) -> Result<(), RenderError>;
    /// Remove everything drawn so far.
    fn clear(&mut self);
}
