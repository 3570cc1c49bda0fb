pub mod chart;
pub mod color;
mod error;
pub mod frames;
mod pipeline;
pub mod propagation;
mod request;
pub mod sampler;
pub mod segmenter;
mod session;
pub mod time;
mod types;

pub use chart::{AltitudeChart, AltitudePoint, TimeAxis};
pub use error::{FailureDomain, PlotError, RenderError};
pub use pipeline::{plot, Plot};
pub use propagation::TleLines;
pub use request::{IncrementFields, PlotRequest, TimeFields};
pub use segmenter::Segment;
pub use session::{Session, SessionSummary};
pub use types::{Arrow, GeodeticPoint, MapPoint, Rgb, Track, TrackPoint, Vertex};
