pub mod error;
pub mod plot;
