use serde::Deserialize;
use sgp4::{Constants, Elements};
use utoipa::ToSchema;

use crate::groundtrack::error::PropagationError;
use crate::groundtrack::time::datetime_from_julian;
use crate::groundtrack::types::{JulianDate, StateVector};

#[derive(Debug, Clone, PartialEq, Deserialize, ToSchema)]
pub struct TleLines {
    pub line1: String,
    pub line2: String,
}

/// Source of TEME state vectors.
pub trait Propagator {
    fn propagate(&self, epoch: JulianDate) -> Result<StateVector, PropagationError>;
}

pub struct Sgp4Propagator {
    elements: Elements,
    constants: Constants,
}

impl Sgp4Propagator {
    pub fn from_tle(tle: &TleLines) -> Result<Self, PropagationError> {
        let elements = Elements::from_tle(
            None,
            tle.line1.trim().as_bytes(),
            tle.line2.trim().as_bytes(),
        )
        .map_err(|e| PropagationError::InvalidTle(e.to_string()))?;

        let constants = Constants::from_elements(&elements)
            .map_err(|e| PropagationError::InvalidElements(e.to_string()))?;

        Ok(Self {
            elements,
            constants,
        })
    }

    pub fn norad_id(&self) -> u64 {
        self.elements.norad_id as u64
    }
}

impl Propagator for Sgp4Propagator {
    fn propagate(&self, epoch: JulianDate) -> Result<StateVector, PropagationError> {
        let epoch_error = |message: String| PropagationError::Epoch { epoch, message };

        let datetime = datetime_from_julian(epoch)
            .ok_or_else(|| epoch_error("not representable as a date".into()))?;
        let minutes = self
            .elements
            .datetime_to_minutes_since_epoch(&datetime)
            .map_err(|e| epoch_error(e.to_string()))?;

        let prediction = self
            .constants
            .propagate(minutes)
            .map_err(|e| PropagationError::Propagation {
                epoch,
                message: e.to_string(),
            })?;

        Ok(StateVector {
            epoch,
            position: prediction.position,
            velocity: prediction.velocity,
        })
    }
}
