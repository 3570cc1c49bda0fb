use serde::Serialize;
use utoipa::ToSchema;

use crate::groundtrack::types::JulianDate;

/// Time span of every track plotted since the last reset.
///
/// The altitude chart scales its time axis over all of them so overlaid plots
/// share one axis. Only the extremes and the number of epochs are kept.
#[derive(Debug, Clone, Default)]
pub struct Session {
    count: usize,
    min_time: JulianDate,
    max_time: JulianDate,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionSummary {
    pub epoch_count: usize,
    pub min_time: Option<JulianDate>,
    pub max_time: Option<JulianDate>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, epochs: impl IntoIterator<Item = JulianDate>) {
        for epoch in epochs {
            if self.count == 0 {
                self.min_time = epoch;
                self.max_time = epoch;
            } else {
                self.min_time = self.min_time.min(epoch);
                self.max_time = self.max_time.max(epoch);
            }
            self.count += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn time_range(&self) -> Option<(JulianDate, JulianDate)> {
        if self.is_empty() {
            None
        } else {
            Some((self.min_time, self.max_time))
        }
    }

    pub fn summary(&self) -> SessionSummary {
        let range = self.time_range();
        SessionSummary {
            epoch_count: self.len(),
            min_time: range.map(|r| r.0),
            max_time: range.map(|r| r.1),
        }
    }
}
