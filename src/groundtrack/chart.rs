use serde::Serialize;
use utoipa::ToSchema;

use crate::groundtrack::session::Session;
use crate::groundtrack::time::MINUTES_PER_DAY;
use crate::groundtrack::types::{JulianDate, Rgb, Track};

pub const DEFAULT_HEIGHT_TIME_STEPS: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct AltitudePoint {
    pub epoch: JulianDate,
    pub height_km: f64,
    /// Color of the line arriving at this point.
    pub edge_color: Option<Rgb>,
}

/// Time axis of the altitude chart, in Julian dates, labelled in elapsed
/// minutes since `min_time`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TimeAxis {
    pub min_time: JulianDate,
    pub max_time: JulianDate,
    pub step: f64,
    pub ticks: Vec<JulianDate>,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct AltitudeChart {
    pub series: Vec<AltitudePoint>,
    pub axis: TimeAxis,
}

pub fn build_altitude_chart(track: &Track, session: &Session, steps: u32) -> AltitudeChart {
    let series = track
        .points
        .iter()
        .map(|p| AltitudePoint {
            epoch: p.epoch,
            height_km: p.geodetic.height_km,
            edge_color: p.edge_color,
        })
        .collect();

    let axis = match session.time_range() {
        Some((min_time, max_time)) => time_axis(min_time, max_time, steps),
        None => time_axis(0.0, 0.0, steps),
    };

    AltitudeChart { series, axis }
}

/// Tick positions and labels for `steps` intervals over `[min_time, max_time)`.
///
/// Positions and labels are generated independently, so rounding can leave
/// them one apart: missing labels are padded with the final elapsed-minutes
/// label, surplus labels are dropped from the end.
pub fn time_axis(min_time: JulianDate, max_time: JulianDate, steps: u32) -> TimeAxis {
    let step = (max_time - min_time) / f64::from(steps);
    let ticks = arange(min_time, max_time, step);

    let max_label = (max_time - min_time) * MINUTES_PER_DAY;
    let mut labels: Vec<String> = arange(0.0, max_label, step * MINUTES_PER_DAY)
        .into_iter()
        .map(format_minutes)
        .collect();

    if labels.len() < ticks.len() {
        let last = format_minutes(max_label);
        labels.resize(ticks.len(), last);
    } else {
        labels.truncate(ticks.len());
    }

    TimeAxis {
        min_time,
        max_time,
        step,
        ticks,
        labels,
    }
}

/// Half-open range `[start, stop)` with `ceil((stop - start) / step)` values.
fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    if !(step > 0.0) || !step.is_finite() || !(stop > start) {
        return Vec::new();
    }
    let len = ((stop - start) / step).ceil() as usize;
    let delta = (start + step) - start;
    (0..len).map(|i| start + i as f64 * delta).collect()
}

fn format_minutes(minutes: f64) -> String {
    format!("{:.1}", minutes.round_ties_even())
}
