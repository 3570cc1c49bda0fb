use serde::Serialize;
use utoipa::ToSchema;

use crate::config::PlotSettings;
use crate::groundtrack::chart::{build_altitude_chart, AltitudeChart};
use crate::groundtrack::color::edge_colors;
use crate::groundtrack::error::{PlotError, PropagationError};
use crate::groundtrack::frames::state_to_geodetic;
use crate::groundtrack::propagation::{Propagator, Sgp4Propagator};
use crate::groundtrack::request::{PlotRequest, ValidatedRequest};
use crate::groundtrack::sampler::sample_epochs;
use crate::groundtrack::segmenter::{segments, Segment};
use crate::groundtrack::session::Session;
use crate::groundtrack::types::{Arrow, Track, TrackPoint};
use crate::render::Renderer;

/// Everything the renderer needs for one request.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Plot {
    pub title: String,
    /// Human readable description of the inputs.
    pub summary: String,
    pub track: Track,
    pub segments: Vec<Segment>,
    pub arrows: Vec<Arrow>,
    pub altitude: AltitudeChart,
}

/// Sample, propagate and convert the request into a colored ground track.
///
/// Fails on the first epoch the propagator rejects; no partial track is
/// returned.
pub fn compute_track<P: Propagator>(
    request: &ValidatedRequest,
    propagator: &P,
) -> Result<Track, PropagationError> {
    let epochs = sample_epochs(request.start, request.end, request.increment);
    log::debug!("propagating {} samples", epochs.len());

    let states = epochs
        .iter()
        .map(|&epoch| propagator.propagate(epoch))
        .collect::<Result<Vec<_>, _>>()?;

    let positions: Vec<[f64; 3]> = states.iter().map(|s| s.position).collect();
    let colors = edge_colors(&positions, request.color_mode);

    let points = states
        .iter()
        .enumerate()
        .map(|(i, state)| {
            Ok(TrackPoint {
                epoch: state.epoch,
                geodetic: state_to_geodetic(state)?,
                edge_color: i.checked_sub(1).and_then(|edge| colors.get(edge).copied()),
            })
        })
        .collect::<Result<Vec<_>, PropagationError>>()?;

    Ok(Track { points })
}

/// Map segments, arrows and the altitude chart for an already computed track.
pub fn build_plot(
    request: &ValidatedRequest,
    track: Track,
    settings: &PlotSettings,
    session: &Session,
) -> Plot {
    let segments: Vec<Segment> = segments(&track.points, settings.longitude_jump_cutoff).collect();
    let arrows = if request.arrows {
        segments
            .iter()
            .filter_map(|s| s.arrow(settings.arrow_size))
            .collect()
    } else {
        Vec::new()
    };
    let altitude = build_altitude_chart(&track, session, settings.height_time_steps);

    Plot {
        title: request.title.clone(),
        summary: request.to_string(),
        track,
        segments,
        arrows,
        altitude,
    }
}

/// Validate, compute and draw one request.
///
/// The session only grows once the track has been computed, and it keeps
/// those epochs even if drawing fails afterwards.
pub fn plot<R: Renderer>(
    request: &PlotRequest,
    settings: &PlotSettings,
    session: &mut Session,
    renderer: &mut R,
) -> Result<Plot, PlotError> {
    let validated = request.validate(settings.color)?;
    log::info!("SETUP INFO:\n{}", validated);

    let propagator = Sgp4Propagator::from_tle(&validated.tle)?;
    log::debug!("loaded elements for NORAD {}", propagator.norad_id());

    plot_with(&validated, &propagator, settings, session, renderer)
}

pub fn plot_with<P: Propagator, R: Renderer>(
    request: &ValidatedRequest,
    propagator: &P,
    settings: &PlotSettings,
    session: &mut Session,
    renderer: &mut R,
) -> Result<Plot, PlotError> {
    let track = compute_track(request, propagator)?;
    session.extend(track.epochs());

    let plot = build_plot(request, track, settings, session);
    log::info!(
        "plotted {} points in {} segments ({} epochs in session)",
        plot.track.len(),
        plot.segments.len(),
        session.len()
    );

    renderer.draw(&plot)?;
    Ok(plot)
}
