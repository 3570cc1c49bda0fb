use utoipa::OpenApi;

use crate::groundtrack::{
    AltitudeChart, AltitudePoint, Arrow, GeodeticPoint, IncrementFields, MapPoint, Plot,
    PlotRequest, Rgb, Segment, SessionSummary, TimeAxis, TimeFields, TleLines, Track, TrackPoint,
    Vertex,
};
use crate::render::Canvas;

use super::api::error::ErrorResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::api::plot::plot,
        super::api::plot::clear,
        super::api::plot::session,
        super::api::plot::canvas,
    ),
    components(
        schemas(
            PlotRequest,
            TleLines,
            TimeFields,
            IncrementFields,
            Plot,
            Track,
            TrackPoint,
            GeodeticPoint,
            Segment,
            Vertex,
            MapPoint,
            Arrow,
            Rgb,
            AltitudeChart,
            AltitudePoint,
            TimeAxis,
            SessionSummary,
            Canvas,
            ErrorResponse,
        )
    ),
    info(
        title = "Groundtrack API",
        description = "Plot satellite ground tracks and altitude profiles from TLEs",
        version = "0.1.0"
    ),
    tags(
        (name = "plot", description = "Ground track plotting")
    )
)]
pub struct ApiDoc;
