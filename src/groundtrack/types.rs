use serde::Serialize;
use utoipa::ToSchema;

use crate::groundtrack::error::ValidationError;

/// Epoch expressed as a UTC Julian date.
pub type JulianDate = f64;

/// Color with each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ValidationError> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ValidationError::InvalidColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map(|v| f64::from(v) / 255.0)
                .map_err(|_| ValidationError::InvalidColor(hex.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVector {
    pub epoch: JulianDate,
    /// TEME position, km
    pub position: [f64; 3],
    /// TEME velocity, km/s
    pub velocity: [f64; 3],
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct GeodeticPoint {
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub height_km: f64,
}

/// One sample of the ground track.
///
/// `edge_color` belongs to the edge that ends at this point, so the first
/// point of a track never has one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct TrackPoint {
    pub epoch: JulianDate,
    pub geodetic: GeodeticPoint,
    pub edge_color: Option<Rgb>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Track {
    pub points: Vec<TrackPoint>,
}

impl Track {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn epochs(&self) -> impl Iterator<Item = JulianDate> + '_ {
        self.points.iter().map(|p| p.epoch)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct MapPoint {
    pub longitude: f64,
    pub latitude: f64,
}

/// Map vertex of a segment; `edge_color` colors the line arriving here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Vertex {
    pub longitude: f64,
    pub latitude: f64,
    pub edge_color: Option<Rgb>,
}

impl Vertex {
    pub fn position(&self) -> MapPoint {
        MapPoint {
            longitude: self.longitude,
            latitude: self.latitude,
        }
    }
}

impl From<&TrackPoint> for Vertex {
    fn from(point: &TrackPoint) -> Self {
        Self {
            longitude: point.geodetic.longitude_deg,
            latitude: point.geodetic.latitude_deg,
            edge_color: point.edge_color,
        }
    }
}

/// Direction marker drawn along one edge of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Arrow {
    pub tail: MapPoint,
    pub head: MapPoint,
    pub color: Rgb,
    pub size: f64,
}
