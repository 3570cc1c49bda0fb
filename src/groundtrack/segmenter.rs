//! Splitting of the ground track at the antimeridian.
//!
//! Two consecutive samples whose longitudes differ by more than the cutoff are
//! taken to straddle the ±180° line. The polyline is cut there: the segment
//! being built is closed with an interpolated vertex on the map edge, and the
//! next segment opens with a vertex on the edge facing the point before the
//! jump.

use serde::Serialize;
use utoipa::ToSchema;

use crate::groundtrack::types::{Arrow, TrackPoint, Vertex};

pub const DEFAULT_LONGITUDE_JUMP_CUTOFF: f64 = 180.0;

/// Run of vertices that can be drawn as one polyline on the map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct Segment {
    pub vertices: Vec<Vertex>,
}

impl Segment {
    /// Direction arrow on the edge touching the vertex nearest to the prime
    /// meridian.
    pub fn arrow(&self, size: f64) -> Option<Arrow> {
        if self.vertices.len() < 2 {
            return None;
        }

        let nearest = self
            .vertices
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.longitude.abs().total_cmp(&b.1.longitude.abs()))
            .map(|(index, _)| index)?;

        let (tail, head) = if nearest == self.vertices.len() - 1 {
            (nearest - 1, nearest)
        } else {
            (nearest, nearest + 1)
        };

        let color = self.vertices[head].edge_color?;
        Some(Arrow {
            tail: self.vertices[tail].position(),
            head: self.vertices[head].position(),
            color,
            size,
        })
    }
}

/// Iterator over the map segments of a track.
pub struct Segments<'a> {
    points: &'a [TrackPoint],
    cutoff: f64,
    last_overflow: usize,
    seed: Option<Vertex>,
    finished: bool,
}

pub fn segments(points: &[TrackPoint], cutoff: f64) -> Segments<'_> {
    Segments {
        points,
        cutoff,
        last_overflow: 0,
        seed: None,
        finished: points.is_empty(),
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        if self.finished {
            return None;
        }

        let start = self.last_overflow;
        let mut vertices: Vec<Vertex> = self.seed.take().into_iter().collect();

        for i in start..self.points.len() - 1 {
            let here = &self.points[i];
            let next = &self.points[i + 1];
            let jump = (here.geodetic.longitude_deg - next.geodetic.longitude_deg).abs();
            if jump > self.cutoff {
                let (exit, entry) = boundary_vertices(here, next);
                vertices.extend(self.points[start..=i].iter().map(Vertex::from));
                vertices.extend(exit);

                self.seed = entry;
                self.last_overflow = i + 1;
                return Some(Segment { vertices });
            }
        }

        vertices.extend(self.points[start..].iter().map(Vertex::from));
        self.finished = true;
        Some(Segment { vertices })
    }
}

/// Vertices on the map edge where the line `here -> next` leaves and
/// re-enters the map.
///
/// The exit edge follows the sign of `next`: it is shifted by a full turn
/// towards `here` and the latitude is read off the straight line through both
/// at ±180°. The entry edge follows the sign of `here`. A point sitting exactly
/// on the prime meridian gets no vertex on its side, and the entry latitude
/// falls back to the equator when there was no exit.
fn boundary_vertices(here: &TrackPoint, next: &TrackPoint) -> (Option<Vertex>, Option<Vertex>) {
    let lon0 = here.geodetic.longitude_deg;
    let lat0 = here.geodetic.latitude_deg;
    let lon1 = next.geodetic.longitude_deg;
    let lat1 = next.geodetic.latitude_deg;

    let exit_edge = if lon1 < 0.0 {
        Some((lon1 + 360.0, 180.0))
    } else if lon1 > 0.0 {
        Some((lon1 - 360.0, -180.0))
    } else {
        None
    };

    let exit = exit_edge.map(|(unwrapped_lon1, edge_lon)| {
        let slope = (lat1 - lat0) / (unwrapped_lon1 - lon0);
        Vertex {
            longitude: edge_lon,
            latitude: slope * (edge_lon - lon0) + lat0,
            edge_color: next.edge_color,
        }
    });
    let edge_lat = exit.map_or(0.0, |v| v.latitude);

    let entry_lon = if lon0 > 0.0 {
        Some(-180.0)
    } else if lon0 < 0.0 {
        Some(180.0)
    } else {
        None
    };
    let entry = entry_lon.map(|longitude| Vertex {
        longitude,
        latitude: edge_lat,
        edge_color: None,
    });

    (exit, entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::groundtrack::types::{GeodeticPoint, Rgb};

    fn color(i: usize) -> Rgb {
        Rgb::new(1.0, i as f64 / 10.0, 0.0)
    }

    /// Track with edge `i -> i+1` colored `color(i)`.
    fn track(coords: &[(f64, f64)]) -> Vec<TrackPoint> {
        coords
            .iter()
            .enumerate()
            .map(|(i, &(lon, lat))| TrackPoint {
                epoch: 2_459_000.5 + i as f64 / 1440.0,
                geodetic: GeodeticPoint {
                    latitude_deg: lat,
                    longitude_deg: lon,
                    height_km: 400.0,
                },
                edge_color: i.checked_sub(1).map(color),
            })
            .collect()
    }

    fn split(points: &[TrackPoint]) -> Vec<Segment> {
        segments(points, DEFAULT_LONGITUDE_JUMP_CUTOFF).collect()
    }

    #[test]
    fn single_crossing_is_split_with_interpolated_edges() {
        let points = track(&[(170.0, 10.0), (-170.0, 20.0)]);
        let segs = split(&points);

        assert_eq!(segs.len(), 2);
        let total: usize = segs.iter().map(|s| s.vertices.len()).sum();
        assert_eq!(total, points.len() + 2);

        // m * (180 - c) + b, with the second point shifted to 190°
        let m = (20.0 - 10.0) / ((-170.0 + 360.0) - 170.0);
        let expected = m * (180.0 - 170.0) + 10.0;

        let exit = segs[0].vertices[1];
        assert_eq!(exit.longitude, 180.0);
        assert!((exit.latitude - expected).abs() < 1e-9);
        assert_eq!(exit.edge_color, Some(color(0)));

        let entry = segs[1].vertices[0];
        assert_eq!(entry.longitude, -180.0);
        assert!((entry.latitude - expected).abs() < 1e-9);
        assert_eq!(entry.edge_color, None);
        assert_eq!(segs[1].vertices[1].edge_color, Some(color(0)));
        assert_eq!(segs[1].vertices[1].longitude, -170.0);
    }

    #[test]
    fn westward_crossing_exits_on_the_left_edge() {
        let points = track(&[(-175.0, -5.0), (175.0, -15.0)]);
        let segs = split(&points);

        assert_eq!(segs.len(), 2);
        let exit = segs[0].vertices.last().unwrap();
        assert_eq!(exit.longitude, -180.0);
        // line from (-175, -5) to (-185, -15)
        assert!((exit.latitude + 10.0).abs() < 1e-9);
        assert_eq!(segs[1].vertices[0].longitude, 180.0);
    }

    #[test]
    fn track_without_crossing_is_one_segment() {
        let points = track(&[(-170.0, 0.0), (-90.0, 20.0), (0.0, 40.0), (90.0, 20.0), (170.0, 0.0)]);
        let segs = split(&points);

        assert_eq!(segs.len(), 1);
        let expected: Vec<Vertex> = points.iter().map(Vertex::from).collect();
        assert_eq!(segs[0].vertices, expected);
    }

    #[test]
    fn jump_equal_to_cutoff_does_not_split() {
        let points = track(&[(90.0, 0.0), (-90.0, 0.0)]);
        assert_eq!(split(&points).len(), 1);

        let points = track(&[(10.0, 0.0), (-20.0, 0.0)]);
        assert_eq!(segments(&points, 30.0).count(), 1);
        assert_eq!(segments(&points, 29.999).count(), 2);
    }

    #[test]
    fn segmenting_is_idempotent() {
        let points = track(&[(-30.0, 1.0), (-10.0, 2.0), (15.0, 3.0), (40.0, 4.0)]);
        let first = split(&points);
        let second = split(&points);
        assert_eq!(first, second);
    }

    #[test]
    fn crossings_on_adjacent_pairs_are_independent() {
        let points = track(&[(170.0, 0.0), (-170.0, 10.0), (170.0, 20.0)]);
        let segs = split(&points);

        assert_eq!(segs.len(), 3);
        assert_eq!(segs.iter().map(|s| s.vertices.len()).sum::<usize>(), points.len() + 4);

        let middle = &segs[1];
        assert_eq!(middle.vertices.len(), 3);
        assert_eq!(middle.vertices[0].longitude, -180.0);
        assert_eq!(middle.vertices[2].longitude, -180.0);
        assert_eq!(middle.vertices[2].edge_color, Some(color(1)));
        assert_eq!(segs[2].vertices[0].longitude, 180.0);
    }

    #[test]
    fn crossing_on_last_pair() {
        let points = track(&[(150.0, 0.0), (165.0, 5.0), (179.0, 9.0), (-172.0, 12.0)]);
        let segs = split(&points);

        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].vertices.len(), 4);
        assert_eq!(segs[1].vertices.len(), 2);
        assert_eq!(segs[1].vertices[1].edge_color, Some(color(2)));
    }

    #[test]
    fn degenerate_tracks() {
        assert_eq!(split(&[]).len(), 0);

        let single = split(&track(&[(12.0, 34.0)]));
        assert_eq!(single.len(), 1);
        assert_eq!(single[0].vertices.len(), 1);
        assert!(single[0].arrow(10.0).is_none());
    }

    #[test]
    fn arrow_sits_next_to_the_vertex_nearest_greenwich() {
        let points = track(&[(-20.0, 0.0), (-5.0, 5.0), (10.0, 10.0), (25.0, 15.0)]);
        let seg = &split(&points)[0];
        let arrow = seg.arrow(10.0).unwrap();

        assert_eq!(arrow.tail.longitude, -5.0);
        assert_eq!(arrow.head.longitude, 10.0);
        assert_eq!(arrow.color, color(1));
        assert_eq!(arrow.size, 10.0);
    }

    #[test]
    fn arrow_on_last_vertex_uses_previous_edge() {
        let points = track(&[(170.0, 10.0), (-170.0, 20.0)]);
        let segs = split(&points);

        let arrow = segs[0].arrow(4.0).unwrap();
        assert_eq!(arrow.tail.longitude, 170.0);
        assert_eq!(arrow.head.longitude, 180.0);
        assert_eq!(arrow.color, color(0));

        let arrow = segs[1].arrow(4.0).unwrap();
        assert_eq!(arrow.tail.longitude, -180.0);
        assert_eq!(arrow.head.longitude, -170.0);
        assert_eq!(arrow.color, color(0));
    }

    #[test]
    fn entry_edge_follows_the_point_before_the_jump() {
        // same-sign jump, only possible with a cutoff below 180
        let points = track(&[(-10.0, 0.0), (-120.0, 10.0)]);
        let segs: Vec<Segment> = segments(&points, 90.0).collect();

        assert_eq!(segs.len(), 2);
        let exit = segs[0].vertices[1];
        assert_eq!(exit.longitude, 180.0);
        // second point shifted to 240°
        let expected = (10.0 - 0.0) / (240.0 + 10.0) * (180.0 + 10.0);
        assert!((exit.latitude - expected).abs() < 1e-9);

        let entry = segs[1].vertices[0];
        assert_eq!(entry.longitude, 180.0);
        assert!((entry.latitude - expected).abs() < 1e-9);
        assert_eq!(segs[1].vertices[1].longitude, -120.0);
    }

    #[test]
    fn prime_meridian_points_get_no_edge_vertex() {
        let points = track(&[(100.0, 5.0), (0.0, 10.0)]);
        let segs: Vec<Segment> = segments(&points, 90.0).collect();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].vertices.len(), 1);
        let entry = segs[1].vertices[0];
        assert_eq!(entry.longitude, -180.0);
        assert_eq!(entry.latitude, 0.0);
        assert_eq!(segs[1].vertices.len(), 2);

        let points = track(&[(0.0, 5.0), (-100.0, 10.0)]);
        let segs: Vec<Segment> = segments(&points, 90.0).collect();
        assert_eq!(segs.len(), 2);
        assert_eq!(segs[0].vertices.last().unwrap().longitude, 180.0);
        assert_eq!(segs[1].vertices.len(), 1);
        assert_eq!(segs[1].vertices[0].longitude, -100.0);
    }

    #[test]
    fn vertices_carry_incoming_edge_colors() {
        let points = track(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]);
        let seg = &split(&points)[0];
        let colors: Vec<Option<Rgb>> = seg.vertices.iter().map(|v| v.edge_color).collect();
        assert_eq!(colors, vec![None, Some(color(0)), Some(color(1))]);
    }
}
