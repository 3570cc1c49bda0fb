use chrono::NaiveDateTime;

use crate::groundtrack::error::PropagationError;
use crate::groundtrack::time::datetime_from_julian;
use crate::groundtrack::types::{GeodeticPoint, StateVector};

// WGS-84
pub const WGS84_A_KM: f64 = 6378.137;
pub const WGS84_E2: f64 = 0.006_694_379_990_14;

const GEODETIC_MAX_ITERATIONS: usize = 10;
const GEODETIC_TOLERANCE_RAD: f64 = 1e-14;

/// Greenwich sidereal angle in radians.
pub fn sidereal_time(datetime: &NaiveDateTime) -> f64 {
    sgp4::iau_epoch_to_sidereal_time(sgp4::julian_years_since_j2000(datetime))
}

pub fn teme_to_ecef_position(pos_teme: [f64; 3], gmst: f64) -> [f64; 3] {
    let (sin_gmst, cos_gmst) = gmst.sin_cos();
    [
        pos_teme[0] * cos_gmst + pos_teme[1] * sin_gmst,
        -pos_teme[0] * sin_gmst + pos_teme[1] * cos_gmst,
        pos_teme[2],
    ]
}

/// Project an Earth-fixed position (km) onto the WGS-84 ellipsoid.
pub fn ecef_to_geodetic(pos_ecef: [f64; 3]) -> GeodeticPoint {
    let [x, y, z] = pos_ecef;
    let p = x.hypot(y);

    let mut lat = z.atan2(p * (1.0 - WGS84_E2));
    for _ in 0..GEODETIC_MAX_ITERATIONS {
        let sin_lat = lat.sin();
        let n = WGS84_A_KM / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
        let next = (z + WGS84_E2 * n * sin_lat).atan2(p);
        let converged = (next - lat).abs() < GEODETIC_TOLERANCE_RAD;
        lat = next;
        if converged {
            break;
        }
    }

    let (sin_lat, cos_lat) = lat.sin_cos();
    let height_km =
        p * cos_lat + z * sin_lat - WGS84_A_KM * (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();

    GeodeticPoint {
        latitude_deg: lat.to_degrees(),
        longitude_deg: normalize_longitude(y.atan2(x).to_degrees()),
        height_km,
    }
}

pub fn teme_to_geodetic(pos_teme: [f64; 3], gmst: f64) -> GeodeticPoint {
    ecef_to_geodetic(teme_to_ecef_position(pos_teme, gmst))
}

/// Sub-satellite point and height of a TEME state at its own epoch.
pub fn state_to_geodetic(state: &StateVector) -> Result<GeodeticPoint, PropagationError> {
    let datetime =
        datetime_from_julian(state.epoch).ok_or_else(|| PropagationError::Epoch {
            epoch: state.epoch,
            message: "not representable as a date".into(),
        })?;
    Ok(teme_to_geodetic(state.position, sidereal_time(&datetime)))
}

/// Wrap a longitude into `(-180, 180]`.
pub fn normalize_longitude(lon_deg: f64) -> f64 {
    let wrapped = (lon_deg + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeDelta};
    use std::f64::consts::FRAC_PI_2;

    fn geodetic_to_ecef(lat_deg: f64, lon_deg: f64, height_km: f64) -> [f64; 3] {
        let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
        let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
        let n = WGS84_A_KM / (1.0 - WGS84_E2 * sin_lat * sin_lat).sqrt();
        [
            (n + height_km) * cos_lat * cos_lon,
            (n + height_km) * cos_lat * sin_lon,
            (n * (1.0 - WGS84_E2) + height_km) * sin_lat,
        ]
    }

    #[test]
    fn geodetic_round_trip() {
        let cases = [
            (0.0, 0.0, 0.0),
            (51.6, -120.25, 420.0),
            (-33.9, 151.2, 0.05),
            (89.5, 10.0, 800.0),
            (-72.0, 179.9, 35_786.0),
        ];
        for (lat, lon, h) in cases {
            let g = ecef_to_geodetic(geodetic_to_ecef(lat, lon, h));
            assert!((g.latitude_deg - lat).abs() < 1e-9, "lat {lat}: {g:?}");
            assert!((g.longitude_deg - lon).abs() < 1e-9, "lon {lon}: {g:?}");
            assert!((g.height_km - h).abs() < 1e-6, "height {h}: {g:?}");
        }
    }

    #[test]
    fn pole_is_handled() {
        let b = WGS84_A_KM * (1.0 - WGS84_E2).sqrt();
        let g = ecef_to_geodetic([0.0, 0.0, b + 500.0]);
        assert!((g.latitude_deg - 90.0).abs() < 1e-9);
        assert!((g.height_km - 500.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_by_sidereal_angle() {
        let ecef = teme_to_ecef_position([7000.0, 0.0, 100.0], FRAC_PI_2);
        assert!(ecef[0].abs() < 1e-9);
        assert!((ecef[1] + 7000.0).abs() < 1e-9);
        assert_eq!(ecef[2], 100.0);

        let g = teme_to_geodetic([7000.0, 0.0, 0.0], FRAC_PI_2);
        assert!((g.longitude_deg + 90.0).abs() < 1e-9);
    }

    #[test]
    fn longitude_is_wrapped_into_half_open_range() {
        assert_eq!(normalize_longitude(-180.0), 180.0);
        assert_eq!(normalize_longitude(180.0), 180.0);
        assert_eq!(normalize_longitude(540.0), 180.0);
        assert!((normalize_longitude(190.0) + 170.0).abs() < 1e-12);
        assert!((normalize_longitude(-190.0) - 170.0).abs() < 1e-12);
        assert_eq!(normalize_longitude(45.5), 45.5);
    }

    #[test]
    fn sidereal_angle_advances_one_turn_per_sidereal_day() {
        let sidereal_day_us = (0.997_269_566_3 * 86_400.0 * 1e6_f64).round() as i64;
        let start = NaiveDate::from_ymd_opt(2020, 7, 12)
            .unwrap()
            .and_hms_opt(21, 0, 0)
            .unwrap();
        let a = sidereal_time(&start);
        let b = sidereal_time(&(start + TimeDelta::microseconds(sidereal_day_us)));
        let diff = (b - a).rem_euclid(std::f64::consts::TAU);
        let wrapped = diff.min(std::f64::consts::TAU - diff);
        assert!(wrapped < 1e-6, "drift {wrapped}");
    }

    #[test]
    fn antimeridian_point_has_positive_longitude() {
        let g = ecef_to_geodetic([-7000.0, -0.0, 0.0]);
        assert_eq!(g.longitude_deg, 180.0);
    }

    #[test]
    fn unrepresentable_epoch_is_an_epoch_error() {
        let state = StateVector {
            epoch: f64::INFINITY,
            position: [7000.0, 0.0, 0.0],
            velocity: [0.0; 3],
        };
        assert!(matches!(
            state_to_geodetic(&state),
            Err(PropagationError::Epoch { .. })
        ));
    }
}
