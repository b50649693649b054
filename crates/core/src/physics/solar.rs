//! Solar forcing
//!
//! A single point-source sun circles the planet once per day. The planet
//! rotates eastward, so the sub-solar longitude moves westward as time grows:
//!
//! ```text
//! λ_sun(t) = 360 · ((−t) mod D) / D
//! S(φ, λ, t) = max(0, S₀ · cos φ · cos(λ − λ_sun))
//! ```
//!
//! `mod` is the truncated remainder (sign of the dividend), so `λ_sun` lies in
//! (−360°, 0]. Flux has no memory: it is recomputed for every cell each step.

use crate::core_types::units::{Degrees, Seconds, WattsPerSquareMeter};
use crate::grid::LatLonGrid;
use crate::solver::ScalarField;

/// Sub-solar longitude (degrees) at simulation time `t`
#[must_use]
pub fn sub_solar_longitude(time: Seconds, day_length: Seconds) -> Degrees {
    Degrees::new(360.0 * ((-*time) % *day_length) / *day_length)
}

/// Incoming solar flux at one grid point.
///
/// Clamped to zero on the night side and past the terminator.
#[must_use]
pub fn solar_flux(
    insolation: WattsPerSquareMeter,
    latitude: Degrees,
    longitude: Degrees,
    time: Seconds,
    day_length: Seconds,
) -> f64 {
    let sun_longitude = sub_solar_longitude(time, day_length);
    flux_for_sun_position(insolation, latitude, longitude, sun_longitude)
}

#[inline]
fn flux_for_sun_position(
    insolation: WattsPerSquareMeter,
    latitude: Degrees,
    longitude: Degrees,
    sun_longitude: Degrees,
) -> f64 {
    let hour_angle = Degrees::new(*longitude - *sun_longitude);
    let s = *insolation * latitude.to_radians().cos() * hour_angle.to_radians().cos();
    s.max(0.0)
}

/// Fill `out` with the solar flux of every grid cell at time `t`.
///
/// # Panics
///
/// Panics if `out` does not have the grid's shape.
pub fn compute_solar_field(
    grid: &LatLonGrid,
    insolation: WattsPerSquareMeter,
    time: Seconds,
    day_length: Seconds,
    out: &mut ScalarField,
) {
    assert!(
        out.width == grid.n_lon() && out.height == grid.n_lat(),
        "Solar field shape does not match grid"
    );

    let sun_longitude = sub_solar_longitude(time, day_length);
    let longitudes = grid.longitudes();
    for (row, &lat) in out
        .as_mut_slice()
        .chunks_mut(longitudes.len())
        .zip(grid.latitudes())
    {
        for (cell, &lon) in row.iter_mut().zip(longitudes) {
            *cell = flux_for_sun_position(
                insolation,
                Degrees::new(lat),
                Degrees::new(lon),
                sun_longitude,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::units::Meters;
    use approx::assert_relative_eq;

    const DAY: Seconds = Seconds::new(86_400.0);
    const S0: WattsPerSquareMeter = WattsPerSquareMeter::new(1370.0);

    #[test]
    fn test_sub_solar_longitude_moves_west() {
        assert_eq!(*sub_solar_longitude(Seconds::ZERO, DAY), 0.0);
        assert_eq!(*sub_solar_longitude(Seconds::new(21_600.0), DAY), -90.0);
        assert_eq!(*sub_solar_longitude(Seconds::new(43_200.0), DAY), -180.0);
        // Wraps after a full day
        assert_eq!(*sub_solar_longitude(Seconds::new(86_400.0 + 21_600.0), DAY), -90.0);
    }

    #[test]
    fn test_flux_at_sub_solar_point_is_insolation() {
        for t in [0.0, 540.0, 12_345.0, 50_000.0, 200_000.0] {
            let time = Seconds::new(t);
            let sun_lon = sub_solar_longitude(time, DAY);
            let s = solar_flux(S0, Degrees::new(0.0), sun_lon, time, DAY);
            assert_eq!(s, 1370.0, "t = {t}");
        }
    }

    #[test]
    fn test_flux_clamped_on_night_side() {
        let s = solar_flux(S0, Degrees::new(0.0), Degrees::new(180.0), Seconds::ZERO, DAY);
        assert_eq!(s, 0.0);

        let time = Seconds::new(30_000.0);
        let antipode = Degrees::new(*sub_solar_longitude(time, DAY) + 180.0);
        assert_eq!(solar_flux(S0, Degrees::new(30.0), antipode, time, DAY), 0.0);
    }

    #[test]
    fn test_flux_follows_cosine_law() {
        let s = solar_flux(S0, Degrees::new(60.0), Degrees::new(0.0), Seconds::ZERO, DAY);
        assert_relative_eq!(s, 685.0, epsilon = 1e-9);

        let s = solar_flux(S0, Degrees::new(0.0), Degrees::new(60.0), Seconds::ZERO, DAY);
        assert_relative_eq!(s, 685.0, epsilon = 1e-9);
    }

    #[test]
    fn test_flux_never_negative() {
        for lat in (-90..90).step_by(10) {
            for lon in (0..360).step_by(15) {
                let s = solar_flux(
                    S0,
                    Degrees::new(f64::from(lat)),
                    Degrees::new(f64::from(lon)),
                    Seconds::new(7_000.0),
                    DAY,
                );
                assert!(s >= 0.0);
                assert!(s <= 1370.0);
            }
        }
    }

    #[test]
    fn test_solar_field_matches_point_function() {
        let grid = LatLonGrid::new(Degrees::new(30.0), Meters::new(6_400_000.0), DAY);
        let mut field = ScalarField::new(grid.n_lon(), grid.n_lat());
        let time = Seconds::new(10_000.0);
        compute_solar_field(&grid, S0, time, DAY, &mut field);

        for (y, &lat) in grid.latitudes().iter().enumerate() {
            for (x, &lon) in grid.longitudes().iter().enumerate() {
                let expected = solar_flux(S0, Degrees::new(lat), Degrees::new(lon), time, DAY);
                assert_eq!(field.get(x, y), expected);
            }
        }
    }
}
