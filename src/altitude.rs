//! Altitude approximations that avoid `powf`.
//!
//! The barometric formula `44330 * (1 - (p / p0)^(1 / 5.255))` is replaced by
//! Taylor expansions around 95000 Pa, the middle of the range a BMP085 sees
//! between sea level and a few kilometres. The `std` variants assume standard
//! sea-level pressure and need integer arithmetic only.
//!
//! With the `altitude-extra-precision` feature the third-order terms are added.

use crate::hw_def::STANDARD_SEA_LEVEL_PA;

const EXPANSION_POINT_PA: i32 = 95_000;

/// Altitude in millimetres for the given sea-level pressure (both in Pa).
///
/// The measured pressure term is expanded around 95000 Pa, not 101325 Pa; the
/// coefficients (`3.92585e8 = 4.433e7 * 95000^0.1903`) only hold for that point.
/// The sea-level term is expanded around 101325 Pa.
pub fn altitude_mm(pressure_pa: i32, sea_level_pa: i32) -> i32 {
    let ax1 = sea_level_pa.wrapping_sub(STANDARD_SEA_LEVEL_PA) as i64;
    let ax2 = ax1 * ax1;

    // (1 / p0)^(1 / 5.255), expanded around the standard atmosphere
    let mut b: f32 = 0.111542;
    b += -2.09483e-7 * ax1 as f32;
    b += 1.23043e-12 * ax2 as f32;
    #[cfg(feature = "altitude-extra-precision")]
    {
        b += -8.86586e-18 * (ax2 * ax1) as f32;
    }

    let px1 = pressure_pa.wrapping_sub(EXPANSION_POINT_PA) as i64;
    let px2 = px1 * px1;

    #[allow(unused_mut)]
    let mut altitude: f32 = 4.433e7 - 3.92585e8 * b - 786.388 * b * px1 as f32 + 0.00335128 * b * px2 as f32;
    #[cfg(feature = "altitude-extra-precision")]
    {
        altitude += -2.12801e-8 * b * (px2 * px1) as f32;
    }

    altitude as i32
}

/// Altitude in metres for the given sea-level pressure (both in Pa).
pub fn altitude_m(pressure_pa: i32, sea_level_pa: i32) -> f32 {
    altitude_mm(pressure_pa, sea_level_pa) as f32 / 1000.0
}

/// Altitude in millimetres at standard sea-level pressure, integer only.
///
/// Uncalibrated readings can be off by up to about 100 m depending on the
/// weather.
pub fn altitude_std_mm(pressure_pa: i32) -> i32 {
    let moo = EXPANSION_POINT_PA.wrapping_sub(pressure_pa);
    let moo2 = moo as i64 * moo as i64;

    let mut altitude: i32 = 540_418;
    altitude = altitude.wrapping_add(22455i32.wrapping_mul(moo) >> 8);
    altitude = altitude.wrapping_add(((moo2 >> 12) + (moo2 >> 13) + (moo2 >> 17)) as i32);

    #[cfg(feature = "altitude-extra-precision")]
    {
        let moo64 = (moo >> 6) as i64;
        let moo364 = moo64 * moo64 * moo64;
        altitude = altitude.wrapping_add((moo >> 12) + (moo >> 17) + (moo >> 18));
        altitude = altitude.wrapping_add(
            ((moo364 >> 11) + (moo364 >> 13) + (moo364 >> 17) + (moo364 >> 18) + (moo364 >> 21)) as i32,
        );
    }

    altitude
}

fn altitude_std_dm_wide(pressure_pa: i32) -> i32 {
    let moo = EXPANSION_POINT_PA.wrapping_sub(pressure_pa);
    let moo2 = moo as i64 * moo as i64;
    5404i32
        .wrapping_add(28742i32.wrapping_mul(moo) >> 15)
        .wrapping_add((moo2 >> 18) as i32)
}

/// Altitude in decimetres at standard sea-level pressure, as a 16-bit value.
///
/// Valid from about -3.2 km to 3.2 km; outside that range the result wraps.
///
/// | pressure | exact  | this   |
/// |----------|--------|--------|
/// | 105005   | -301 m | -299 m |
/// | 100010   | 110 m  | 110 m  |
/// | 95015    | 539 m  | 539 m  |
/// | 90020    | 986 m  | 986 m  |
/// | 85025    | 1455 m | 1453 m |
/// | 80030    | 1946 m | 1938 m |
/// | 75035    | 2462 m | 2443 m |
/// | 70040    | 3008 m | 2967 m |
pub fn altitude_std_dm(pressure_pa: i32) -> i16 {
    altitude_std_dm_wide(pressure_pa) as i16
}

/// Same approximation as [`altitude_std_dm`], unsigned, covering about
/// 0.5 km to 6.5 km.
pub fn altitude_std_dm_unsigned(pressure_pa: i32) -> u16 {
    altitude_std_dm_wide(pressure_pa) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: i32, expected: i32, tolerance: i32) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "{actual} not within {tolerance} of {expected}"
        );
    }

    #[test]
    fn dm_matches_accuracy_table() {
        let table = [
            (105005, -299),
            (100010, 110),
            (95015, 539),
            (90020, 986),
            (85025, 1453),
            (80030, 1938),
            (75035, 2443),
            (70040, 2967),
        ];
        for (pressure, metres) in table {
            assert_eq!(altitude_std_dm(pressure) / 10, metres, "{pressure} Pa");
        }
    }

    #[test]
    fn dm_exact_values() {
        assert_eq!(altitude_std_dm(95000), 5404);
        assert_eq!(altitude_std_dm(101325), 8);
        assert_eq!(altitude_std_dm(105005), -2991);
        assert_eq!(altitude_std_dm(70040), 29673);
    }

    #[test]
    fn dm_unsigned_reaches_higher() {
        assert_eq!(altitude_std_dm_unsigned(70040), 29673);
        assert_eq!(altitude_std_dm_unsigned(60000), 40776);
        assert_eq!(altitude_std_dm_unsigned(50000), 52599);
        // the signed variant wraps past 3.2 km
        assert_eq!(altitude_std_dm(50000), (52599u16) as i16);
        assert!(altitude_std_dm(50000) < 0);
    }

    #[cfg(not(feature = "altitude-extra-precision"))]
    #[test]
    fn std_mm_second_order() {
        assert_eq!(altitude_std_mm(95000), 540418);
        assert_eq!(altitude_std_mm(95015), 539102);
        assert_eq!(altitude_std_mm(101325), 575);
        assert_eq!(altitude_std_mm(105005), -299750);
        assert_eq!(altitude_std_mm(70040), 2962683);
    }

    #[cfg(feature = "altitude-extra-precision")]
    #[test]
    fn std_mm_third_order() {
        assert_eq!(altitude_std_mm(95000), 540418);
        assert_eq!(altitude_std_mm(101325), -35);
        assert_eq!(altitude_std_mm(105005), -302165);
        assert_eq!(altitude_std_mm(70040), 2999600);
    }

    #[cfg(not(feature = "altitude-extra-precision"))]
    #[test]
    fn taylor_series_at_standard_sea_level() {
        assert_close(altitude_mm(95000, STANDARD_SEA_LEVEL_PA), 540284, 50);
        assert_close(altitude_mm(101325, STANDARD_SEA_LEVEL_PA), 439, 50);
        assert_close(altitude_mm(105005, STANDARD_SEA_LEVEL_PA), -299888, 50);
        assert_close(altitude_mm(70040, STANDARD_SEA_LEVEL_PA), 2962541, 50);
    }

    #[cfg(feature = "altitude-extra-precision")]
    #[test]
    fn taylor_series_third_order() {
        assert_close(altitude_mm(101325, STANDARD_SEA_LEVEL_PA), -161, 50);
        assert_close(altitude_mm(70040, STANDARD_SEA_LEVEL_PA), 2999451, 50);
    }

    #[test]
    fn taylor_series_tracks_integer_variant() {
        for pressure in (90000..=101325).step_by(500) {
            assert_close(
                altitude_mm(pressure, STANDARD_SEA_LEVEL_PA),
                altitude_std_mm(pressure),
                1000,
            );
        }
    }

    #[test]
    fn sea_level_adjustment() {
        // exact formula gives 166.7 m
        assert_close(altitude_mm(100000, 102000), 166_736, 1000);
        assert!(altitude_m(100000, 102000) > altitude_m(100000, STANDARD_SEA_LEVEL_PA));
    }

    #[test]
    fn metres_are_scaled_millimetres() {
        let mm = altitude_mm(90020, STANDARD_SEA_LEVEL_PA);
        assert_eq!(altitude_m(90020, STANDARD_SEA_LEVEL_PA), mm as f32 / 1000.0);
    }
}
