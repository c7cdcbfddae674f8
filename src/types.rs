use crate::compensation::Calibration;
use crate::hw_def::Oversampling;

use core::fmt;

#[cfg(feature="defmt")]
use defmt::Format;

/// BMP085 device driver using the `embedded-hal-async` traits
#[cfg(feature = "async")]
#[derive(Debug)]
pub struct Bmp085Async<I2C, Delay> {
    pub(crate) i2c: I2C,
    pub(crate) delay: Delay,
    pub(crate) oversampling: Oversampling,
    pub(crate) calibration: Option<Calibration>,
}

/// BMP085 device driver using the blocking `embedded-hal` traits
#[cfg(feature = "blocking")]
#[derive(Debug)]
pub struct Bmp085<I2C, Delay> {
    pub(crate) i2c: I2C,
    pub(crate) delay: Delay,
    pub(crate) oversampling: Oversampling,
    pub(crate) calibration: Option<Calibration>,
}

/// All possible errors in this crate
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// I²C communication error
    I2c(E),
    /// The chip-ID register did not hold the BMP085 value; contains what was read
    InvalidChipId(u8),
    /// Calibration EEPROM contents are unusable
    InvalidCalibration,
    /// A compensated reading was requested before a successful `init()`
    NotInitialized,
}
impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(err) => write!(f, "I2C error: {err:?}"),
            Error::InvalidChipId(id) => write!(f, "unexpected chip id 0x{id:02X}"),
            Error::InvalidCalibration => write!(f, "invalid calibration data"),
            Error::NotInitialized => write!(f, "device not initialized"),
        }
    }
}

/// Compensated temperature and pressure from one conversion pair
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Measurement {
    /// temperature in 0.1 °C
    pub temperature_decicelsius: i16,
    /// pressure in Pa
    pub pressure_pa: i32,
}
impl Measurement {
    /// Get temperature in Centigrade
    pub fn centigrade(&self) -> f32 {
        self.temperature_decicelsius as f32 / 10.0
    }
    /// Get pressure in hectopascal (millibar)
    pub fn hectopascal(&self) -> f32 {
        self.pressure_pa as f32 / 100.0
    }
}
impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} °C, {} Pa", self.centigrade(), self.pressure_pa)
    }
}
