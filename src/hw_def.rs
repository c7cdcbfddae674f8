#[cfg(feature = "defmt")]
use defmt::Format;

/// Fixed 7-bit I²C address of the BMP085
pub const I2C_ADDR: u8 = 0x77;

/// Value of the chip-ID register on a genuine BMP085
pub const CHIP_ID: u8 = 0x55;

/// Standard atmosphere pressure at sea level, in Pa
pub const STANDARD_SEA_LEVEL_PA: i32 = 101_325;

pub(crate) const REG_CHIP_ID: u8 = 0xD0;
pub(crate) const REG_CAL_AC1: u8 = 0xAA;
pub(crate) const REG_CONTROL: u8 = 0xF4;
pub(crate) const REG_RESULT_MSB: u8 = 0xF6;

pub(crate) const CMD_READ_TEMPERATURE: u8 = 0x2E;
pub(crate) const CMD_READ_PRESSURE: u8 = 0x34;

/// AC1..MD, two bytes each
pub(crate) const CALIBRATION_LEN: usize = 22;

pub(crate) const TEMPERATURE_CONVERSION_MS: u32 = 5;

/// Pressure oversampling setting (`oss` in the datasheet)
///
/// Higher settings average more internal samples, trading conversion time and
/// current for lower noise.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(u8)]
pub enum Oversampling {
    /// 1 sample, 4.5 ms
    UltraLowPower = 0,
    /// 2 samples, 7.5 ms
    Standard = 1,
    /// 4 samples, 13.5 ms
    HighRes = 2,
    /// 8 samples, 25.5 ms
    #[default]
    UltraHighRes = 3,
}
impl Oversampling {
    /// The `oss` value used in the compensation formula
    pub fn oss(self) -> u8 {
        self as u8
    }

    /// Time to wait after starting a pressure conversion, in milliseconds
    pub fn conversion_delay_ms(self) -> u32 {
        match self {
            Self::UltraLowPower => 5,
            Self::Standard => 8,
            Self::HighRes => 14,
            Self::UltraHighRes => 26,
        }
    }

    pub(crate) fn pressure_command(self) -> u8 {
        CMD_READ_PRESSURE + (self.oss() << 6)
    }
}
/// Settings above the highest mode are clamped to [`Oversampling::UltraHighRes`]
impl From<u8> for Oversampling {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Self::UltraLowPower,
            1 => Self::Standard,
            2 => Self::HighRes,
            _ => Self::UltraHighRes,
        }
    }
}
impl From<Oversampling> for u8 {
    fn from(oversampling: Oversampling) -> u8 {
        oversampling.oss()
    }
}

/// Assemble the 24-bit result registers into an uncompensated pressure value.
pub(crate) fn raw_pressure_from_bytes(bytes: &[u8; 3], oversampling: Oversampling) -> u32 {
    let raw = (bytes[0] as u32) << 16 | (bytes[1] as u32) << 8 | bytes[2] as u32;
    raw >> (8 - oversampling.oss())
}
