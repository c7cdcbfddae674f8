use crate::hw_def::{CALIBRATION_LEN, Oversampling};
use crate::types::Measurement;

#[cfg(feature = "defmt")]
use defmt::Format;

/// Factory calibration constants read from the device EEPROM
///
/// Field names follow the datasheet. All arithmetic on them is 32-bit two's
/// complement, as in the datasheet reference algorithm.
#[cfg_attr(feature = "defmt", derive(Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[allow(missing_docs)]
pub struct Calibration {
    pub ac1: i16,
    pub ac2: i16,
    pub ac3: i16,
    pub ac4: u16,
    pub ac5: u16,
    pub ac6: u16,
    pub b1: i16,
    pub b2: i16,
    pub mb: i16,
    pub mc: i16,
    pub md: i16,
}

impl Calibration {
    /// Decode the 22-byte big-endian burst starting at register 0xAA.
    ///
    /// Returns `None` if any word is 0x0000 or 0xFFFF, which the datasheet
    /// guarantees never happens on a working device.
    pub fn from_registers(bytes: &[u8; CALIBRATION_LEN]) -> Option<Self> {
        let mut words = [0u16; CALIBRATION_LEN / 2];
        for (word, pair) in words.iter_mut().zip(bytes.chunks_exact(2)) {
            *word = u16::from_be_bytes([pair[0], pair[1]]);
        }
        if words.iter().any(|w| *w == 0x0000 || *w == 0xFFFF) {
            return None;
        }
        Some(Self {
            ac1: words[0] as i16,
            ac2: words[1] as i16,
            ac3: words[2] as i16,
            ac4: words[3],
            ac5: words[4],
            ac6: words[5],
            b1: words[6] as i16,
            b2: words[7] as i16,
            mb: words[8] as i16,
            mc: words[9] as i16,
            md: words[10] as i16,
        })
    }

    /// Intermediate `B5` term shared by the temperature and pressure formulas
    fn b5(&self, raw_temperature: u16) -> Option<i32> {
        let ut = raw_temperature as i32;
        let x1 = (ut - self.ac6 as i32).wrapping_mul(self.ac5 as i32) >> 15;
        let x2 = ((self.mc as i32) << 11).checked_div(x1.wrapping_add(self.md as i32))?;
        Some(x1.wrapping_add(x2))
    }

    /// Compensated temperature in 0.1 °C
    pub fn temperature_decicelsius(&self, raw_temperature: u16) -> Option<i16> {
        let b5 = self.b5(raw_temperature)?;
        Some((b5.wrapping_add(8) >> 4) as i16)
    }

    /// Compensated pressure in Pa
    pub fn pressure_pa(&self, raw_temperature: u16, raw_pressure: u32, oversampling: Oversampling) -> Option<i32> {
        self.compensate(raw_temperature, raw_pressure, oversampling)
            .map(|measurement| measurement.pressure_pa)
    }

    /// Compensated temperature and pressure from one pair of raw readings
    pub fn compensate(&self, raw_temperature: u16, raw_pressure: u32, oversampling: Oversampling) -> Option<Measurement> {
        let oss = oversampling.oss() as u32;
        let b5 = self.b5(raw_temperature)?;
        let temperature_decicelsius = (b5.wrapping_add(8) >> 4) as i16;

        let b6 = b5.wrapping_sub(4000);
        let b6_sq = b6.wrapping_mul(b6) >> 12;
        let x1 = (self.b2 as i32).wrapping_mul(b6_sq) >> 11;
        let x2 = (self.ac2 as i32).wrapping_mul(b6) >> 11;
        let x3 = x1.wrapping_add(x2);
        let b3 = ((((self.ac1 as i32).wrapping_mul(4).wrapping_add(x3)) << oss).wrapping_add(2)) >> 2;

        let x1 = (self.ac3 as i32).wrapping_mul(b6) >> 13;
        let x2 = (self.b1 as i32).wrapping_mul(b6_sq) >> 16;
        let x3 = x1.wrapping_add(x2).wrapping_add(2) >> 2;
        let b4 = (self.ac4 as u32).wrapping_mul(x3.wrapping_add(32768) as u32) >> 15;
        let b7 = raw_pressure.wrapping_sub(b3 as u32).wrapping_mul(50000 >> oss);

        let p = if b7 < 0x8000_0000 {
            (b7 << 1).checked_div(b4)?
        } else {
            b7.checked_div(b4)? << 1
        };
        let p = p as i32;

        let x1 = (p >> 8).wrapping_mul(p >> 8);
        let x1 = x1.wrapping_mul(3038) >> 16;
        let x2 = (-7357i32).wrapping_mul(p) >> 16;
        let pressure_pa = p.wrapping_add(x1.wrapping_add(x2).wrapping_add(3791) >> 4);

        Some(Measurement { temperature_decicelsius, pressure_pa })
    }
}
