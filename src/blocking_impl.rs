use crate::altitude;
use crate::compensation::Calibration;
use crate::hw_def::*;
use crate::logging::{debug, trace, warn};
use crate::types::*;

use embedded_hal::{delay::DelayNs, i2c::I2c};

impl<I2C, Delay, E> Bmp085<I2C, Delay>
where
    I2C: I2c<Error = E>,
    Delay: DelayNs,
{
    /// Create a new BMP085 driver instance. No bus traffic happens until [`Self::init`].
    pub fn new(i2c: I2C, delay: Delay, oversampling: Oversampling) -> Self {
        Self { i2c, delay, oversampling, calibration: None }
    }

    /// Destroy the driver and return the bus and delay
    pub fn release(self) -> (I2C, Delay) {
        (self.i2c, self.delay)
    }

    /// Current pressure oversampling setting
    pub fn oversampling(&self) -> Oversampling {
        self.oversampling
    }

    /// Change the pressure oversampling setting for subsequent conversions
    pub fn set_oversampling(&mut self, oversampling: Oversampling) {
        self.oversampling = oversampling;
    }

    /// Calibration read by [`Self::init`], if it has succeeded
    pub fn calibration(&self) -> Option<&Calibration> {
        self.calibration.as_ref()
    }

    fn read_register(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), Error<E>> {
        trace!("bmp085::read_register(): reg={:#x} len={}", reg, buf.len());
        self.i2c.write_read(I2C_ADDR, &[reg], buf).map_err(Error::I2c)
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<E>> {
        trace!("bmp085::write_register(): reg={:#x} value={:#x}", reg, value);
        self.i2c.write(I2C_ADDR, &[reg, value]).map_err(Error::I2c)
    }

    fn calibrated(&self) -> Result<Calibration, Error<E>> {
        self.calibration.ok_or(Error::NotInitialized)
    }

    /// Check the chip ID and read the factory calibration
    pub fn init(&mut self) -> Result<(), Error<E>> {
        let mut chip_id = [0u8; 1];
        self.read_register(REG_CHIP_ID, &mut chip_id)?;
        if chip_id[0] != CHIP_ID {
            warn!("bmp085::init(): unexpected chip id {:#x}", chip_id[0]);
            return Err(Error::InvalidChipId(chip_id[0]));
        }

        let mut registers = [0u8; CALIBRATION_LEN];
        self.read_register(REG_CAL_AC1, &mut registers)?;
        let calibration = Calibration::from_registers(&registers).ok_or_else(|| {
            warn!("bmp085::init(): calibration contains 0x0000 or 0xFFFF");
            Error::InvalidCalibration
        })?;
        debug!("bmp085::init(): {:?}", calibration);
        self.calibration = Some(calibration);
        Ok(())
    }

    /// Start a temperature conversion and return the uncompensated result (`UT`)
    pub fn read_raw_temperature(&mut self) -> Result<u16, Error<E>> {
        self.write_register(REG_CONTROL, CMD_READ_TEMPERATURE)?;
        self.delay.delay_ms(TEMPERATURE_CONVERSION_MS);
        let mut buf = [0u8; 2];
        self.read_register(REG_RESULT_MSB, &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    /// Start a pressure conversion and return the uncompensated result (`UP`)
    pub fn read_raw_pressure(&mut self) -> Result<u32, Error<E>> {
        let oversampling = self.oversampling;
        self.write_register(REG_CONTROL, oversampling.pressure_command())?;
        self.delay.delay_ms(oversampling.conversion_delay_ms());
        let mut buf = [0u8; 3];
        self.read_register(REG_RESULT_MSB, &mut buf)?;
        Ok(raw_pressure_from_bytes(&buf, oversampling))
    }

    /// Temperature in 0.1 °C
    pub fn read_temperature_decicelsius(&mut self) -> Result<i16, Error<E>> {
        let calibration = self.calibrated()?;
        let ut = self.read_raw_temperature()?;
        calibration.temperature_decicelsius(ut).ok_or(Error::InvalidCalibration)
    }

    /// Temperature in °C
    pub fn read_temperature(&mut self) -> Result<f32, Error<E>> {
        Ok(self.read_temperature_decicelsius()? as f32 / 10.0)
    }

    /// Temperature and pressure from one temperature and one pressure conversion
    pub fn read_measurement(&mut self) -> Result<Measurement, Error<E>> {
        let calibration = self.calibrated()?;
        let ut = self.read_raw_temperature()?;
        let up = self.read_raw_pressure()?;
        calibration.compensate(ut, up, self.oversampling).ok_or(Error::InvalidCalibration)
    }

    /// Pressure in Pa
    pub fn read_pressure(&mut self) -> Result<i32, Error<E>> {
        Ok(self.read_measurement()?.pressure_pa)
    }

    /// Altitude in metres for the given sea-level pressure in Pa
    pub fn read_altitude(&mut self, sea_level_pa: i32) -> Result<f32, Error<E>> {
        Ok(altitude::altitude_m(self.read_pressure()?, sea_level_pa))
    }

    /// Altitude in millimetres for the given sea-level pressure in Pa
    pub fn read_altitude_mm(&mut self, sea_level_pa: i32) -> Result<i32, Error<E>> {
        Ok(altitude::altitude_mm(self.read_pressure()?, sea_level_pa))
    }

    /// Altitude in millimetres at standard sea-level pressure, integer math only
    pub fn read_altitude_std_mm(&mut self) -> Result<i32, Error<E>> {
        Ok(altitude::altitude_std_mm(self.read_pressure()?))
    }

    /// Altitude in decimetres at standard sea-level pressure, -3.2 km to 3.2 km
    pub fn read_altitude_std_dm(&mut self) -> Result<i16, Error<E>> {
        Ok(altitude::altitude_std_dm(self.read_pressure()?))
    }

    /// Altitude in decimetres at standard sea-level pressure, 0.5 km to 6.5 km
    pub fn read_altitude_std_dm_unsigned(&mut self) -> Result<u16, Error<E>> {
        Ok(altitude::altitude_std_dm_unsigned(self.read_pressure()?))
    }
}
