extern crate std;

use crate::compensation::tests::DATASHEET_REGISTERS;
use crate::hw_def::*;

use embedded_hal_mock::eh1::i2c::Transaction as I2cTransaction;
use std::vec;
use std::vec::Vec;

/// Raw temperature and pressure register contents for the datasheet example
pub(crate) const UT_BYTES: [u8; 2] = [0x6C, 0xFA];
pub(crate) const UP_BYTES: [u8; 3] = [0x5D, 0x23, 0x00];

/// Delay that only records how long it was asked to wait
#[derive(Debug, Default)]
pub(crate) struct RecordingDelay {
    pub(crate) total_ns: u64,
    pub(crate) calls: usize,
}
impl RecordingDelay {
    pub(crate) fn total_ms(&self) -> u64 {
        self.total_ns / 1_000_000
    }
}

#[cfg(feature = "blocking")]
impl embedded_hal::delay::DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }
}

#[cfg(feature = "async")]
impl embedded_hal_async::delay::DelayNs for RecordingDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.total_ns += ns as u64;
        self.calls += 1;
    }
}

pub(crate) fn init_transactions() -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write_read(I2C_ADDR, vec![REG_CHIP_ID], vec![CHIP_ID]),
        I2cTransaction::write_read(I2C_ADDR, vec![REG_CAL_AC1], DATASHEET_REGISTERS.to_vec()),
    ]
}

pub(crate) fn temperature_transactions() -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write(I2C_ADDR, vec![REG_CONTROL, CMD_READ_TEMPERATURE]),
        I2cTransaction::write_read(I2C_ADDR, vec![REG_RESULT_MSB], UT_BYTES.to_vec()),
    ]
}

pub(crate) fn pressure_transactions(oversampling: Oversampling) -> Vec<I2cTransaction> {
    vec![
        I2cTransaction::write(I2C_ADDR, vec![REG_CONTROL, oversampling.pressure_command()]),
        I2cTransaction::write_read(I2C_ADDR, vec![REG_RESULT_MSB], UP_BYTES.to_vec()),
    ]
}

/// Initialization followed by the given conversions
pub(crate) fn session(conversions: &[Vec<I2cTransaction>]) -> Vec<I2cTransaction> {
    let mut transactions = init_transactions();
    for conversion in conversions {
        transactions.extend(conversion.iter().cloned());
    }
    transactions
}
