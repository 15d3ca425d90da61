//! Display interface over I2C
//!
//! The SSD1306 has no data/command pin on I2C. Instead every transfer
//! starts with a control byte: `0x00` for a command, `0x40` for display
//! RAM data. Each frame is preceded by an address probe so a missing or
//! busy panel is reported instead of clocking bytes into nothing.
use embedded_hal::i2c::{I2c, Operation};

use crate::error::{DisplayError, Error};
use crate::flag::Flag;

/// I2C connection to one controller
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
    /// Probes tried before a frame is given up
    probe_attempts: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Wrap a bus; nothing is sent yet
    pub fn new(i2c: I2C, address: u8, probe_attempts: u8) -> Self {
        I2cInterface {
            i2c,
            address,
            probe_attempts: probe_attempts.max(1),
        }
    }

    /// Device address in use
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Whether the controller acknowledges its address.
    ///
    /// A zero-length write is an address-only transaction; the panel ACKs
    /// it when it is present and idle.
    pub fn probe_ready(&mut self) -> bool {
        for attempt in 1..=self.probe_attempts {
            match self.i2c.write(self.address, &[]) {
                Ok(()) => return true,
                Err(e) => log::debug!(
                    "Probe {}/{} of 0x{:02X} not acknowledged: {:?}",
                    attempt,
                    self.probe_attempts,
                    self.address,
                    e
                ),
            }
        }
        false
    }

    /// Basic function for sending one command byte
    pub(crate) fn cmd(&mut self, command: u8) -> Result<(), Error> {
        self.frame(Flag::CONTROL_COMMAND, &[command])
            .inspect_err(|e| log::error!("Command 0x{:02X} not sent: {}", command, e))
    }

    /// Send each byte as its own command frame
    pub(crate) fn cmds(&mut self, commands: &[u8]) -> Result<(), Error> {
        for &command in commands {
            self.cmd(command)?;
        }
        Ok(())
    }

    /// Basic function for sending display RAM bytes in one frame
    pub(crate) fn data(&mut self, data: &[u8]) -> Result<(), Error> {
        self.frame(Flag::CONTROL_DATA, data)
            .inspect_err(|e| log::error!("Data frame of {} bytes not sent: {}", data.len(), e))
    }

    /// Probe, then write control byte and payload as a single transfer
    fn frame(&mut self, control: u8, payload: &[u8]) -> Result<(), Error> {
        if !self.probe_ready() {
            log::warn!("Display at 0x{:02X} not ready, frame dropped", self.address);
            return Err(Error::BusNotReady);
        }

        // adjacent writes of one transaction go out without a restart
        self.i2c
            .transaction(
                self.address,
                &mut [Operation::Write(&[control]), Operation::Write(payload)],
            )
            .map_err(|e| {
                log::debug!("I2C write to 0x{:02X} failed: {:?}", self.address, e);
                Error::Bus(DisplayError::BusWriteError)
            })
    }
}
