//! Common test utilities: a recording I2C bus and a delay that only counts
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

/// Control byte of a command frame
pub const COMMAND: u8 = 0x00;
/// Control byte of a data frame
pub const DATA: u8 = 0x40;

/// One delivered transfer, split into control byte and payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub address: u8,
    pub control: u8,
    pub payload: Vec<u8>,
}

#[derive(Debug, Default)]
struct Log {
    frames: Vec<Frame>,
    probes: usize,
    /// Upcoming probes to NACK
    nack_probes: usize,
    /// NACK every probe
    absent: bool,
    /// Non-probe transfers attempted so far
    writes: usize,
    /// Transfer numbers (counted by `writes`) that fail with a bus error
    fail_writes: Vec<usize>,
}

/// In-memory I2C bus. Clones share the same log, so a test keeps one
/// handle while the driver owns the other.
#[derive(Debug, Clone, Default)]
pub struct MockI2c {
    log: Rc<RefCell<Log>>,
}

impl MockI2c {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bus where nothing acknowledges its address
    pub fn absent() -> Self {
        let bus = Self::new();
        bus.log.borrow_mut().absent = true;
        bus
    }

    pub fn set_absent(&self, absent: bool) {
        self.log.borrow_mut().absent = absent;
    }

    /// NACK the next `count` probes
    pub fn nack_next_probes(&self, count: usize) {
        self.log.borrow_mut().nack_probes = count;
    }

    /// Fail the transfer `n` positions from now (0 = the next one)
    pub fn fail_write_in(&self, n: usize) {
        let mut log = self.log.borrow_mut();
        let at = log.writes + n;
        log.fail_writes.push(at);
    }

    /// Forget recorded frames and probes
    pub fn clear(&self) {
        let mut log = self.log.borrow_mut();
        log.frames.clear();
        log.probes = 0;
    }

    pub fn frames(&self) -> Vec<Frame> {
        self.log.borrow().frames.clone()
    }

    pub fn probes(&self) -> usize {
        self.log.borrow().probes
    }

    /// Command bytes in the order they were sent
    pub fn commands(&self) -> Vec<u8> {
        self.log
            .borrow()
            .frames
            .iter()
            .filter(|f| f.control == COMMAND)
            .flat_map(|f| f.payload.iter().copied())
            .collect()
    }

    /// Payloads of the data frames in the order they were sent
    pub fn data_frames(&self) -> Vec<Vec<u8>> {
        self.log
            .borrow()
            .frames
            .iter()
            .filter(|f| f.control == DATA)
            .map(|f| f.payload.clone())
            .collect()
    }
}

impl ErrorType for MockI2c {
    type Error = ErrorKind;
}

impl I2c for MockI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let mut bytes = Vec::new();
        for op in operations.iter() {
            match op {
                Operation::Write(data) => bytes.extend_from_slice(data),
                Operation::Read(_) => return Err(ErrorKind::Other),
            }
        }

        let mut log = self.log.borrow_mut();
        if bytes.is_empty() {
            log.probes += 1;
            if log.absent {
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            if log.nack_probes > 0 {
                log.nack_probes -= 1;
                return Err(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address));
            }
            return Ok(());
        }

        let index = log.writes;
        log.writes += 1;
        if log.fail_writes.contains(&index) {
            return Err(ErrorKind::Bus);
        }
        log.frames.push(Frame {
            address,
            control: bytes[0],
            payload: bytes[1..].to_vec(),
        });
        Ok(())
    }
}

/// Delay that returns immediately and remembers how long it was asked to wait
#[derive(Debug, Default)]
pub struct CountingDelay {
    pub total_ns: u64,
}

impl DelayNs for CountingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns += u64::from(ns);
    }
}
