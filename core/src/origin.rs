//! The process-wide origin address.
//!
//! The one piece of state in the crate. A single logical writer is assumed;
//! concurrent readers take a snapshot through the lock.

use std::sync::RwLock;

use tracing::debug;

use crate::error::AddrError;
use crate::network::{addr, random};

/// Origin address every process starts from until told otherwise.
pub const DEFAULT_ORIGIN: &str = "192.168.15.4";

/// Holds the current origin address behind controlled read/write access.
#[derive(Debug)]
pub struct OriginHolder {
    addr: RwLock<String>,
}

impl OriginHolder {
    pub fn new() -> Self {
        OriginHolder {
            addr: RwLock::new(DEFAULT_ORIGIN.to_owned()),
        }
    }

    /// Snapshot of the current origin address text.
    pub fn get(&self) -> String {
        self.addr.read().expect("origin lock poisoned").clone()
    }

    /// Replaces the origin after validating it.
    ///
    /// Rejected input leaves the previous value untouched.
    pub fn set(&self, text: &str) -> Result<(), AddrError> {
        addr::parse(text)?;
        let trimmed = text.trim().to_owned();
        debug!(origin = %trimmed, "origin replaced");
        *self.addr.write().expect("origin lock poisoned") = trimmed;
        Ok(())
    }

    /// Swaps in a freshly generated address and returns it.
    pub fn randomize(&self) -> String {
        let generated = random::random_address().to_string();
        debug!(origin = %generated, "origin randomized");
        *self.addr.write().expect("origin lock poisoned") = generated.clone();
        generated
    }
}

impl Default for OriginHolder {
    fn default() -> Self {
        Self::new()
    }
}
