//! # Network Membership Check
//!
//! Orchestrates prefix validation, mask derivation and address conversion to
//! decide whether two IPv4 addresses share a network.

use tracing::debug;

use crate::error::{AddrError, CheckError};
use crate::network::addr;
use crate::network::cidr::{CidrInput, CidrPrefix};
use crate::network::mask::SubnetMask;
use crate::origin::OriginHolder;

/// Outcome of a same-network check.
///
/// Produced whole or not at all; a failed check yields no partial report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// The origin address the check ran against, as entered.
    pub origin: String,
    /// The mask derived from the requested prefix length.
    pub mask: SubnetMask,
    /// Whether the two network portions matched.
    pub same_network: bool,
}

/// Decides whether `destination` and `origin` sit in the same network under
/// the mask derived from `cidr`.
///
/// Validation short-circuits on the first failure, in a fixed order: prefix
/// length, then destination address, then origin address. Two addresses
/// match when their mask-ANDed network portions are equal.
pub fn check_same_network(
    destination: &str,
    cidr: impl Into<CidrInput>,
    origin: &str,
) -> Result<CheckReport, CheckError> {
    let prefix = CidrPrefix::parse(cidr)?;
    let mask = SubnetMask::from_prefix(prefix);

    let destination_bits = addr::parse(destination).map_err(CheckError::Destination)?;
    let origin_bits = addr::parse(origin).map_err(CheckError::Origin)?;

    let same_network = destination_bits & mask.bits() == origin_bits & mask.bits();
    debug!(prefix = prefix.get(), %mask, same_network, "network check");

    Ok(CheckReport {
        origin: origin.trim().to_owned(),
        mask,
        same_network,
    })
}

/// Stateful front door for the checker: owns the process-wide origin address
/// and runs checks against it.
pub struct NetworkChecker {
    origin: OriginHolder,
}

impl NetworkChecker {
    /// A checker starting from the default origin address.
    pub fn new() -> Self {
        NetworkChecker {
            origin: OriginHolder::new(),
        }
    }

    /// A checker starting from the given origin address.
    pub fn with_origin(origin: &str) -> Result<Self, AddrError> {
        let holder = OriginHolder::new();
        holder.set(origin)?;
        Ok(NetworkChecker { origin: holder })
    }

    /// Current origin address text.
    pub fn origin(&self) -> String {
        self.origin.get()
    }

    /// Replaces the origin address after validating it.
    pub fn set_origin(&self, text: &str) -> Result<(), AddrError> {
        self.origin.set(text)
    }

    /// Swaps in a freshly generated origin address and returns it.
    pub fn randomize_origin(&self) -> String {
        self.origin.randomize()
    }

    /// Checks `destination` against the current origin.
    pub fn check(
        &self,
        destination: &str,
        cidr: impl Into<CidrInput>,
    ) -> Result<CheckReport, CheckError> {
        check_same_network(destination, cidr, &self.origin.get())
    }
}

impl Default for NetworkChecker {
    fn default() -> Self {
        Self::new()
    }
}
