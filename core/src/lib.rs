//! Core logic for `samenet`: decides whether two IPv4 addresses belong to
//! the same network under a given CIDR prefix.
//!
//! Everything here is synchronous and allocation-light. The only state in the
//! crate is the process-wide origin address held by
//! [`origin::OriginHolder`]; every other operation is a pure function of its
//! inputs.

pub mod config;
pub mod error;
pub mod network;
pub mod origin;

pub use error::{AddrError, CheckError, CidrError, MaskError};
pub use network::check::{CheckReport, NetworkChecker, check_same_network};
pub use network::cidr::{CidrInput, CidrPrefix};
pub use network::mask::SubnetMask;
