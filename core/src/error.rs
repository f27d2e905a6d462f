use thiserror::Error;

/// Failures while validating a CIDR prefix length.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CidrError {
    #[error("prefix length is required")]
    MissingValue,

    #[error("prefix length must contain only digits: '{0}'")]
    NonNumeric(String),

    #[error("prefix length must be a whole number: '{0}'")]
    NotInteger(String),

    #[error("prefix length must be at least 1, got {0}")]
    BelowMinimum(i64),

    #[error("prefix length must be at most 32, got {0}")]
    AboveMaximum(i64),
}

/// Failures while converting dotted-decimal IPv4 text to its 32-bit value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddrError {
    #[error("address is required")]
    Empty,

    #[error("address must have exactly 4 octets, got {0}")]
    WrongOctetCount(usize),

    #[error("octet contains invalid characters: '{0}'")]
    InvalidOctetFormat(String),

    #[error("octet out of range (0-255): '{0}'")]
    OctetOutOfRange(String),
}

/// Contract breach inside mask derivation. Callers are expected to hand over
/// an already-validated prefix length, so this never surfaces from the
/// checked entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaskError {
    #[error("prefix length out of range (1-32): {0}")]
    PreconditionViolation(u8),
}

/// First failure encountered during a same-network check.
///
/// Destination and origin carry the same [`AddrError`] payloads but stay
/// separate variants, so callers can attach the message to the field that
/// actually failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("invalid prefix length: {0}")]
    Cidr(#[from] CidrError),

    #[error("subnet mask derivation failed: {0}")]
    Mask(#[from] MaskError),

    #[error("invalid destination address: {0}")]
    Destination(AddrError),

    #[error("invalid origin address: {0}")]
    Origin(AddrError),
}
