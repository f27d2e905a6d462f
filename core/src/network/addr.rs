//! # Address Codec
//!
//! Converts dotted-decimal IPv4 text into its unsigned 32-bit value, with a
//! typed failure for every way the text can be malformed.
//!
//! Parsing is hand-rolled rather than delegated to
//! [`Ipv4Addr`](std::net::Ipv4Addr): callers need octet-count, octet-format
//! and octet-range failures as separate kinds, and the std parser folds them
//! all into one opaque error.

use crate::error::AddrError;

const OCTET_MAX: u32 = 255;

/// Parses dotted-decimal IPv4 text into its 32-bit value.
///
/// Surrounding whitespace is trimmed; the remainder must be exactly four
/// `.`-separated octets, each a plain base-10 digit run no greater than 255.
/// Octets accumulate most-significant first: shift the value 8 bits left,
/// add the octet.
pub fn parse(text: &str) -> Result<u32, AddrError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(AddrError::Empty);
    }

    let octets: Vec<&str> = trimmed.split('.').collect();
    if octets.len() != 4 {
        return Err(AddrError::WrongOctetCount(octets.len()));
    }

    let mut value: u32 = 0;
    for octet in octets {
        if octet.is_empty() || !octet.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AddrError::InvalidOctetFormat(octet.to_owned()));
        }
        let parsed: u32 = octet
            .parse()
            .map_err(|_| AddrError::OctetOutOfRange(octet.to_owned()))?;
        if parsed > OCTET_MAX {
            return Err(AddrError::OctetOutOfRange(octet.to_owned()));
        }
        value = (value << 8) + parsed;
    }

    Ok(value)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
