//! Demo-grade random address generation.
//!
//! Produces syntactically valid, non-reserved-looking addresses: loopback
//! (127.0.0.0/8), multicast and above (first octet >= 224) and the 0/255
//! edge octets never come out. The rejection list is intentionally
//! approximate; it carries no contract beyond "plausible".

use std::net::Ipv4Addr;

use rand::Rng;

/// Generates a plausible IPv4 address from the thread-local generator.
pub fn random_address() -> Ipv4Addr {
    sample(&mut rand::rng())
}

/// Generates a plausible IPv4 address from the given generator.
pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Ipv4Addr {
    loop {
        let first: u8 = rng.random_range(1..=223);
        if first == 127 {
            continue;
        }
        return Ipv4Addr::new(
            first,
            rng.random_range(0..=255),
            rng.random_range(0..=255),
            rng.random_range(1..=254),
        );
    }
}
