//! Shared helpers for the black-box integration suite.

use samenet_core::{CheckError, CheckReport, check_same_network};

/// Runs a check that is expected to succeed.
pub fn expect_report(destination: &str, cidr: &str, origin: &str) -> CheckReport {
    check_same_network(destination, cidr, origin)
        .unwrap_or_else(|err| panic!("check {destination} /{cidr} vs {origin} failed: {err}"))
}

/// Runs a check that is expected to fail.
pub fn expect_error(destination: &str, cidr: &str, origin: &str) -> CheckError {
    match check_same_network(destination, cidr, origin) {
        Ok(report) => panic!("check {destination} /{cidr} vs {origin} unexpectedly passed: {report:?}"),
        Err(err) => err,
    }
}
