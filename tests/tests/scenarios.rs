//! End-to-end scenarios for the same-network check.

use samenet_core::{CheckError, CidrError, NetworkChecker};
use samenet_integration_tests::{expect_error, expect_report};

/*************************************************************
                    Same-network scenarios
**************************************************************/

#[test]
fn neighbours_in_a_slash_24() {
    let report = expect_report("192.168.15.200", "24", "192.168.15.4");
    assert_eq!(report.mask.to_string(), "255.255.255.0");
    assert_eq!(report.origin, "192.168.15.4");
    assert!(report.same_network);
}

#[test]
fn strangers_in_a_slash_24() {
    let report = expect_report("10.0.0.1", "24", "192.168.15.4");
    assert_eq!(report.mask.to_string(), "255.255.255.0");
    assert!(!report.same_network);
}

#[test]
fn edges_of_a_slash_16() {
    let report = expect_report("10.10.255.254", "16", "10.10.0.1");
    assert_eq!(report.mask.to_string(), "255.255.0.0");
    assert!(report.same_network);
}

#[test]
fn host_route_matches_only_itself() {
    assert!(expect_report("172.16.0.1", "32", "172.16.0.1").same_network);
    assert!(!expect_report("172.16.0.2", "32", "172.16.0.1").same_network);
}

#[test]
fn slash_one_splits_the_space_in_half() {
    let report = expect_report("10.0.0.1", "1", "100.0.0.1");
    assert_eq!(report.mask.to_string(), "128.0.0.0");
    assert!(report.same_network);

    assert!(!expect_report("200.0.0.1", "1", "100.0.0.1").same_network);
}

/*************************************************************
                       Failure ordering
**************************************************************/

#[test]
fn prefix_failure_precedes_address_parsing() {
    let err = expect_error("192.168.1.1", "33", "not-even-close");
    assert_eq!(err, CheckError::Cidr(CidrError::AboveMaximum(33)));
}

#[test]
fn destination_failure_precedes_origin_failure() {
    let err = expect_error("bogus", "24", "also-bogus");
    assert!(matches!(err, CheckError::Destination(_)));
}

/*************************************************************
                   Input-shape equivalences
**************************************************************/

#[test]
fn slashed_and_padded_prefixes_agree() {
    let plain = expect_report("192.168.15.200", "24", "192.168.15.4");
    let slashed = expect_report("192.168.15.200", "/24", "192.168.15.4");
    let padded = expect_report("192.168.15.200", " 24 ", "192.168.15.4");
    assert_eq!(plain, slashed);
    assert_eq!(plain, padded);
}

#[test]
fn repeated_checks_are_identical() {
    let first = expect_report("192.168.15.200", "24", "192.168.15.4");
    for _ in 0..5 {
        assert_eq!(first, expect_report("192.168.15.200", "24", "192.168.15.4"));
    }
}

/*************************************************************
                     Stateful checker flow
**************************************************************/

#[test]
fn checker_session_with_origin_changes() -> anyhow::Result<()> {
    let checker = NetworkChecker::new();
    assert!(checker.check("192.168.15.200", "24")?.same_network);

    checker.set_origin("10.10.0.1")?;
    assert!(checker.check("10.10.255.254", "16")?.same_network);
    assert!(!checker.check("10.11.0.1", "16")?.same_network);

    let generated = checker.randomize_origin();
    assert!(checker.check(&generated, "32")?.same_network);

    Ok(())
}
