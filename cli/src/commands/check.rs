use anyhow::anyhow;
use colored::*;

use samenet_core::config::Config;
use samenet_core::origin::DEFAULT_ORIGIN;
use samenet_core::{CheckError, CheckReport, check_same_network};

use crate::terminal::{colors, print};

pub fn check(
    destination: &str,
    cidr: &str,
    origin: Option<&str>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let origin = origin.unwrap_or(DEFAULT_ORIGIN);
    let report =
        check_same_network(destination, cidr, origin).map_err(|err| anyhow!(field_message(&err)))?;

    render(&report, destination, cfg);
    Ok(())
}

/// Splits a check failure into the input field it belongs to and the message
/// to show next to it.
pub fn field_parts(err: &CheckError) -> (&'static str, String) {
    match err {
        CheckError::Cidr(inner) => ("prefix", inner.to_string()),
        CheckError::Mask(inner) => ("mask", inner.to_string()),
        CheckError::Destination(inner) => ("destination", inner.to_string()),
        CheckError::Origin(inner) => ("origin", inner.to_string()),
    }
}

fn field_message(err: &CheckError) -> String {
    let (field, message) = field_parts(err);
    format!("{field}: {message}")
}

pub fn render(report: &CheckReport, destination: &str, cfg: &Config) {
    let destination = destination.trim();

    if cfg.quiet >= 2 {
        println!("{}", report.same_network);
        return;
    }

    print::aligned_line("Origin", report.origin.as_str().color(colors::ADDR));
    print::aligned_line("Destination", destination.color(colors::ADDR));
    print::aligned_line("Mask", report.mask.to_string().color(colors::MATCH));

    let verdict: ColoredString = if report.same_network {
        format!("{destination} is on the same network as {}", report.origin)
            .color(colors::MATCH)
            .bold()
    } else {
        format!("{destination} is NOT on the same network as {}", report.origin)
            .color(colors::MISMATCH)
            .bold()
    };

    if cfg.quiet == 0 {
        print::fat_separator();
    }
    print::print_status(verdict.to_string());
}
