//! Interactive session: repeated checks against a persistent origin.
//!
//! The origin survives between commands within the session; `origin` and
//! `random` mutate it, `check` reads it.

use std::io::{self, BufRead, Write};

use anyhow::anyhow;
use colored::*;

use samenet_core::NetworkChecker;
use samenet_core::config::Config;

use crate::commands::check;
use crate::terminal::{colors, print};

const HELP: &str = "commands: check <address> <prefix> | origin [address] | random | help | quit";

pub fn shell(origin: Option<&str>, cfg: &Config) -> anyhow::Result<()> {
    let checker = match origin {
        Some(text) => NetworkChecker::with_origin(text).map_err(|err| anyhow!("origin: {err}"))?,
        None => NetworkChecker::new(),
    };

    show_origin("Origin is", &checker.origin());
    print::print_status(HELP);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        write!(stdout, "{} ", "samenet>".color(colors::PRIMARY))?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => {}
            ["quit"] | ["exit"] | ["q"] => break,
            ["help"] => print::print_status(HELP),
            ["origin"] => show_origin("Origin is", &checker.origin()),
            ["origin", address] => match checker.set_origin(address) {
                Ok(()) => show_origin("Origin is now", &checker.origin()),
                Err(err) => print::field_error("origin", &err.to_string()),
            },
            ["random"] => {
                let generated = checker.randomize_origin();
                show_origin("Origin is now", &generated);
            }
            ["check", destination, prefix] => match checker.check(destination, *prefix) {
                Ok(report) => check::render(&report, destination, cfg),
                Err(err) => {
                    let (field, message) = check::field_parts(&err);
                    print::field_error(field, &message);
                }
            },
            _ => print::field_error("input", "unrecognized command, try 'help'"),
        }
    }

    Ok(())
}

fn show_origin(lead: &str, address: &str) {
    print::print_status(format!("{lead} {}", address.color(colors::ADDR)));
}
