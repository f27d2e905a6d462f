use anyhow::anyhow;
use colored::*;

use samenet_core::config::Config;
use samenet_core::network::addr;

use crate::terminal::{colors, print};

pub fn convert(address: &str, cfg: &Config) -> anyhow::Result<()> {
    let value = addr::parse(address).map_err(|err| anyhow!("address: {err}"))?;

    if cfg.quiet >= 2 {
        println!("{value}");
        return Ok(());
    }

    print::aligned_line("Address", address.trim().color(colors::ADDR));
    print::aligned_line("Integer", value.to_string().color(colors::ACCENT));
    Ok(())
}
