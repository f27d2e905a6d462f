use anyhow::anyhow;
use colored::*;

use samenet_core::config::Config;
use samenet_core::{CidrPrefix, SubnetMask};

use crate::terminal::{colors, print};

pub fn mask(cidr: &str, cfg: &Config) -> anyhow::Result<()> {
    let prefix = CidrPrefix::parse(cidr).map_err(|err| anyhow!("prefix: {err}"))?;
    let mask = SubnetMask::from_prefix(prefix);

    if cfg.quiet >= 2 {
        println!("{mask}");
        return Ok(());
    }

    let prefix_label = format!("/{prefix}");
    print::aligned_line("Prefix", prefix_label.color(colors::ADDR));
    print::aligned_line("Mask", mask.to_string().color(colors::MATCH));
    Ok(())
}
