use colored::*;

use samenet_core::config::Config;
use samenet_core::network::random::random_address;

use crate::terminal::{colors, print};

pub fn random(cfg: &Config) -> anyhow::Result<()> {
    let address = random_address();

    if cfg.quiet >= 2 {
        println!("{address}");
        return Ok(());
    }

    print::aligned_line("Address", address.to_string().color(colors::ADDR));
    Ok(())
}
