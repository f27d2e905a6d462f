pub mod check;
pub mod convert;
pub mod mask;
pub mod random;
pub mod shell;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "samenet")]
#[command(about = "Checks whether two IPv4 addresses share a network.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce decorative output (repeat for more)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check a destination address against the origin
    #[command(alias = "c")]
    Check {
        /// Destination address, dotted decimal
        destination: String,
        /// Prefix length, with or without a leading slash
        cidr: String,
        /// Origin address to compare against
        #[arg(short, long)]
        origin: Option<String>,
    },
    /// Expand a prefix length into its dotted subnet mask
    #[command(alias = "m")]
    Mask {
        /// Prefix length, with or without a leading slash
        cidr: String,
    },
    /// Convert a dotted address into its 32-bit value
    #[command(alias = "i")]
    Convert {
        /// Address, dotted decimal
        address: String,
    },
    /// Generate a plausible random address
    #[command(alias = "r")]
    Random,
    /// Interactive session with a persistent origin
    #[command(alias = "s")]
    Shell {
        /// Origin address to start from
        #[arg(short, long)]
        origin: Option<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
