mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, convert, mask, random, shell};
use samenet_core::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    let cfg = Config {
        quiet: commands.quiet,
    };

    match commands.command {
        Commands::Check {
            destination,
            cidr,
            origin,
        } => {
            print::header("network check", cfg.quiet);
            check::check(&destination, &cidr, origin.as_deref(), &cfg)
        }
        Commands::Mask { cidr } => mask::mask(&cidr, &cfg),
        Commands::Convert { address } => convert::convert(&address, &cfg),
        Commands::Random => random::random(&cfg),
        Commands::Shell { origin } => {
            print::header("interactive session", cfg.quiet);
            shell::shell(origin.as_deref(), &cfg)
        }
    }
}
