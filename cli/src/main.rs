mod commands;
mod terminal;

use commands::{CommandLine, Commands, demo, recommend};
use coachr_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging(cfg.quiet);
    print::banner(cfg.no_banner, cfg.quiet);

    match commands.command.unwrap_or_default() {
        Commands::Demo { profile, schedule } => demo::demo(&profile, &schedule, &cfg),
        Commands::Recommend { profile } => recommend::recommend(&profile, &cfg),
    }
}
