mod commands;
mod terminal;

use commands::{CommandLine, sweep};
use terminal::{input, logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg = commands.config();

    logging::init_logging();
    print::banner(cfg.no_banner, cfg.quiet);

    let request = input::resolve_request(commands.target.clone(), commands.output.clone())?;

    print::header("starting sweep", cfg.quiet);
    sweep::sweep(request, commands.sweep_config(), &cfg).await
}
