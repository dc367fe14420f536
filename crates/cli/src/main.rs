use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use glyphmap_cli::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    if let Err(e) = cli.validate() {
        e.exit();
    }
    Builder::new().filter_level(cli.log_level()).parse_default_env().init();
    cli.run()
}
