use anyhow::Result;
use clap::Parser;
use nx_ifrate::cli::{Cli, RateCommandHandler};
use nx_ifrate::collectors::ShellGateway;
use nx_ifrate::config::Settings;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::load()?;

    let gateway = ShellGateway::new(
        settings.gateway_program.clone(),
        settings.gateway_args.clone(),
    );
    let mut handler = RateCommandHandler::new(gateway, settings);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    handler.run(&cli.options(), &mut out)?;

    Ok(())
}
