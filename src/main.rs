use clap::Parser;
use color_eyre::Result;
use cosmos_validators_exporter::{
    init_errors,
    init_logging,
    run,
    Args,
};
use cosmos_validators_exporter_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    init_errors()?;
    let args = Args::parse();

    let config = Config::load(&args.config, args.overrides())?;
    config.validate()?;
    init_logging(&config.log)?;
    config.display_warnings();

    run(config).await
}
