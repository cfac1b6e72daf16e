use clap::Parser;
use cosmos_validators_exporter_config::Overrides;
use std::path::PathBuf;

/// Scrapes validators info on multiple Cosmos-SDK chains and exposes it as Prometheus metrics.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the TOML config file.
    #[arg(long, env = "COSMOS_VALIDATORS_EXPORTER_CONFIG")]
    pub config: PathBuf,

    /// Address to serve metrics on, overrides `listen-address` of the config.
    #[arg(long, env = "COSMOS_VALIDATORS_EXPORTER_LISTEN_ADDRESS")]
    pub listen_address: Option<String>,

    /// Log level, overrides `log.level` of the config.
    #[arg(long, env = "COSMOS_VALIDATORS_EXPORTER_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            listen_address: self.listen_address.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_become_overrides() {
        let args = Args::try_parse_from([
            "cosmos-validators-exporter",
            "--config",
            "config.toml",
            "--listen-address",
            "127.0.0.1:9999",
        ])
        .unwrap();

        assert_eq!(args.config, PathBuf::from("config.toml"));
        let overrides = args.overrides();
        assert_eq!(overrides.listen_address.as_deref(), Some("127.0.0.1:9999"));
        assert_eq!(overrides.log_level, None);
    }
}
