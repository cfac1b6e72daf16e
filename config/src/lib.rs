#[macro_use]
extern crate tracing;

mod chain;
mod overrides;
mod price_source;
mod query_kind;

pub use chain::{
    Chain,
    DenomInfo,
    Validator,
};
use eyre::{
    bail,
    ensure,
    Context as _,
    Result,
};
pub use overrides::Overrides;
pub use price_source::PriceSource;
pub use query_kind::QueryKind;
use serde::{
    Deserialize,
    Serialize,
};
use std::{
    collections::HashSet,
    net::SocketAddr,
    path::Path,
    str::FromStr as _,
    time::Duration,
};

const DEFAULT_CONFIG: &str = include_str!("default-config.toml");

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub listen_address: String,
    /// Per-request timeout for every upstream call, in seconds.
    pub timeout: u64,
    pub price_sources: Vec<PriceSource>,
    pub log: LogConfig,
    pub coingecko: ServiceConfig,
    pub dex_screener: ServiceConfig,
    #[serde(default)]
    pub chains: Vec<Chain>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct LogConfig {
    pub level: String,
    pub json: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    pub url: url::Url,
}

impl ServiceConfig {
    pub fn base_url(&self) -> &str {
        self.url.as_str().trim_end_matches('/')
    }
}

impl Config {
    /// Loads the TOML file at `path` on top of the built-in defaults, then applies `overrides`.
    pub fn load(path: &Path, overrides: Overrides) -> Result<Self> {
        let file = config::File::from(path).format(config::FileFormat::Toml).required(true);
        Self::build(file, overrides).wrap_err_with(|| format!("Could not load config from {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::build(
            config::File::from_str(content, config::FileFormat::Toml),
            Overrides::default(),
        )
    }

    fn build<S>(source: S, overrides: Overrides) -> Result<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let cfg: Self = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(source)
            .add_source(overrides)
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn chain(&self, name: &str) -> Option<&Chain> {
        self.chains.iter().find(|chain| chain.name == name)
    }

    pub fn validate(&self) -> Result<()> {
        SocketAddr::from_str(&self.listen_address)
            .wrap_err_with(|| format!("listen-address {:?} is not a socket address", self.listen_address))?;
        ensure!(self.timeout > 0, "timeout must be greater than 0");
        ensure!(!self.chains.is_empty(), "no chains configured");

        let mut names = HashSet::new();
        for (index, chain) in self.chains.iter().enumerate() {
            ensure!(!chain.name.is_empty(), "chain #{index} has an empty name");
            if !names.insert(chain.name.as_str()) {
                bail!("chain {} is configured more than once", chain.name);
            }
            url::Url::parse(&chain.lcd_endpoint)
                .wrap_err_with(|| format!("chain {}: invalid lcd-endpoint {:?}", chain.name, chain.lcd_endpoint))?;
            ensure!(!chain.base_denom.is_empty(), "chain {}: base-denom is empty", chain.name);
            ensure!(!chain.validators.is_empty(), "chain {}: no validators configured", chain.name);

            for validator in &chain.validators {
                ensure!(
                    !validator.address.is_empty(),
                    "chain {}: validator with an empty address",
                    chain.name
                );
            }

            for denom in &chain.denoms {
                ensure!(
                    !denom.denom.is_empty() && !denom.display_denom.is_empty(),
                    "chain {}: denom and display-denom must both be set",
                    chain.name
                );
                ensure!(
                    denom.denom_coefficient > 0,
                    "chain {}: denom {} has a zero denom-coefficient",
                    chain.name,
                    denom.denom
                );
                ensure!(
                    denom.dex_screener_chain_id.is_some() == denom.dex_screener_pair.is_some(),
                    "chain {}: denom {} needs both dex-screener-chain-id and dex-screener-pair",
                    chain.name,
                    denom.denom
                );
            }
        }

        Ok(())
    }

    /// Logs configuration that is valid but probably not what the user intended.
    pub fn display_warnings(&self) {
        for chain in &self.chains {
            for key in chain.queries.keys() {
                if QueryKind::from_str(key).is_err() {
                    warn!(chain = %chain.name, query = %key, "Unknown query kind, it has no effect");
                }
            }

            for denom in chain.denoms.iter().filter(|denom| !denom.has_price_source()) {
                warn!(chain = %chain.name, denom = %denom.denom, "Denom has no price source, its price will not be exported");
            }

            for validator in &chain.validators {
                if validator.wallet.is_none() {
                    warn!(
                        chain = %chain.name,
                        validator = %validator.address,
                        "Validator has no wallet, self-delegation, rewards and balance will not be queried"
                    );
                }
                if validator.consensus_address.is_none() {
                    warn!(
                        chain = %chain.name,
                        validator = %validator.address,
                        "Validator has no consensus address, signing info will not be queried"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CONFIG: &str = r#"
timeout = 5
price-sources = ["dex-screener", "coingecko"]

[log]
json = true

[[chains]]
name = "cosmos"
lcd-endpoint = "https://api.cosmos.network"
base-denom = "uatom"
queries = { "rewards" = false }
denoms = [{ denom = "uatom", display-denom = "atom", coingecko-currency = "cosmos" }]
validators = [{ address = "cosmosvaloper1abc", wallet = "cosmos1abc" }]

[[chains]]
name = "osmosis"
lcd-endpoint = "https://lcd.osmosis.zone"
base-denom = "uosmo"
validators = [{ address = "osmovaloper1abc", consensus-address = "osmovalcons1abc" }]
"#;

    #[test]
    fn parses_config_on_top_of_defaults() {
        let config = Config::from_toml_str(CONFIG).unwrap();

        assert_eq!(config.listen_address, "0.0.0.0:9560");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.price_sources, vec![PriceSource::DexScreener, PriceSource::Coingecko]);
        assert_eq!(
            config.log,
            LogConfig {
                level: "info".to_string(),
                json: true,
            }
        );
        assert_eq!(config.coingecko.base_url(), "https://api.coingecko.com/api/v3");
        assert_eq!(config.dex_screener.base_url(), "https://api.dexscreener.com/latest/dex");
        assert_eq!(config.chains.len(), 2);

        let cosmos = config.chain("cosmos").unwrap();
        assert!(!cosmos.is_enabled(QueryKind::Rewards));
        assert!(cosmos.is_enabled(QueryKind::Commission));
        assert_eq!(cosmos.denoms[0].denom_coefficient, 1_000_000);
        assert_eq!(cosmos.validators[0].wallet.as_deref(), Some("cosmos1abc"));

        let osmosis = config.chain("osmosis").unwrap();
        assert_eq!(osmosis.validators[0].consensus_address.as_deref(), Some("osmovalcons1abc"));
        assert!(osmosis.denoms.is_empty());

        config.validate().unwrap();
    }

    #[test]
    fn overrides_win_over_the_file() {
        let dir = temp_dir::TempDir::new().unwrap();
        let path = dir.child("config.toml");
        std::fs::write(&path, CONFIG).unwrap();

        let config = Config::load(
            &path,
            Overrides {
                listen_address: Some("127.0.0.1:9999".to_string()),
                log_level: Some("debug".to_string()),
            },
        )
        .unwrap();

        assert_eq!(config.listen_address, "127.0.0.1:9999");
        assert_eq!(config.log.level, "debug");
        assert!(config.log.json);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = temp_dir::TempDir::new().unwrap();
        assert!(Config::load(&dir.child("missing.toml"), Overrides::default()).is_err());
    }

    #[test]
    fn rejects_duplicate_chain_names() {
        let mut config = Config::from_toml_str(CONFIG).unwrap();
        config.chains[1].name = "cosmos".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("more than once"), "{err}");
    }

    #[test]
    fn rejects_invalid_values() {
        let valid = Config::from_toml_str(CONFIG).unwrap();

        let mut config = valid.clone();
        config.chains.clear();
        assert!(config.validate().is_err());

        let mut config = valid.clone();
        config.chains[0].lcd_endpoint = "not a url".to_string();
        assert!(config.validate().is_err());

        let mut config = valid.clone();
        config.chains[0].validators.clear();
        assert!(config.validate().is_err());

        let mut config = valid.clone();
        config.chains[0].denoms[0].denom_coefficient = 0;
        assert!(config.validate().is_err());

        let mut config = valid.clone();
        config.chains[0].denoms[0].dex_screener_pair = Some("pair".to_string());
        assert!(config.validate().is_err());

        let mut config = valid.clone();
        config.timeout = 0;
        assert!(config.validate().is_err());

        let mut config = valid;
        config.listen_address = ":9560".to_string();
        assert!(config.validate().is_err());
    }
}
