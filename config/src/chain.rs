use crate::{
    PriceSource,
    QueryKind,
};
use serde::{
    Deserialize,
    Serialize,
};
use std::collections::HashMap;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Chain {
    pub name: String,
    pub lcd_endpoint: String,
    pub base_denom: String,
    #[serde(default)]
    pub denoms: Vec<DenomInfo>,
    #[serde(default)]
    pub validators: Vec<Validator>,
    /// Query kind name to enabled flag. Missing entries are enabled.
    #[serde(default)]
    pub queries: HashMap<String, bool>,
}

impl Chain {
    pub fn is_enabled(&self, kind: QueryKind) -> bool {
        self.queries.get(kind.as_ref()).copied().unwrap_or(true)
    }

    /// LCD base URL without a trailing slash, ready for path concatenation.
    pub fn endpoint(&self) -> &str {
        self.lcd_endpoint.trim_end_matches('/')
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Validator {
    pub address: String,
    #[serde(default)]
    pub wallet: Option<String>,
    #[serde(default)]
    pub consensus_address: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct DenomInfo {
    pub denom: String,
    pub display_denom: String,
    #[serde(default = "default_denom_coefficient")]
    pub denom_coefficient: u64,
    #[serde(default)]
    pub coingecko_currency: Option<String>,
    #[serde(default)]
    pub dex_screener_chain_id: Option<String>,
    #[serde(default)]
    pub dex_screener_pair: Option<String>,
}

fn default_denom_coefficient() -> u64 {
    1_000_000
}

impl DenomInfo {
    pub fn dex_screener(&self) -> Option<(&str, &str)> {
        match (&self.dex_screener_chain_id, &self.dex_screener_pair) {
            (Some(chain_id), Some(pair)) => Some((chain_id.as_str(), pair.as_str())),
            _ => None,
        }
    }

    pub fn supports(&self, source: PriceSource) -> bool {
        match source {
            PriceSource::Coingecko => self.coingecko_currency.is_some(),
            PriceSource::DexScreener => self.dex_screener().is_some(),
        }
    }

    pub fn has_price_source(&self) -> bool {
        self.coingecko_currency.is_some() || self.dex_screener().is_some()
    }
}
