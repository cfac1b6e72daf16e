use crate::QueryKind;
use serde::{
    Deserialize,
    Serialize,
};
use strum::{
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
};

/// External services a denom price can come from.
///
/// The order of `price-sources` in the config is the precedence: a source further down the list
/// is only asked for denoms that the sources before it could not price.
#[derive(
    Debug, Clone, Copy, Display, EnumIter, EnumString, IntoStaticStr, Serialize, Deserialize, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum PriceSource {
    Coingecko,
    DexScreener,
}

impl PriceSource {
    pub fn query_kind(&self) -> QueryKind {
        match self {
            PriceSource::Coingecko => QueryKind::Coingecko,
            PriceSource::DexScreener => QueryKind::DexScreener,
        }
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
