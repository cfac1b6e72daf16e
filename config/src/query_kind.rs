use serde::{
    Deserialize,
    Serialize,
};
use strum::{
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
};

/// Every upstream query that can be switched off per chain with the `queries` table.
#[derive(
    Debug, Clone, Copy, AsRefStr, Display, EnumIter, EnumString, Serialize, Deserialize, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum QueryKind {
    Validator,
    Validators,
    Delegations,
    Unbonds,
    SelfDelegation,
    Commission,
    Rewards,
    Balance,
    SigningInfo,
    SlashingParams,
    StakingParams,
    Coingecko,
    DexScreener,
}
