//! Response shapes of the Cosmos-SDK REST (LCD) API and of the price services.
//!
//! Only the fields the collectors read are modelled. The LCD encodes integers and decimals as
//! strings, those are parsed into numbers while decoding.

use serde::Deserialize;
use serde_with::{
    serde_as,
    DisplayFromStr,
};
use std::collections::HashMap;

/// An amount of a single denom. Used for both `Coin` and `DecCoin` payloads.
#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Balance {
    pub denom: String,
    #[serde_as(as = "DisplayFromStr")]
    pub amount: f64,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Pagination {
    #[serde_as(as = "DisplayFromStr")]
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PaginationResponse {
    pub pagination: Pagination,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ValidatorResponse {
    pub validator: ValidatorInfo,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ValidatorsResponse {
    pub validators: Vec<ValidatorInfo>,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ValidatorInfo {
    pub operator_address: String,
    #[serde(default)]
    pub jailed: bool,
    pub status: String,
    #[serde_as(as = "DisplayFromStr")]
    pub tokens: f64,
    #[serde(default)]
    pub description: ValidatorDescription,
    pub commission: ValidatorCommission,
    #[serde_as(as = "DisplayFromStr")]
    pub min_self_delegation: f64,
}

pub const BOND_STATUS_BONDED: &str = "BOND_STATUS_BONDED";

impl ValidatorInfo {
    pub fn is_bonded(&self) -> bool {
        self.status == BOND_STATUS_BONDED
    }

    /// Numeric value of the `BondStatus` protobuf enum.
    pub fn status_code(&self) -> f64 {
        match self.status.as_str() {
            "BOND_STATUS_UNBONDED" => 1.0,
            "BOND_STATUS_UNBONDING" => 2.0,
            BOND_STATUS_BONDED => 3.0,
            _ => 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ValidatorDescription {
    #[serde(default)]
    pub moniker: String,
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub security_contact: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ValidatorCommission {
    pub commission_rates: CommissionRates,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CommissionRates {
    #[serde_as(as = "DisplayFromStr")]
    pub rate: f64,
    #[serde_as(as = "DisplayFromStr")]
    pub max_rate: f64,
    #[serde_as(as = "DisplayFromStr")]
    pub max_change_rate: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SingleDelegationResponse {
    pub delegation_response: DelegationResponse,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DelegationResponse {
    pub balance: Balance,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CommissionResponse {
    pub commission: CommissionBalances,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CommissionBalances {
    #[serde(default)]
    pub commission: Vec<Balance>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RewardsResponse {
    #[serde(default)]
    pub rewards: Vec<Balance>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BalancesResponse {
    #[serde(default)]
    pub balances: Vec<Balance>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SigningInfoResponse {
    pub val_signing_info: SigningInfo,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SigningInfo {
    #[serde_as(as = "DisplayFromStr")]
    pub missed_blocks_counter: u64,
    #[serde(default)]
    pub tombstoned: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlashingParamsResponse {
    pub params: SlashingParams,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SlashingParams {
    #[serde_as(as = "DisplayFromStr")]
    pub signed_blocks_window: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub min_signed_per_window: f64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StakingParamsResponse {
    pub params: StakingParams,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StakingParams {
    pub max_validators: u32,
    pub bond_denom: String,
}

/// `/simple/price` response: currency id to quote currency to price.
pub type CoingeckoResponse = HashMap<String, HashMap<String, f64>>;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DexScreenerResponse {
    #[serde(default)]
    pub pairs: Option<Vec<DexScreenerPair>>,
}

#[serde_as]
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DexScreenerPair {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(rename = "priceUsd")]
    pub price_usd: Option<f64>,
}
