mod registry;

pub use registry::{
    MetricsRegistry,
    TEXT_FORMAT,
};
use std::collections::BTreeMap;
use strum::{
    EnumIter,
    IntoStaticStr,
};

pub const NAMESPACE: &str = "cosmos_validators_exporter";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MetricName {
    // Validator data
    Commission,
    DelegationsCount,
    UnbondsCount,
    SelfDelegated,
    SelfDelegationRewards,
    WalletBalance,
    Info,
    Jailed,
    Status,
    CommissionRate,
    CommissionMax,
    CommissionMaxChange,
    TotalDelegations,
    MinSelfDelegation,
    Rank,
    IsActive,
    MissedBlocks,
    Tombstoned,

    // Chain data
    ValidatorsCount,
    ActiveSetSize,
    ActiveSetTokens,
    MissedBlocksWindow,
    MinSignedBlocksPerWindow,
    DenomCoefficient,
    BaseDenom,
    Price,

    // Exporter itself
    StartTime,
    QueriesTotal,
    QueriesSuccess,
    QueriesError,
    QueryTiming,
    QuerySuccess,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Name as exposed to Prometheus, including the namespace.
    pub fn full_name(&self) -> String {
        format!("{NAMESPACE}_{}", self.as_str())
    }

    pub fn help(&self) -> &'static str {
        match self {
            MetricName::Commission => "Unclaimed validator commission, in base denom",
            MetricName::DelegationsCount => "Number of delegators of the validator",
            MetricName::UnbondsCount => "Number of unbonding delegations of the validator",
            MetricName::SelfDelegated => "Amount the validator's wallet has delegated to it, in base denom",
            MetricName::SelfDelegationRewards => "Unclaimed self-delegation rewards, in base denom",
            MetricName::WalletBalance => "Balance of the validator's wallet, in base denom",
            MetricName::Info => "Validator description, always 1",
            MetricName::Jailed => "Whether the validator is jailed, 1 or 0",
            MetricName::Status => "Validator bond status: 1 unbonded, 2 unbonding, 3 bonded, 0 unknown",
            MetricName::CommissionRate => "Current commission rate of the validator",
            MetricName::CommissionMax => "Maximum commission rate of the validator",
            MetricName::CommissionMaxChange => "Maximum daily commission rate change of the validator",
            MetricName::TotalDelegations => "Total tokens delegated to the validator, in base denom",
            MetricName::MinSelfDelegation => "Minimum self-delegation of the validator, in base denom",
            MetricName::Rank => "Position of the validator among bonded validators by tokens, starting at 1",
            MetricName::IsActive => "Whether the validator is inside the active set, 1 or 0",
            MetricName::MissedBlocks => "Blocks missed by the validator in the current signing window",
            MetricName::Tombstoned => "Whether the validator is tombstoned, 1 or 0",
            MetricName::ValidatorsCount => "Number of bonded validators on the chain",
            MetricName::ActiveSetSize => "Maximum number of validators in the active set",
            MetricName::ActiveSetTokens => "Tokens of the last validator inside the active set, in base denom",
            MetricName::MissedBlocksWindow => "Size of the signing window, in blocks",
            MetricName::MinSignedBlocksPerWindow => "Share of the signing window a validator has to sign",
            MetricName::DenomCoefficient => "Number of base denom units in one display denom unit",
            MetricName::BaseDenom => "Base denom of the chain, always 1",
            MetricName::Price => "Price of one display denom unit, in USD",
            MetricName::StartTime => "Unix timestamp of when the exporter was started",
            MetricName::QueriesTotal => "Upstream queries done for the chain during this scrape",
            MetricName::QueriesSuccess => "Successful upstream queries for the chain during this scrape",
            MetricName::QueriesError => "Failed upstream queries for the chain during this scrape",
            MetricName::QueryTiming => "Duration of an upstream query, in seconds",
            MetricName::QuerySuccess => "Whether an upstream query succeeded, 1 or 0",
        }
    }
}

/// One labeled observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub name: MetricName,
    pub labels: BTreeMap<&'static str, String>,
    pub value: f64,
}

impl Metric {
    pub fn new(name: MetricName, value: f64) -> Self {
        Self {
            name,
            labels: BTreeMap::new(),
            value,
        }
    }

    pub fn label(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.labels.insert(key, value.into());
        self
    }

    pub fn label_value(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

pub(crate) fn flag(value: bool) -> f64 {
    if value {
        1.0
    } else {
        0.0
    }
}
