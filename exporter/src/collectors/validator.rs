use super::collector::{
    for_each_chain,
    Collector,
    CollectorOutput,
};
use crate::{
    client::RemoteClient,
    lcd::LcdClient,
    metrics::{
        flag,
        Metric,
        MetricName,
    },
    types::ValidatorInfo,
};
use cosmos_validators_exporter_config::{
    Chain,
    Config,
    Validator,
};
use futures::future::join_all;
use std::{
    future::Future,
    pin::Pin,
    sync::Arc,
};

/// Bonded validators of a chain ordered by voting power.
#[derive(Debug, Clone, PartialEq)]
struct ActiveSet {
    bonded: Vec<(String, f64)>,
    max_validators: usize,
}

impl ActiveSet {
    fn new(validators: &[ValidatorInfo], max_validators: u32) -> Self {
        let mut bonded: Vec<(String, f64)> = validators
            .iter()
            .filter(|validator| validator.is_bonded())
            .map(|validator| (validator.operator_address.clone(), validator.tokens))
            .collect();
        bonded.sort_by(|a, b| b.1.total_cmp(&a.1));

        Self {
            bonded,
            max_validators: max_validators as usize,
        }
    }

    /// 1-based position among bonded validators.
    fn rank(&self, address: &str) -> Option<usize> {
        self.bonded
            .iter()
            .position(|(operator_address, _)| operator_address == address)
            .map(|index| index + 1)
    }

    fn is_active(&self, address: &str) -> bool {
        self.rank(address)
            .is_some_and(|rank| rank <= self.max_validators)
    }

    /// Tokens of the validator sitting at the edge of the active set.
    fn last_active_tokens(&self) -> Option<f64> {
        let size = self.bonded.len().min(self.max_validators);
        size.checked_sub(1)
            .and_then(|index| self.bonded.get(index))
            .map(|(_, tokens)| *tokens)
    }
}

/// Validator descriptions, commission rates and voting power, plus the chain's active set.
pub struct ValidatorCollector {
    config: Arc<Config>,
    client: RemoteClient,
}

impl ValidatorCollector {
    pub fn new(config: Arc<Config>, client: RemoteClient) -> Self {
        Self { config, client }
    }

    async fn collect_chain(&self, chain: &Chain) -> CollectorOutput {
        let mut output = CollectorOutput::default();
        let lcd = LcdClient::new(chain, &self.client);

        let (validators, params, tracked) = tokio::join!(
            lcd.all_validators(),
            lcd.staking_params(),
            join_all(chain.validators.iter().map(|validator| lcd.validator(&validator.address))),
        );

        let validators = output.record(validators);
        let params = output.record(params);

        if let Some(response) = &validators {
            let bonded = response.validators.iter().filter(|v| v.is_bonded()).count();
            output.push(Metric::new(MetricName::ValidatorsCount, bonded as f64).label("chain", &chain.name));
        }
        if let Some(response) = &params {
            output.push(
                Metric::new(MetricName::ActiveSetSize, response.params.max_validators as f64)
                    .label("chain", &chain.name),
            );
        }

        let active_set = match (&validators, &params) {
            (Some(validators), Some(params)) => {
                let active_set = ActiveSet::new(&validators.validators, params.params.max_validators);
                if let Some(tokens) = active_set.last_active_tokens() {
                    output.push(
                        Metric::new(MetricName::ActiveSetTokens, tokens)
                            .label("chain", &chain.name)
                            .label("denom", &params.params.bond_denom),
                    );
                }
                Some(active_set)
            }
            _ => None,
        };

        for (validator, query) in chain.validators.iter().zip(tracked) {
            if let Some(response) = output.record(query) {
                self.push_validator_info(&mut output, chain, validator, &response.validator);
            }

            if let Some(active_set) = &active_set {
                if let Some(rank) = active_set.rank(&validator.address) {
                    output.push(
                        Metric::new(MetricName::Rank, rank as f64)
                            .label("chain", &chain.name)
                            .label("address", &validator.address),
                    );
                }
                output.push(
                    Metric::new(MetricName::IsActive, flag(active_set.is_active(&validator.address)))
                        .label("chain", &chain.name)
                        .label("address", &validator.address),
                );
            }
        }

        output
    }

    fn push_validator_info(
        &self,
        output: &mut CollectorOutput,
        chain: &Chain,
        validator: &Validator,
        info: &ValidatorInfo,
    ) {
        let base = |name: MetricName, value: f64| {
            Metric::new(name, value)
                .label("chain", &chain.name)
                .label("address", &validator.address)
        };
        let description = &info.description;
        let rates = &info.commission.commission_rates;

        output.push(
            base(MetricName::Info, 1.0)
                .label("moniker", &description.moniker)
                .label("details", &description.details)
                .label("identity", &description.identity)
                .label("security_contact", &description.security_contact)
                .label("website", &description.website),
        );
        output.push(base(MetricName::Jailed, flag(info.jailed)));
        output.push(base(MetricName::Status, info.status_code()));
        output.push(base(MetricName::CommissionRate, rates.rate));
        output.push(base(MetricName::CommissionMax, rates.max_rate));
        output.push(base(MetricName::CommissionMaxChange, rates.max_change_rate));
        output.push(base(MetricName::TotalDelegations, info.tokens).label("denom", &chain.base_denom));
        output.push(base(MetricName::MinSelfDelegation, info.min_self_delegation).label("denom", &chain.base_denom));
    }
}

impl Collector for ValidatorCollector {
    fn collect(&self) -> Pin<Box<dyn Future<Output = CollectorOutput> + Send + '_>> {
        Box::pin(for_each_chain(&self.config.chains, |chain| self.collect_chain(chain)))
    }

    fn name(&self) -> &'static str {
        "validator"
    }
}
