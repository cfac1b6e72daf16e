use crate::{
    client::{
        QueryError,
        QueryInfo,
        RemoteClient,
    },
    types::*,
};
use cosmos_validators_exporter_config::{
    Chain,
    QueryKind,
};
use serde::de::DeserializeOwned;

/// Outcome of a gated query. `None` when the query kind is disabled for the chain, in which case
/// nothing was sent and there is nothing to report.
pub type Query<T> = Option<(Result<T, QueryError>, QueryInfo)>;

/// REST client bound to a single chain's LCD endpoint.
#[derive(Clone, Copy)]
pub struct LcdClient<'a> {
    chain: &'a Chain,
    client: &'a RemoteClient,
}

impl<'a> LcdClient<'a> {
    pub fn new(chain: &'a Chain, client: &'a RemoteClient) -> Self {
        Self { chain, client }
    }

    async fn query<T: DeserializeOwned>(&self, kind: QueryKind, path: String) -> Query<T> {
        if !self.chain.is_enabled(kind) {
            trace!(chain = %self.chain.name, query = %kind, "Query is disabled, skipping");
            return None;
        }

        let url = format!("{}{}", self.chain.endpoint(), path);
        Some(self.client.get(&self.chain.name, url).await)
    }

    pub async fn validator(&self, address: &str) -> Query<ValidatorResponse> {
        self.query(
            QueryKind::Validator,
            format!("/cosmos/staking/v1beta1/validators/{address}"),
        )
        .await
    }

    pub async fn all_validators(&self) -> Query<ValidatorsResponse> {
        self.query(
            QueryKind::Validators,
            "/cosmos/staking/v1beta1/validators?pagination.count_total=true&pagination.limit=1000".to_string(),
        )
        .await
    }

    pub async fn delegations_count(&self, address: &str) -> Query<PaginationResponse> {
        self.query(
            QueryKind::Delegations,
            format!(
                "/cosmos/staking/v1beta1/validators/{address}/delegations?pagination.count_total=true&pagination.limit=1"
            ),
        )
        .await
    }

    pub async fn unbonds_count(&self, address: &str) -> Query<PaginationResponse> {
        self.query(
            QueryKind::Unbonds,
            format!(
                "/cosmos/staking/v1beta1/validators/{address}/unbonding_delegations?pagination.count_total=true&pagination.limit=1"
            ),
        )
        .await
    }

    pub async fn single_delegation(&self, address: &str, wallet: &str) -> Query<SingleDelegationResponse> {
        self.query(
            QueryKind::SelfDelegation,
            format!("/cosmos/staking/v1beta1/validators/{address}/delegations/{wallet}"),
        )
        .await
    }

    pub async fn commission(&self, address: &str) -> Query<CommissionResponse> {
        self.query(
            QueryKind::Commission,
            format!("/cosmos/distribution/v1beta1/validators/{address}/commission"),
        )
        .await
    }

    pub async fn delegator_rewards(&self, address: &str, wallet: &str) -> Query<RewardsResponse> {
        self.query(
            QueryKind::Rewards,
            format!("/cosmos/distribution/v1beta1/delegators/{wallet}/rewards/{address}"),
        )
        .await
    }

    pub async fn wallet_balance(&self, wallet: &str) -> Query<BalancesResponse> {
        self.query(QueryKind::Balance, format!("/cosmos/bank/v1beta1/balances/{wallet}"))
            .await
    }

    pub async fn signing_info(&self, consensus_address: &str) -> Query<SigningInfoResponse> {
        self.query(
            QueryKind::SigningInfo,
            format!("/cosmos/slashing/v1beta1/signing_infos/{consensus_address}"),
        )
        .await
    }

    pub async fn slashing_params(&self) -> Query<SlashingParamsResponse> {
        self.query(QueryKind::SlashingParams, "/cosmos/slashing/v1beta1/params".to_string())
            .await
    }

    pub async fn staking_params(&self) -> Query<StakingParamsResponse> {
        self.query(QueryKind::StakingParams, "/cosmos/staking/v1beta1/params".to_string())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::chain;
    use mockito::Server;
    use std::time::Duration;

    #[tokio::test]
    async fn disabled_queries_never_reach_the_endpoint() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let mut chain = chain("cosmos", &server.url());
        chain.queries.insert("commission".to_string(), false);
        let client = RemoteClient::new(Duration::from_secs(1)).unwrap();

        assert!(LcdClient::new(&chain, &client).commission("valoper").await.is_none());
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn builds_urls_from_the_chain_endpoint() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/cosmos/distribution/v1beta1/delegators/wallet/rewards/valoper")
            .with_body(r#"{"rewards": [{"denom": "uatom", "amount": "10.5"}]}"#)
            .create_async()
            .await;

        // Trailing slashes on the configured endpoint must not produce `//` paths.
        let chain = chain("cosmos", &format!("{}/", server.url()));
        let client = RemoteClient::new(Duration::from_secs(1)).unwrap();

        let (result, info) = LcdClient::new(&chain, &client)
            .delegator_rewards("valoper", "wallet")
            .await
            .unwrap();

        assert_eq!(result.unwrap().rewards[0].amount, 10.5);
        assert!(info.success);
        assert_eq!(info.chain, "cosmos");
        mock.assert_async().await;
    }
}
