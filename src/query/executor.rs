//! Balances query execution and row extraction

use crate::config::MAX_PAGE_LIMIT;
use crate::error::{Error, Result};
use crate::http::GraphqlClient;
use crate::model::{BalanceRecord, PageResult};
use crate::pagination::PageFetcher;
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;
use url::Url;

/// GraphQL document for one page of fungible asset balances
pub const BALANCES_QUERY: &str = r"
query FungibleAssetBalances($asset_type: String!, $limit: Int!, $offset: Int!) {
  current_fungible_asset_balances(
    where: {asset_type: {_eq: $asset_type}}
    limit: $limit
    offset: $offset
    order_by: {amount: desc}
  ) {
    amount
    asset_type
    owner_address
    storage_id
    is_frozen
    is_primary
    last_transaction_timestamp
    last_transaction_version
    token_standard
  }
}
";

/// Response field holding the rows
pub const BALANCES_DATA_FIELD: &str = "current_fungible_asset_balances";

/// Executes the balances query one page at a time.
///
/// Holds the endpoint and filter so the paginator only has to supply
/// `limit` and `offset`. The shared [`GraphqlClient`] keeps the connection
/// pool alive across pages.
#[derive(Debug)]
pub struct QueryExecutor {
    client: GraphqlClient,
    endpoint: Url,
    asset_type: String,
}

impl QueryExecutor {
    /// Create an executor for the given endpoint and asset-type filter
    pub fn new(client: GraphqlClient, endpoint: Url, asset_type: impl Into<String>) -> Self {
        Self {
            client,
            endpoint,
            asset_type: asset_type.into(),
        }
    }
}

#[async_trait]
impl PageFetcher for QueryExecutor {
    async fn fetch_page(&self, limit: u32, offset: u64) -> Result<PageResult> {
        // Caller precondition, validated at config time
        debug_assert!(limit >= 1 && limit <= MAX_PAGE_LIMIT);

        let variables = json!({
            "asset_type": self.asset_type,
            "limit": limit,
            "offset": offset,
        });

        debug!("Fetching page at offset {offset} (limit {limit})");
        let body = self
            .client
            .execute(&self.endpoint, BALANCES_QUERY, variables)
            .await?;

        extract_page(&body)
    }
}

/// Extract the rows from a GraphQL response body.
///
/// Any shape other than `data.current_fungible_asset_balances: [..]` with
/// rows matching [`BalanceRecord`] is a malformed-response failure.
pub(crate) fn extract_page(body: &Value) -> Result<PageResult> {
    let data = body
        .get("data")
        .ok_or_else(|| Error::missing_field("data"))?;

    let rows = data
        .get(BALANCES_DATA_FIELD)
        .ok_or_else(|| Error::missing_field(BALANCES_DATA_FIELD))?;

    let rows = rows
        .as_array()
        .ok_or_else(|| Error::decode(format!("'{BALANCES_DATA_FIELD}' is not an array")))?;

    let records: Vec<BalanceRecord> = rows
        .iter()
        .map(|row| {
            serde_json::from_value(row.clone())
                .map_err(|e| Error::decode(format!("row does not match balance shape: {e}")))
        })
        .collect::<Result<_>>()?;

    Ok(PageResult::new(records))
}
