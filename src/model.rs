//! Record types shared across the crate
//!
//! `BalanceRecord` is one row of the queried dataset. Records are immutable
//! once fetched; the accumulated sequence is append-only during a run and no
//! deduplication is performed across pages.

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One fungible-asset balance row as returned by the indexer.
///
/// `amount` is kept as a decimal string end to end. Balances routinely exceed
/// the 64-bit range, so the value is never routed through a fixed-width
/// integer or a float; the aggregator parses it into a `BigUint` on demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// Balance amount as a decimal string, preserved verbatim
    #[serde(deserialize_with = "amount_from_json")]
    pub amount: String,

    /// Asset type identifier (opaque)
    pub asset_type: String,

    /// Owner account address (opaque)
    pub owner_address: String,

    /// Storage object identifier (opaque)
    pub storage_id: String,

    /// Whether the balance is frozen
    pub is_frozen: bool,

    /// Whether this is the owner's primary store for the asset
    pub is_primary: bool,

    /// Timestamp of the last transaction touching this balance, verbatim
    pub last_transaction_timestamp: String,

    /// Version of the last transaction touching this balance
    pub last_transaction_version: u64,

    /// Token standard label, passed through without validation
    pub token_standard: String,
}

impl BalanceRecord {
    /// Parse the amount into an arbitrary-precision integer.
    ///
    /// A malformed amount aggregates as zero rather than aborting the run;
    /// structurally wrong rows are already rejected at deserialization.
    pub fn amount_uint(&self) -> BigUint {
        self.amount
            .trim()
            .parse::<BigUint>()
            .unwrap_or_else(|_| BigUint::zero())
    }
}

/// Accept the amount as either a JSON string or a JSON number.
///
/// Some indexer deployments serialize numeric columns as bare JSON numbers;
/// with serde_json's arbitrary-precision parsing the literal survives the
/// round trip either way.
fn amount_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "amount must be a string or number, got {other}"
        ))),
    }
}

/// One bounded batch of records returned by a single paginated request.
///
/// Transient: created per request, consumed immediately by the paginator,
/// discarded after appending to the accumulator.
#[derive(Debug, Clone)]
pub struct PageResult {
    /// Records extracted from the page
    pub records: Vec<BalanceRecord>,
}

impl PageResult {
    /// Create a page result from extracted records
    pub fn new(records: Vec<BalanceRecord>) -> Self {
        Self { records }
    }

    /// Number of records in this page, used to decide continuation
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the page is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
