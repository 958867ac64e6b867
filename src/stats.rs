//! Summary statistics
//!
//! A pure view over the accumulated record sequence, computed once at the
//! end of a run. Amounts are summed as arbitrary-precision integers so
//! balances beyond the 64-bit range never overflow or truncate.

use crate::model::BalanceRecord;
use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use std::collections::HashSet;

/// Derived statistics over a record sequence
#[derive(Debug, Clone)]
pub struct SummaryStats {
    /// Number of records
    pub total_records: usize,
    /// Number of distinct owner addresses
    pub unique_owners: usize,
    /// Exact sum of all amounts
    pub total_amount: BigUint,
    /// Mean balance; zero when there are no records
    pub average_balance: f64,
    /// Largest balances, descending, ties in original fetch order
    pub top_n: Vec<BalanceRecord>,
}

impl SummaryStats {
    /// Average balance formatted to two decimal places
    pub fn average_balance_display(&self) -> String {
        format!("{:.2}", self.average_balance)
    }
}

/// Compute summary statistics over the accumulated records.
///
/// No I/O and no side effects; the input is not modified.
pub fn summarize(records: &[BalanceRecord], top_n: usize) -> SummaryStats {
    let total_records = records.len();

    let unique_owners = records
        .iter()
        .map(|r| r.owner_address.as_str())
        .collect::<HashSet<_>>()
        .len();

    let amounts: Vec<BigUint> = records.iter().map(BalanceRecord::amount_uint).collect();
    let total_amount: BigUint = amounts.iter().sum();

    let average_balance = if total_records == 0 {
        0.0
    } else {
        total_amount.to_f64().unwrap_or(0.0) / total_records as f64
    };

    // Stable sort keeps ties in fetch order
    let mut order: Vec<usize> = (0..total_records).collect();
    order.sort_by(|&a, &b| amounts[b].cmp(&amounts[a]));
    order.truncate(top_n);
    let top_n = order.into_iter().map(|i| records[i].clone()).collect();

    SummaryStats {
        total_records,
        unique_owners,
        total_amount,
        average_balance,
        top_n,
    }
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self {
            total_records: 0,
            unique_owners: 0,
            total_amount: BigUint::zero(),
            average_balance: 0.0,
            top_n: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn record(owner: &str, amount: &str) -> BalanceRecord {
        BalanceRecord {
            amount: amount.to_string(),
            asset_type: "0xasset".to_string(),
            owner_address: owner.to_string(),
            storage_id: format!("store-{owner}-{amount}"),
            is_frozen: false,
            is_primary: true,
            last_transaction_timestamp: "2024-05-01T12:00:00".to_string(),
            last_transaction_version: 1,
            token_standard: "v2".to_string(),
        }
    }

    #[test]
    fn test_empty_input() {
        let stats = summarize(&[], 5);
        assert_eq!(stats.total_records, 0);
        assert_eq!(stats.unique_owners, 0);
        assert_eq!(stats.total_amount, BigUint::zero());
        assert_eq!(stats.average_balance_display(), "0.00");
        assert!(stats.top_n.is_empty());
    }

    #[test]
    fn test_exact_sum_beyond_u64() {
        // Three balances of 2^63 each; the sum overflows i64 and u64 math
        let records = vec![
            record("0xa", "9223372036854775808"),
            record("0xb", "9223372036854775808"),
            record("0xc", "9223372036854775808"),
        ];
        let stats = summarize(&records, 5);
        assert_eq!(
            stats.total_amount,
            "27670116110564327424".parse::<BigUint>().unwrap()
        );
        assert_eq!(stats.total_records, 3);
    }

    #[test]
    fn test_unique_owners_counts_distinct_addresses() {
        let records = vec![
            record("0xa", "1"),
            record("0xa", "2"),
            record("0xb", "3"),
        ];
        let stats = summarize(&records, 5);
        assert_eq!(stats.total_records, 3);
        assert_eq!(stats.unique_owners, 2);
    }

    #[test]
    fn test_top_n_descending_and_truncated() {
        let records = vec![
            record("0xa", "5"),
            record("0xb", "300"),
            record("0xc", "40"),
            record("0xd", "1000"),
        ];
        let stats = summarize(&records, 2);
        let owners: Vec<&str> = stats.top_n.iter().map(|r| r.owner_address.as_str()).collect();
        assert_eq!(owners, vec!["0xd", "0xb"]);
    }

    #[test]
    fn test_top_n_ties_keep_fetch_order() {
        let records = vec![
            record("first", "100"),
            record("second", "100"),
            record("third", "100"),
            record("small", "1"),
        ];
        let stats = summarize(&records, 3);
        let owners: Vec<&str> = stats.top_n.iter().map(|r| r.owner_address.as_str()).collect();
        assert_eq!(owners, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_top_n_orders_numerically_not_lexically() {
        // "9" > "1000" lexically; numeric comparison must win
        let records = vec![record("0xa", "9"), record("0xb", "1000")];
        let stats = summarize(&records, 2);
        assert_eq!(stats.top_n[0].owner_address, "0xb");
    }

    #[test_case(&["1", "2", "3"], "2.00"; "small integers")]
    #[test_case(&["10"], "10.00"; "single record")]
    #[test_case(&["1", "2"], "1.50"; "fractional mean")]
    fn test_average_display(amounts: &[&str], expected: &str) {
        let records: Vec<BalanceRecord> = amounts
            .iter()
            .enumerate()
            .map(|(i, a)| record(&format!("0x{i}"), a))
            .collect();
        let stats = summarize(&records, 5);
        assert_eq!(stats.average_balance_display(), expected);
    }

    #[test]
    fn test_malformed_amount_counts_as_zero() {
        let records = vec![record("0xa", "garbage"), record("0xb", "7")];
        let stats = summarize(&records, 5);
        assert_eq!(stats.total_amount, BigUint::from(7u8));
        assert_eq!(stats.top_n[0].owner_address, "0xb");
    }
}
