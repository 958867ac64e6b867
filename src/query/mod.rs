//! Query executor
//!
//! Issues single paginated requests against the balances query and extracts
//! the rows from the expected response field. Retry policy does not live
//! here; a failure is returned to the paginator as-is.

mod executor;

pub use executor::{QueryExecutor, BALANCES_DATA_FIELD, BALANCES_QUERY};
