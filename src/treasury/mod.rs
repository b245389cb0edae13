pub mod fund_collector;
pub mod native_ledger;

pub use fund_collector::{FundCollector, FundPool};
pub use native_ledger::NativeLedger;
