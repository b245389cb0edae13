pub mod access_levels;
pub mod token_id;

pub use access_levels::{AccessLevel, AccessLevelLedger};
pub use token_id::generate_token_id;
