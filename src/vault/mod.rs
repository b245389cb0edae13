pub mod nexus_token;

pub use nexus_token::NexusTokenVault;
