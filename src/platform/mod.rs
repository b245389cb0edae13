pub mod event_gate;
pub mod shared;

pub use event_gate::NexusEventGate;
pub use shared::SharedEventGate;
