use alloy_primitives::{Address, Log};
use alloy_sol_types::SolEvent;

/// Append-only contract log. Every entry is an ABI-encoded `sol!` event
/// stamped with the emitting contract's address, the same shape an indexer
/// reads back from a transaction receipt.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    emitter: Address,
    entries: Vec<Log>,
}

impl EventLog {
    pub fn new(emitter: Address) -> Self {
        Self {
            emitter,
            entries: Vec::new(),
        }
    }

    pub fn emitter(&self) -> Address {
        self.emitter
    }

    pub fn emit<E: SolEvent>(&mut self, event: E) {
        self.entries.push(Log {
            address: self.emitter,
            data: event.encode_log_data(),
        });
    }

    pub fn entries(&self) -> &[Log] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decodes every entry whose first topic is `E`'s signature hash.
    pub fn decode<E: SolEvent>(&self) -> Vec<E> {
        self.entries
            .iter()
            .filter(|log| log.data.topics().first() == Some(&E::SIGNATURE_HASH))
            .filter_map(|log| E::decode_log_data(&log.data, true).ok())
            .collect()
    }

    pub fn count<E: SolEvent>(&self) -> usize {
        self.entries
            .iter()
            .filter(|log| log.data.topics().first() == Some(&E::SIGNATURE_HASH))
            .count()
    }
}
