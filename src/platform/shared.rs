use std::sync::Arc;

use tokio::sync::RwLock;

use crate::platform::NexusEventGate;
use crate::types::interfaces::FanTokenRegistry;

/// Cloneable handle for driving one gate from many tasks. Each closure runs
/// under the lock, so a call's effects are never interleaved with another
/// call's; slow work such as attestation belongs outside the closure.
pub struct SharedEventGate<F: FanTokenRegistry> {
    inner: Arc<RwLock<NexusEventGate<F>>>,
}

impl<F: FanTokenRegistry> Clone for SharedEventGate<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: FanTokenRegistry> SharedEventGate<F> {
    pub fn new(gate: NexusEventGate<F>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(gate)),
        }
    }

    pub async fn read<R>(&self, f: impl FnOnce(&NexusEventGate<F>) -> R) -> R {
        let gate = self.inner.read().await;
        f(&gate)
    }

    pub async fn write<R>(&self, f: impl FnOnce(&mut NexusEventGate<F>) -> R) -> R {
        let mut gate = self.inner.write().await;
        f(&mut gate)
    }
}
