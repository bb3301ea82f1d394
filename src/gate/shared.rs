/*!
 * Shared Gate
 * Cloneable handle serializing gate access across threads
 */

use super::{Gate, GateStats};
use crate::core::errors::GateResult;
use crate::core::id::EntityId;
use crate::core::types::Class;
use parking_lot::Mutex;
use std::sync::Arc;

/// Thread-safe gate handle
///
/// One lock guards each operation as a unit, so a serve racing an enqueue
/// never interleaves a line mutation with a cursor update. Use [`with`] for
/// multi-step sequences that must observe a single state, such as peek then
/// serve.
///
/// [`with`]: SharedGate::with
pub struct SharedGate<T = EntityId> {
    inner: Arc<Mutex<Gate<T>>>,
}

impl<T> SharedGate<T> {
    pub fn new(gate: Gate<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(gate)),
        }
    }

    pub fn enqueue(&self, class: Class, id: impl Into<T>) -> GateResult<()> {
        self.inner.lock().enqueue(class, id)
    }

    pub fn enqueue_str(&self, class: &str, id: impl Into<T>) -> GateResult<()> {
        self.inner.lock().enqueue_str(class, id)
    }

    pub fn serve(&self) -> GateResult<T> {
        self.inner.lock().serve()
    }

    pub fn serve_with_class(&self) -> GateResult<(Class, T)> {
        self.inner.lock().serve_with_class()
    }

    pub fn peek_next_class(&self) -> Option<Class> {
        self.inner.lock().peek_next_class()
    }

    pub fn total_len(&self) -> usize {
        self.inner.lock().total_len()
    }

    pub fn stats(&self) -> GateStats {
        self.inner.lock().stats()
    }

    /// Run `f` with exclusive access to the gate
    pub fn with<R>(&self, f: impl FnOnce(&mut Gate<T>) -> R) -> R {
        f(&mut self.inner.lock())
    }
}

impl<T> Clone for SharedGate<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for SharedGate<T> {
    fn default() -> Self {
        Self::new(Gate::new())
    }
}

impl<T> From<Gate<T>> for SharedGate<T> {
    fn from(gate: Gate<T>) -> Self {
        Self::new(gate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let gate: SharedGate = SharedGate::default();
        let other = gate.clone();

        gate.enqueue(Class::Fastpass, "A").unwrap();
        assert_eq!(other.peek_next_class(), Some(Class::Fastpass));
        assert_eq!(other.serve().unwrap(), "A");
        assert_eq!(gate.total_len(), 0);
    }

    #[test]
    fn test_with_peek_then_serve() {
        let gate: SharedGate = SharedGate::default();
        gate.enqueue(Class::Regular, "B").unwrap();

        let (peeked, served) = gate.with(|g| (g.peek_next_class(), g.serve_with_class()));
        assert_eq!(peeked, Some(served.unwrap().0));
    }
}
