/*!
 * Gate Core Operations
 * Enqueue, serve, peek, and cancel operations
 */

use super::pattern::ScanHit;
use super::Gate;
use crate::core::errors::{GateError, GateResult};
use crate::core::types::Class;
use std::borrow::Borrow;
use tracing::{debug, trace, warn};

impl<T> Gate<T> {
    /// Append an entity to the tail of its class line
    pub fn enqueue(&mut self, class: Class, id: impl Into<T>) -> GateResult<()> {
        if !self.recognizes(class) {
            warn!(class = %class, "Enqueue rejected: class not recognized by this gate");
            return Err(GateError::InvalidClass(class.as_str().to_string()));
        }

        let queue = &mut self.queues[class.index()];
        queue.push_back(id.into());
        self.counters.enqueued[class.index()] += 1;

        debug!(class = %class, waiting = queue.len(), "Entity enqueued");
        Ok(())
    }

    /// Enqueue with a textual class, validated before anything is touched
    pub fn enqueue_str(&mut self, class: &str, id: impl Into<T>) -> GateResult<()> {
        match class.parse::<Class>() {
            Ok(class) => self.enqueue(class, id),
            Err(err) => {
                warn!(class = class, "Enqueue rejected: unknown class");
                Err(err)
            }
        }
    }

    /// Serve the next entity per the pattern
    pub fn serve(&mut self) -> GateResult<T> {
        self.serve_with_class().map(|(_, id)| id)
    }

    /// Serve the next entity and report which class it came from
    ///
    /// The cursor moves only when an entity is actually removed.
    pub fn serve_with_class(&mut self) -> GateResult<(Class, T)> {
        let Some(hit) = self.next_hit() else {
            debug!(cursor = ?self.cursor, "Serve found every line empty");
            return Err(GateError::EmptyGate);
        };

        // next_hit only selects non-empty lines; ok_or keeps this path panic-free
        let id = self.queues[hit.class.index()]
            .pop_front()
            .ok_or(GateError::EmptyGate)?;

        self.cursor = Some(hit.index);
        self.counters.served[hit.class.index()] += 1;
        self.counters.slots_skipped += hit.skipped as u64;

        if hit.skipped > 0 {
            trace!(skipped = hit.skipped, slot = hit.index, "Skipped empty slots");
        }
        debug!(
            class = %hit.class,
            slot = hit.index,
            waiting = self.queues[hit.class.index()].len(),
            "Entity served"
        );

        Ok((hit.class, id))
    }

    /// Class the next serve would draw from, without committing
    pub fn peek_next_class(&self) -> Option<Class> {
        self.next_hit().map(|hit| hit.class)
    }

    /// Classes the next `n` serves would draw from, absent further arrivals
    ///
    /// Stops early once every line would be exhausted.
    pub fn preview(&self, n: usize) -> Vec<Class> {
        let mut waiting = [0usize; Class::COUNT];
        for class in Class::ALL {
            waiting[class.index()] = self.queues[class.index()].len();
        }

        let mut cursor = self.cursor;
        let mut order = Vec::with_capacity(n.min(self.total_len()));

        while order.len() < n {
            let Some(hit) = self.pattern.scan(cursor, |c| waiting[c.index()] > 0) else {
                break;
            };
            waiting[hit.class.index()] -= 1;
            cursor = Some(hit.index);
            order.push(hit.class);
        }

        order
    }

    /// Remove the first waiting entity equal to `id` from `class`
    ///
    /// Order of the remaining entities and the cursor are untouched.
    pub fn cancel<Q>(&mut self, class: Class, id: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        let queue = &mut self.queues[class.index()];
        let Some(pos) = queue.iter().position(|e| <T as Borrow<Q>>::borrow(e) == id) else {
            return false;
        };

        queue.remove(pos);
        self.counters.cancelled[class.index()] += 1;
        debug!(class = %class, position = pos, "Entity cancelled");
        true
    }

    /// Number of entities waiting in `class`
    #[inline]
    pub fn len(&self, class: Class) -> usize {
        self.queues[class.index()].len()
    }

    /// Number of entities waiting across all classes
    pub fn total_len(&self) -> usize {
        self.queues.iter().map(|q| q.len()).sum()
    }

    /// Check if every line is empty
    pub fn is_empty(&self) -> bool {
        self.queues.iter().all(|q| q.is_empty())
    }

    /// Entities waiting in `class`, in service order
    pub fn waiting(&self, class: Class) -> impl Iterator<Item = &T> + '_ {
        self.queues[class.index()].iter()
    }

    fn next_hit(&self) -> Option<ScanHit> {
        let queues = &self.queues;
        self.pattern
            .scan(self.cursor, |class| !queues[class.index()].is_empty())
    }
}
