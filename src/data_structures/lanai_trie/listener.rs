//! Allocation instrumentation for the Lanai Trie.
//!
//! A trie can be configured with an [`AllocationListener`] that is told about
//! every internal allocation and every release. Listeners are held per trie
//! instance, so two tries in one process never see each other's events.
//!
//! Over the lifetime of a trie the number of `on_allocate` calls equals the
//! number of `on_deallocate` calls once the trie has been destroyed.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// What an allocation event refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AllocationKind {
    /// The trie record itself.
    Trie,
    /// A single trie node.
    Node,
    /// The owned copy of an inserted word.
    Word,
}

/// A single allocation or deallocation, as delivered to closure listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationEvent {
    /// Memory for `kind` was obtained.
    Allocate(AllocationKind),
    /// Memory for `kind` was released.
    Deallocate(AllocationKind),
}

/// Receives allocation and deallocation notifications from a trie.
#[cfg_attr(test, mockall::automock)]
pub trait AllocationListener {
    /// Called after every successful internal allocation.
    fn on_allocate(&self, kind: AllocationKind);

    /// Called for every release during node or trie destruction.
    fn on_deallocate(&self, kind: AllocationKind);
}

impl<F> AllocationListener for F
where
    F: Fn(AllocationEvent),
{
    fn on_allocate(&self, kind: AllocationKind) {
        self(AllocationEvent::Allocate(kind));
    }

    fn on_deallocate(&self, kind: AllocationKind) {
        self(AllocationEvent::Deallocate(kind));
    }
}

/// Shared handle to a listener, as stored in the trie configuration.
pub type SharedAllocationListener = Arc<dyn AllocationListener + Send + Sync>;

/// Listener that counts events with atomic counters.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use lanai_lib::data_structures::lanai_trie::{CountingListener, LanaiTrie, LanaiTrieConfig};
///
/// let counter = Arc::new(CountingListener::new());
/// let mut trie = LanaiTrie::with_config(LanaiTrieConfig::new().with_listener(counter.clone()));
/// trie.add_word("kona").unwrap();
/// trie.destroy();
///
/// assert_eq!(counter.outstanding(), 0);
/// assert!(counter.allocations() > 0);
/// ```
#[derive(Debug, Default)]
pub struct CountingListener {
    allocations: AtomicUsize,
    deallocations: AtomicUsize,
}

impl CountingListener {
    /// Creates a listener with both counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocation events seen so far.
    pub fn allocations(&self) -> usize {
        self.allocations.load(Ordering::SeqCst)
    }

    /// Number of deallocation events seen so far.
    pub fn deallocations(&self) -> usize {
        self.deallocations.load(Ordering::SeqCst)
    }

    /// Allocations not yet matched by a deallocation.
    pub fn outstanding(&self) -> usize {
        self.allocations().saturating_sub(self.deallocations())
    }
}

impl AllocationListener for CountingListener {
    fn on_allocate(&self, _kind: AllocationKind) {
        self.allocations.fetch_add(1, Ordering::SeqCst);
    }

    fn on_deallocate(&self, _kind: AllocationKind) {
        self.deallocations.fetch_add(1, Ordering::SeqCst);
    }
}

/// Listener that emits a `tracing` event at trace level per notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingListener;

impl AllocationListener for TracingListener {
    fn on_allocate(&self, kind: AllocationKind) {
        tracing::trace!(?kind, "trie allocation");
    }

    fn on_deallocate(&self, kind: AllocationKind) {
        tracing::trace!(?kind, "trie deallocation");
    }
}

/// Book-keeping shared by every trie operation that allocates or releases.
///
/// Tracks node and word counts, enforces the optional node budget, and
/// forwards events to the configured listener.
pub(crate) struct Ledger {
    listener: Option<SharedAllocationListener>,
    node_limit: Option<usize>,
    nodes: usize,
    words: usize,
}

impl Ledger {
    pub(crate) fn new(listener: Option<SharedAllocationListener>, node_limit: Option<usize>) -> Self {
        Self {
            listener,
            node_limit,
            nodes: 0,
            words: 0,
        }
    }

    /// Whether the node budget allows one more node.
    pub(crate) fn has_node_budget(&self) -> bool {
        self.node_limit.map_or(true, |limit| self.nodes < limit)
    }

    pub(crate) fn allocated(&mut self, kind: AllocationKind) {
        match kind {
            AllocationKind::Node => self.nodes += 1,
            AllocationKind::Word => self.words += 1,
            AllocationKind::Trie => {}
        }
        if let Some(listener) = &self.listener {
            listener.on_allocate(kind);
        }
    }

    pub(crate) fn released(&mut self, kind: AllocationKind) {
        match kind {
            AllocationKind::Node => self.nodes = self.nodes.saturating_sub(1),
            AllocationKind::Word => self.words = self.words.saturating_sub(1),
            AllocationKind::Trie => {}
        }
        if let Some(listener) = &self.listener {
            listener.on_deallocate(kind);
        }
    }

    pub(crate) fn nodes(&self) -> usize {
        self.nodes
    }

    pub(crate) fn words(&self) -> usize {
        self.words
    }

    pub(crate) fn has_listener(&self) -> bool {
        self.listener.is_some()
    }
}

impl fmt::Debug for Ledger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ledger")
            .field("listener", &self.listener.is_some())
            .field("node_limit", &self.node_limit)
            .field("nodes", &self.nodes)
            .field("words", &self.words)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_counting_listener_balances() {
        let counter = CountingListener::new();
        counter.on_allocate(AllocationKind::Node);
        counter.on_allocate(AllocationKind::Word);
        assert_eq!(counter.outstanding(), 2);

        counter.on_deallocate(AllocationKind::Word);
        counter.on_deallocate(AllocationKind::Node);
        assert_eq!(counter.allocations(), 2);
        assert_eq!(counter.deallocations(), 2);
        assert_eq!(counter.outstanding(), 0);
    }

    #[test]
    fn test_closure_listener_receives_events() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let listener = move |event: AllocationEvent| sink.lock().unwrap().push(event);

        listener.on_allocate(AllocationKind::Trie);
        listener.on_deallocate(AllocationKind::Trie);

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                AllocationEvent::Allocate(AllocationKind::Trie),
                AllocationEvent::Deallocate(AllocationKind::Trie),
            ]
        );
    }

    #[test]
    fn test_ledger_enforces_node_budget() {
        let mut ledger = Ledger::new(None, Some(1));
        assert!(ledger.has_node_budget());

        ledger.allocated(AllocationKind::Node);
        assert!(!ledger.has_node_budget());
        assert_eq!(ledger.nodes(), 1);

        ledger.released(AllocationKind::Node);
        assert!(ledger.has_node_budget());
    }
}
