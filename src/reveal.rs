use std::collections::HashMap;

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Attribute carrying the [`RevealId`] on observed elements.
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

/// Observer settings: the fraction of an element that must be visible, and
/// the margin applied to the viewport (negative bottom margin lifts the
/// trigger line above the bottom edge).
#[derive(Debug, Clone, PartialEq)]
pub struct RevealOptions {
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            root_margin: DEFAULT_ROOT_MARGIN.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevealId(usize);

impl RevealId {
    pub fn as_attr(&self) -> String {
        self.0.to_string()
    }

    pub fn from_attr(value: &str) -> Option<Self> {
        value.parse().ok().map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Revealed,
}

#[derive(Debug)]
pub enum Transition<H> {
    /// First intersection: apply the reveal through the handle and stop observing.
    Revealed(H),
    Unchanged,
}

#[derive(Debug)]
struct Entry<H> {
    state: RevealState,
    handle: H,
}

/// Page-scoped bookkeeping for scroll reveals.
///
/// `H` is whatever the caller uses to apply a reveal (a signal setter in the
/// browser). State only ever moves `Hidden -> Revealed`.
#[derive(Debug)]
pub struct RevealRegistry<H> {
    next_id: usize,
    entries: HashMap<RevealId, Entry<H>>,
    torn_down: bool,
}

impl<H> Default for RevealRegistry<H> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: HashMap::new(),
            torn_down: false,
        }
    }
}

impl<H: Clone> RevealRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, handle: H) -> RevealId {
        let id = RevealId(self.next_id);
        self.next_id += 1;
        self.entries.insert(
            id,
            Entry {
                state: RevealState::Hidden,
                handle,
            },
        );
        id
    }

    pub fn on_intersection(&mut self, id: RevealId, is_intersecting: bool) -> Transition<H> {
        if self.torn_down || !is_intersecting {
            return Transition::Unchanged;
        }
        match self.entries.get_mut(&id) {
            Some(entry) if entry.state == RevealState::Hidden => {
                entry.state = RevealState::Revealed;
                Transition::Revealed(entry.handle.clone())
            }
            _ => Transition::Unchanged,
        }
    }

    /// Reveals without waiting for an intersection, used when the browser
    /// has no observer to offer.
    pub fn force_reveal(&mut self, id: RevealId) -> Transition<H> {
        self.on_intersection(id, true)
    }

    pub fn state(&self, id: RevealId) -> Option<RevealState> {
        self.entries.get(&id).map(|e| e.state)
    }

    pub fn is_revealed(&self, id: RevealId) -> bool {
        self.state(id) == Some(RevealState::Revealed)
    }

    /// Number of elements still waiting for their first intersection.
    pub fn pending(&self) -> usize {
        self.entries
            .values()
            .filter(|e| e.state == RevealState::Hidden)
            .count()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Stops all observation. Revealed states are kept; pending ones will
    /// never be revealed.
    pub fn teardown(&mut self) {
        self.torn_down = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = RevealOptions::default();
        assert_eq!(opts.threshold, 0.1);
        assert_eq!(opts.root_margin, "0px 0px -50px 0px");
    }

    #[test]
    fn test_register_unique_ids() {
        let mut registry = RevealRegistry::new();
        let a = registry.register("a");
        let b = registry.register("b");
        assert_ne!(a, b);
        assert_eq!(registry.pending(), 2);
        assert_eq!(registry.state(a), Some(RevealState::Hidden));
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut registry = RevealRegistry::new();
        let id = registry.register("hero");

        assert!(matches!(
            registry.on_intersection(id, true),
            Transition::Revealed("hero")
        ));
        assert!(matches!(
            registry.on_intersection(id, true),
            Transition::Unchanged
        ));
        assert!(registry.is_revealed(id));
        assert_eq!(registry.pending(), 0);
    }

    #[test]
    fn test_reveal_is_monotonic() {
        let mut registry = RevealRegistry::new();
        let id = registry.register(());
        registry.on_intersection(id, true);

        // leaving the viewport again never hides it
        assert!(matches!(
            registry.on_intersection(id, false),
            Transition::Unchanged
        ));
        assert!(registry.is_revealed(id));
    }

    #[test]
    fn test_not_intersecting_does_not_reveal() {
        let mut registry = RevealRegistry::new();
        let id = registry.register(());
        assert!(matches!(
            registry.on_intersection(id, false),
            Transition::Unchanged
        ));
        assert_eq!(registry.state(id), Some(RevealState::Hidden));
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut registry = RevealRegistry::<()>::new();
        let stray = RevealId::from_attr("42").unwrap();
        assert!(matches!(
            registry.on_intersection(stray, true),
            Transition::Unchanged
        ));
        assert_eq!(registry.state(stray), None);
    }

    #[test]
    fn test_teardown_ignores_late_callbacks() {
        let mut registry = RevealRegistry::new();
        let shown = registry.register(1);
        let pending = registry.register(2);
        registry.on_intersection(shown, true);
        registry.teardown();

        assert!(registry.is_torn_down());
        assert!(matches!(
            registry.on_intersection(pending, true),
            Transition::Unchanged
        ));
        assert!(registry.is_revealed(shown));
        assert!(!registry.is_revealed(pending));
    }

    #[test]
    fn test_force_reveal() {
        let mut registry = RevealRegistry::new();
        let id = registry.register(7);
        assert!(matches!(registry.force_reveal(id), Transition::Revealed(7)));
        assert!(matches!(registry.force_reveal(id), Transition::Unchanged));
    }

    #[test]
    fn test_id_attr_round_trip() {
        let mut registry = RevealRegistry::new();
        registry.register(());
        let id = registry.register(());
        assert_eq!(RevealId::from_attr(&id.as_attr()), Some(id));
        assert_eq!(RevealId::from_attr("nope"), None);
    }
}
