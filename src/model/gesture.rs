//! Interaction handlers attached to nodes.
//!
//! Handlers are transient: they never serialize, never take part in
//! equality, and copies of a node start without any.

use std::fmt;
use std::sync::Arc;

/// What an interaction handler responds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Tap { count: u32 },
    LongPress,
    Drag,
}

/// A gesture kind paired with the action to run when it is recognised.
#[derive(Clone)]
pub struct Gesture {
    kind: GestureKind,
    action: Arc<dyn Fn() + Send + Sync>,
}

impl Gesture {
    pub fn new(kind: GestureKind, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            kind,
            action: Arc::new(action),
        }
    }

    pub fn tap(count: u32, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self::new(GestureKind::Tap { count }, action)
    }

    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    pub fn trigger(&self) {
        (self.action)()
    }
}

impl fmt::Debug for Gesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Gesture").field("kind", &self.kind).finish_non_exhaustive()
    }
}

/// The handler list owned by a node.
#[derive(Debug, Default)]
pub struct Handlers(Vec<Gesture>);

impl Handlers {
    pub fn push(&mut self, gesture: Gesture) {
        self.0.push(gesture);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn as_slice(&self) -> &[Gesture] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Runs every handler registered for `kind`, in registration order.
    /// Returns how many ran.
    pub fn dispatch(&self, kind: GestureKind) -> usize {
        let mut fired = 0;
        for gesture in self.0.iter().filter(|g| g.kind == kind) {
            gesture.trigger();
            fired += 1;
        }
        fired
    }
}

impl Clone for Handlers {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl PartialEq for Handlers {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}
