//! Identify popup surfaces.
use std::fmt;
use std::sync::atomic::{self, AtomicU64};

/// The id of a shown popup.
///
/// Every time a menu level is opened it gets a fresh [`Id`]; re-placing an
/// open popup keeps its id so a host can move the surface instead of
/// recreating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id(u64);

static COUNT: AtomicU64 = AtomicU64::new(1);

impl Id {
    /// Creates a new unique popup [`Id`].
    pub fn unique() -> Id {
        Id(COUNT.fetch_add(1, atomic::Ordering::Relaxed))
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
