//! Runtime configuration.

/// Prefix for screen IDs when none is configured.
pub const DEFAULT_NAMESPACE: &str = "rootswitch";

/// What to do with a root change produced by a lifecycle task that started
/// before the task behind the newest committed root change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Commit every root change in arrival order. A slow task can overwrite a
    /// newer root.
    #[default]
    Preserve,
    /// Drop root changes whose generation is older than the newest committed
    /// one.
    DiscardStale,
}

/// Configuration for [`crate::Runtime`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Prefix for registered screen IDs (`<namespace>.Login`).
    pub namespace: String,
    /// Handling of out-of-order lifecycle results.
    pub stale_policy: StalePolicy,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self { namespace: DEFAULT_NAMESPACE.to_string(), stale_policy: StalePolicy::default() }
    }
}
