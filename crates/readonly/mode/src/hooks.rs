//! Alteration hooks for the form lists
//!
//! Other components adjust the allow and view-only lists by registering a
//! [`FormListAlter`] with an [`AlterRegistry`]. Hooks run in registration
//! order every time the lists are built, each one seeing the result of
//! the hooks before it.

use crate::form::FormSet;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Hook that adds to or removes from a form list
pub trait FormListAlter: Send + Sync + fmt::Debug {
    /// Identifier of the hook, used in logs
    fn id(&self) -> &str;

    /// Mutate the list in place
    fn alter(&self, forms: &mut FormSet);
}

/// Closure-backed alteration hook
pub struct FnAlter<F> {
    id: String,
    alter: F,
}

impl<F> FnAlter<F>
where
    F: Fn(&mut FormSet) + Send + Sync,
{
    /// Wrap a closure as a named hook
    pub fn new(id: impl Into<String>, alter: F) -> Self {
        Self {
            id: id.into(),
            alter,
        }
    }
}

impl<F> fmt::Debug for FnAlter<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnAlter").field("id", &self.id).finish()
    }
}

impl<F> FormListAlter for FnAlter<F>
where
    F: Fn(&mut FormSet) + Send + Sync,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn alter(&self, forms: &mut FormSet) {
        (self.alter)(forms)
    }
}

/// Ordered registration of alteration hooks
///
/// Allow-list hooks and view-only hooks are kept apart: a hook only ever
/// sees the list it was registered for. Registering the same hook twice
/// runs it twice.
#[derive(Debug, Clone, Default)]
pub struct AlterRegistry {
    allowed: Vec<Arc<dyn FormListAlter>>,
    viewonly: Vec<Arc<dyn FormListAlter>>,
}

impl AlterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook for the allow list
    pub fn register_allowed(&mut self, hook: impl FormListAlter + 'static) {
        self.allowed.push(Arc::new(hook));
    }

    /// Register a hook for the view-only list
    pub fn register_viewonly(&mut self, hook: impl FormListAlter + 'static) {
        self.viewonly.push(Arc::new(hook));
    }

    /// Register an already shared hook for the allow list
    pub fn register_allowed_shared(&mut self, hook: Arc<dyn FormListAlter>) {
        self.allowed.push(hook);
    }

    /// Register an already shared hook for the view-only list
    pub fn register_viewonly_shared(&mut self, hook: Arc<dyn FormListAlter>) {
        self.viewonly.push(hook);
    }

    /// Builder form of [`register_allowed`](Self::register_allowed)
    pub fn with_allowed(mut self, hook: impl FormListAlter + 'static) -> Self {
        self.register_allowed(hook);
        self
    }

    /// Builder form of [`register_viewonly`](Self::register_viewonly)
    pub fn with_viewonly(mut self, hook: impl FormListAlter + 'static) -> Self {
        self.register_viewonly(hook);
        self
    }

    /// Hooks for the allow list, in registration order
    pub fn allowed_hooks(&self) -> &[Arc<dyn FormListAlter>] {
        &self.allowed
    }

    /// Hooks for the view-only list, in registration order
    pub fn viewonly_hooks(&self) -> &[Arc<dyn FormListAlter>] {
        &self.viewonly
    }

    /// Allow-list hook ids, in registration order
    pub fn allowed_hook_ids(&self) -> Vec<String> {
        self.allowed.iter().map(|h| h.id().to_string()).collect()
    }

    /// View-only hook ids, in registration order
    pub fn viewonly_hook_ids(&self) -> Vec<String> {
        self.viewonly.iter().map(|h| h.id().to_string()).collect()
    }

    /// Whether no hooks are registered at all
    pub fn is_empty(&self) -> bool {
        self.allowed.is_empty() && self.viewonly.is_empty()
    }
}

/// Run hooks over a set, one after another
pub fn apply(hooks: &[Arc<dyn FormListAlter>], forms: &mut FormSet) {
    for hook in hooks {
        let before = forms.len();
        hook.alter(forms);
        trace!(
            hook = %hook.id(),
            before,
            after = forms.len(),
            "Applied form list hook"
        );
    }
}
