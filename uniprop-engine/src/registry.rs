//! Process-wide provider association
//!
//! Exactly one provider may be associated with the process at a time; the
//! last writer wins and there is no provider stacking. The slot holds an
//! `Arc`, so a provider stays alive for as long as any caller still holds a
//! handle obtained from [`provider`], even across a concurrent swap. The
//! source design assumed install-before-first-use with no synchronization;
//! here the slot is guarded by a read-mostly lock so concurrent
//! install/removal alongside lookups is defined behavior.

use parking_lot::RwLock;
use std::sync::Arc;
use uniprop_core::TextProvider;

static PROVIDER: RwLock<Option<Arc<dyn TextProvider>>> = RwLock::new(None);

/// Associate `provider` with the process, replacing any previous one.
///
/// Pass `None` to uninstall; the installer is expected to do that before
/// teardown.
pub fn set_provider(provider: Option<Arc<dyn TextProvider>>) {
    let mut slot = PROVIDER.write();
    match (&*slot, &provider) {
        (Some(_), Some(_)) => log::debug!("replacing character-property provider"),
        (None, Some(_)) => log::debug!("installing character-property provider"),
        (Some(_), None) => log::debug!("uninstalling character-property provider"),
        (None, None) => {}
    }
    *slot = provider;
}

/// Currently associated provider, if any.
///
/// The returned handle extends the provider's lifetime past any concurrent
/// [`set_provider`] call.
pub fn provider() -> Option<Arc<dyn TextProvider>> {
    PROVIDER.read().clone()
}
