//! Process-wide engine settings
//!
//! Simple last-write-wins accessors with no validation. The property facade
//! never reads any of these; they are configuration storage for the
//! embedding engine (script stack sizing, diagnostics routing, locale).
//! The source design left them unsynchronized; here the whole block sits
//! behind one read-mostly lock so setters and getters can race safely.

use parking_lot::RwLock;
use std::sync::Arc;

/// Default script stack size in bytes.
///
/// Approximate stack size, not the capacity of any backing array.
pub const DEFAULT_STACK_SIZE: usize = 128 * 1024;

/// Default heap watermark in bytes.
pub const DEFAULT_HEAP_WATERMARK: usize = 1024 * 1024;

/// Parallel ordered sequences describing one captured callstack.
///
/// Index `i` of every field refers to the same frame.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CallstackCapture {
    /// Frame names
    pub names: Vec<String>,
    /// Rendered argument text per frame
    pub args: Vec<String>,
    /// Line numbers per frame
    pub lines: Vec<i32>,
    /// Source URLs per frame
    pub urls: Vec<String>,
}

/// Callback receiving captured callstacks.
pub type CallstackCallback = Arc<dyn Fn(&CallstackCapture) + Send + Sync>;

/// Callback receiving a diagnostic message and whether the condition should
/// be treated as fatal.
pub type LogCallback = Arc<dyn Fn(&str, bool) + Send + Sync>;

struct Settings {
    stack_size: usize,
    heap_watermark: usize,
    print_exceptions: bool,
    default_locale: Option<String>,
    callstack_callback: Option<CallstackCallback>,
    log_callback: Option<LogCallback>,
}

impl Settings {
    const fn new() -> Self {
        Self {
            stack_size: DEFAULT_STACK_SIZE,
            heap_watermark: DEFAULT_HEAP_WATERMARK,
            print_exceptions: false,
            default_locale: None,
            callstack_callback: None,
            log_callback: None,
        }
    }
}

static SETTINGS: RwLock<Settings> = RwLock::new(Settings::new());

/// Set the approximate script stack size in bytes.
pub fn set_stack_size(bytes: usize) {
    SETTINGS.write().stack_size = bytes;
}

/// Approximate script stack size in bytes.
pub fn stack_size() -> usize {
    SETTINGS.read().stack_size
}

/// Set the heap watermark in bytes.
pub fn set_heap_watermark(bytes: usize) {
    SETTINGS.write().heap_watermark = bytes;
}

/// Heap watermark in bytes.
pub fn heap_watermark() -> usize {
    SETTINGS.read().heap_watermark
}

/// Toggle exception printing.
pub fn set_print_exceptions(active: bool) {
    SETTINGS.write().print_exceptions = active;
}

/// Whether exception printing is enabled.
pub fn print_exceptions_enabled() -> bool {
    SETTINGS.read().print_exceptions
}

/// Set the default locale, or `None` to unset it.
pub fn set_default_locale(locale: Option<String>) {
    SETTINGS.write().default_locale = locale;
}

/// Default locale, if one has been set.
pub fn default_locale() -> Option<String> {
    SETTINGS.read().default_locale.clone()
}

/// Install the callstack-capture callback, or `None` to remove it.
pub fn set_callstack_callback(callback: Option<CallstackCallback>) {
    SETTINGS.write().callstack_callback = callback;
}

/// Currently installed callstack-capture callback, if any.
pub fn callstack_callback() -> Option<CallstackCallback> {
    SETTINGS.read().callstack_callback.clone()
}

/// Install the diagnostic log callback, or `None` to remove it.
pub fn set_log_callback(callback: Option<LogCallback>) {
    SETTINGS.write().log_callback = callback;
}

/// Currently installed diagnostic log callback, if any.
pub fn log_callback() -> Option<LogCallback> {
    SETTINGS.read().log_callback.clone()
}

/// Platform-specific shutdown cleanup hook.
///
/// Reserved for the embedding engine; nothing to release yet.
pub fn finalize() {}
