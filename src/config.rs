//! Support for library configuration options

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use once_cell::sync::Lazy;

/// File used by [`Cache::cache_file`](crate::cache::Cache::cache_file) when no explicit path is given.
/// Feel free to override it when initing this library.
pub static CACHE_FILE_NAME: Lazy<Arc<Mutex<PathBuf>>> = Lazy::new(|| Arc::new(Mutex::new(PathBuf::from("calendar_events.json"))));

/// Whether a newly created [`Cache`](crate::cache::Cache) writes itself to disk after every change.
/// Feel free to override it when initing this library.
pub static AUTOSAVE: Lazy<Arc<Mutex<bool>>> = Lazy::new(|| Arc::new(Mutex::new(true)));

/// Read a configuration value, even if a previous holder of the lock panicked
pub(crate) fn read<T: Clone>(value: &Mutex<T>) -> T {
    match value.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}
