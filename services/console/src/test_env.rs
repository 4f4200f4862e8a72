//! Scoped environment overrides for `#[serial]` tests.
use std::collections::HashMap;

/// Restores every touched variable on drop.
#[derive(Default)]
pub(crate) struct ScopedEnv {
    saved: HashMap<&'static str, Option<String>>,
}

impl ScopedEnv {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(mut self, key: &'static str, value: &str) -> Self {
        self.remember(key);
        // SAFETY: callers are `#[serial]`, so no other test thread reads the
        // environment concurrently.
        unsafe { std::env::set_var(key, value) };
        self
    }

    pub(crate) fn unset(mut self, key: &'static str) -> Self {
        self.remember(key);
        // SAFETY: see `set`.
        unsafe { std::env::remove_var(key) };
        self
    }

    fn remember(&mut self, key: &'static str) {
        self.saved
            .entry(key)
            .or_insert_with(|| std::env::var(key).ok());
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (key, value) in self.saved.drain() {
            // SAFETY: see `set`.
            unsafe {
                match value {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}
