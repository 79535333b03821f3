//! Env isolation for path discovery tests.
//!
//! `RTHOST_SERVICING_ROOT` and `RTHOST_RUNTIME_DIR` are process-global, so
//! tests touching them hold [`ENV_LOCK`] and scope changes with [`EnvVarGuard`].

use std::env;
use std::ffi::OsString;
use std::sync::Mutex;

/// Held for the whole body of any test that reads or writes `RTHOST_*`.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Scoped change to one variable; the prior value (or absence) comes back on drop.
pub struct EnvVarGuard {
    key: &'static str,
    saved: Option<OsString>,
}

impl EnvVarGuard {
    pub fn set(key: &'static str, value: &str) -> Self {
        let guard = Self::capture(key);
        apply(key, Some(value.into()));
        guard
    }

    pub fn unset(key: &'static str) -> Self {
        let guard = Self::capture(key);
        apply(key, None);
        guard
    }

    fn capture(key: &'static str) -> Self {
        Self {
            key,
            saved: env::var_os(key),
        }
    }
}

impl Drop for EnvVarGuard {
    fn drop(&mut self) {
        apply(self.key, self.saved.take());
    }
}

// Callers hold ENV_LOCK, so no other test thread observes the write.
#[allow(unsafe_code)]
fn apply(key: &str, value: Option<OsString>) {
    match value {
        Some(value) => unsafe { env::set_var(key, value) },
        None => unsafe { env::remove_var(key) },
    }
}
