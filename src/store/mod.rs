// src/store/mod.rs

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};

/// Network credentials submitted through the setup form.
#[derive(Clone, PartialEq, Eq)]
pub struct WifiCredentials {
    pub ssid: String,
    pub password: String,
}

impl WifiCredentials {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }
}

// Keep the password out of logs.
impl fmt::Debug for WifiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WifiCredentials")
            .field("ssid", &self.ssid)
            .field("password", &"***")
            .finish()
    }
}

/// Shared, in-memory home for the last submitted credentials.
///
/// Cloning hands out another handle to the same slot. Nothing is persisted;
/// the device's connection logic picks the values up from here.
#[derive(Clone, Default)]
pub struct CredentialStore {
    inner: Arc<Mutex<Option<WifiCredentials>>>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<WifiCredentials>> {
        // A panic while holding the lock cannot leave a half-written Option.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Replace whatever was stored before.
    pub fn save(&self, credentials: WifiCredentials) {
        *self.slot() = Some(credentials);
    }

    pub fn current(&self) -> Option<WifiCredentials> {
        self.slot().clone()
    }

    /// Forget the stored credentials, returning them if there were any.
    pub fn clear(&self) -> Option<WifiCredentials> {
        self.slot().take()
    }

    pub fn saved_ssid(&self) -> Option<String> {
        self.slot().as_ref().map(|c| c.ssid.clone())
    }
}
