//! Sharing one [`Client`] between call sites.
//!
//! A [`ClientProvider`] owns at most one client. Keep a provider where the
//! application is wired together and hand out the `Arc<Client>` it returns;
//! [`provide_client`] is the same thing backed by one process-wide provider.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::debug;

use crate::{Client, ClientConfig, Result};

static SHARED: ClientProvider = ClientProvider::new();

/// Lazily constructed, mutex guarded client slot.
#[derive(Debug, Default)]
pub struct ClientProvider {
    slot: Mutex<Option<Arc<Client>>>,
}

impl ClientProvider {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Returns the stored client, building it from `config` on first use.
    ///
    /// Once a client exists `config` is ignored.
    pub fn provide(&self, config: ClientConfig) -> Result<Arc<Client>> {
        self.provide_with(|| Client::from_config(config))
    }

    /// Returns the stored client, building it with `build` on first use.
    ///
    /// A failing `build` leaves the slot empty.
    pub fn provide_with<F>(&self, build: F) -> Result<Arc<Client>>
    where
        F: FnOnce() -> Result<Client>,
    {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = slot.as_ref() {
            return Ok(Arc::clone(client));
        }

        let client = Arc::new(build()?);
        debug!(config = ?client.config(), "constructed shared stockx client");
        *slot = Some(Arc::clone(&client));
        Ok(client)
    }

    /// The stored client, if one has been built.
    pub fn get(&self) -> Option<Arc<Client>> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

/// Returns the process-wide client, creating it on the first call.
///
/// Later calls return the same instance regardless of their arguments.
pub fn provide_client(currency: &str, locale: &str, vat_registered: bool) -> Result<Arc<Client>> {
    SHARED.provide(ClientConfig::new(currency, locale, vat_registered))
}
