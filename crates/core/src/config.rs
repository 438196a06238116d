//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process
//! startup and then passed into services. The intent is to avoid reading
//! process-wide environment variables during request handling, which can lead
//! to inconsistent behaviour in multi-threaded runtimes and test harnesses.

use crate::{RelayError, RelayResult};

/// Relay configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    openmic_api_base: String,
    openmic_api_key: String,
    public_base_url: String,
    listen_addr: String,
}

impl RelayConfig {
    /// Create a new `RelayConfig`.
    ///
    /// Base URLs are stored without a trailing slash so that joined paths
    /// come out exact. The vendor API key may be empty; the vendor will
    /// reject unauthenticated calls itself and the relay forwards that
    /// outcome.
    pub fn new(
        openmic_api_base: impl Into<String>,
        openmic_api_key: impl Into<String>,
        public_base_url: impl Into<String>,
        listen_addr: impl Into<String>,
    ) -> RelayResult<Self> {
        let openmic_api_base = trim_base_url(openmic_api_base.into());
        let public_base_url = trim_base_url(public_base_url.into());
        let listen_addr = listen_addr.into();

        if openmic_api_base.is_empty() {
            return Err(RelayError::InvalidConfig(
                "openmic_api_base cannot be empty".into(),
            ));
        }
        if public_base_url.is_empty() {
            return Err(RelayError::InvalidConfig(
                "public_base_url cannot be empty".into(),
            ));
        }
        if listen_addr.trim().is_empty() {
            return Err(RelayError::InvalidConfig(
                "listen_addr cannot be empty".into(),
            ));
        }

        Ok(Self {
            openmic_api_base,
            openmic_api_key: openmic_api_key.into(),
            public_base_url,
            listen_addr,
        })
    }

    pub fn openmic_api_base(&self) -> &str {
        &self.openmic_api_base
    }

    pub fn openmic_api_key(&self) -> &str {
        &self.openmic_api_key
    }

    pub fn public_base_url(&self) -> &str {
        &self.public_base_url
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }
}

fn trim_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}
