//! In-memory rate settings provider
//!
//! Serves whatever settings were last stored; `current` reads fresh on
//! every call, matching the no-rate-history contract.

use std::sync::RwLock;

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError};
use domain_billing::{RateProvider, RateSettings};

/// Rate settings backed by an in-process cell
pub struct InMemoryRateProvider {
    settings: RwLock<RateSettings>,
}

impl InMemoryRateProvider {
    /// Creates a provider with the given settings
    pub fn new(settings: RateSettings) -> Self {
        Self {
            settings: RwLock::new(settings),
        }
    }

    /// Replaces the stored settings
    pub fn set(&self, settings: RateSettings) {
        if let Ok(mut current) = self.settings.write() {
            *current = settings;
        }
    }
}

impl Default for InMemoryRateProvider {
    fn default() -> Self {
        Self::new(RateSettings::default())
    }
}

impl DomainPort for InMemoryRateProvider {}

#[async_trait]
impl RateProvider for InMemoryRateProvider {
    async fn current(&self) -> Result<RateSettings, PortError> {
        let settings = self
            .settings
            .read()
            .map_err(|_| PortError::internal("rate settings lock poisoned"))?;
        Ok(settings.clone())
    }
}
