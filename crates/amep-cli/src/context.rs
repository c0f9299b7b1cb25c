//! Shared command context: configuration plus a ready service client.

use std::time::Duration;

use amep_client::ServiceClient;
use amep_config::AmepConfig;
use anyhow::Context as _;

/// Everything a network command needs, built once in `run()`.
pub struct AppContext {
    pub config: AmepConfig,
    pub client: ServiceClient,
    pub teacher_id: String,
}

impl AppContext {
    /// Build the context from loaded configuration.
    ///
    /// Fails when the `[service]` section is incomplete, since every command
    /// reaching this point talks to the backend.
    pub fn init(config: AmepConfig) -> anyhow::Result<Self> {
        let service = config.require_service().context(
            "service is not configured; run 'amep init' or set AMEP_SERVICE__* variables",
        )?;
        let client = ServiceClient::with_timeout(
            &service.base_url,
            Duration::from_secs(service.timeout_secs),
        );
        let teacher_id = service.teacher_id.clone();
        tracing::debug!(base_url = %service.base_url, teacher = %teacher_id, "service client ready");

        Ok(Self {
            client,
            teacher_id,
            config,
        })
    }

    /// The configured default classroom, if any.
    #[must_use]
    pub fn default_classroom(&self) -> Option<&str> {
        self.config.general.default_classroom()
    }
}
