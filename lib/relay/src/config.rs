//! Environment configuration for the relay.
//!
//! Loaded via the `config` crate from environment variables with a `__`
//! separator, e.g. `DIALOGUE__URL`, `DIALOGUE__WORKSPACE_ID`,
//! `RETRIEVAL__COLLECTION_ID`.

use copper_courier_core::{ServiceCredentials, WorkspaceId};
use copper_courier_discovery::QueryScope;
use serde::Deserialize;

/// Relay configuration composed from the two service configs.
#[derive(Debug, Deserialize)]
pub struct RelayConfig {
    /// Dialogue engine connection settings.
    pub dialogue: DialogueConfig,

    /// Retrieval engine connection and scoping settings.
    pub retrieval: RetrievalConfig,
}

/// Dialogue engine settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueConfig {
    /// Base URL of the dialogue service.
    pub url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Candidate workspace id to try first. When absent (or rejected by the
    /// service), the first listed workspace is adopted instead.
    #[serde(default)]
    pub workspace_id: Option<String>,
}

impl DialogueConfig {
    /// Returns the credentials for the dialogue service.
    #[must_use]
    pub fn credentials(&self) -> ServiceCredentials {
        ServiceCredentials::basic(&self.username, &self.password)
    }

    /// Returns the configured candidate workspace id, if any.
    #[must_use]
    pub fn workspace_candidate(&self) -> Option<WorkspaceId> {
        self.workspace_id.as_deref().map(WorkspaceId::from)
    }
}

/// Retrieval engine settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RetrievalConfig {
    /// Base URL of the retrieval service.
    pub url: String,
    /// Basic-auth username.
    pub username: String,
    /// Basic-auth password.
    pub password: String,
    /// Environment to query.
    pub environment_id: String,
    /// Collection to query.
    pub collection_id: String,
    /// Ingestion configuration id.
    pub configuration_id: String,
}

impl RetrievalConfig {
    /// Returns the credentials for the retrieval service.
    #[must_use]
    pub fn credentials(&self) -> ServiceCredentials {
        ServiceCredentials::basic(&self.username, &self.password)
    }

    /// Returns the immutable query scope built from the configured ids.
    #[must_use]
    pub fn scope(&self) -> QueryScope {
        QueryScope::new(
            self.environment_id.as_str(),
            self.collection_id.as_str(),
            self.configuration_id.as_str(),
        )
    }
}

impl RelayConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required configuration is missing or invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use copper_courier_core::{CollectionId, ConfigurationId, EnvironmentId};

    fn load(toml: &str) -> RelayConfig {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .expect("build config")
            .try_deserialize()
            .expect("deserialize config")
    }

    const FULL: &str = r#"
        [dialogue]
        url = "https://dialogue.example.com/api"
        username = "dlg-user"
        password = "dlg-pass"
        workspace_id = "ws-1"

        [retrieval]
        url = "https://retrieval.example.com/api"
        username = "ret-user"
        password = "ret-pass"
        environment_id = "env-1"
        collection_id = "coll-1"
        configuration_id = "conf-1"
    "#;

    #[test]
    fn full_config_deserializes() {
        let config = load(FULL);

        assert_eq!(config.dialogue.url, "https://dialogue.example.com/api");
        assert_eq!(
            config.dialogue.workspace_candidate(),
            Some(WorkspaceId::new("ws-1"))
        );
        assert_eq!(config.retrieval.credentials().username, "ret-user");
    }

    #[test]
    fn workspace_id_is_optional() {
        let toml = FULL.replace("workspace_id = \"ws-1\"\n", "");
        let config = load(&toml);
        assert!(config.dialogue.workspace_candidate().is_none());
    }

    #[test]
    fn retrieval_scope_uses_configured_ids() {
        let scope = load(FULL).retrieval.scope();

        assert_eq!(scope.environment_id, EnvironmentId::new("env-1"));
        assert_eq!(scope.collection_id, CollectionId::new("coll-1"));
        assert_eq!(scope.configuration_id, ConfigurationId::new("conf-1"));
    }
}
