//! Document storage configuration

use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Which document store backend to use
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Supabase,
    Local,
}

/// Document storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Backend selection
    #[serde(default)]
    pub backend: StorageBackend,

    /// Supabase project URL
    pub supabase_url: Option<String>,

    /// Supabase service-role key
    pub supabase_service_key: Option<String>,

    /// Storage bucket holding requirements documents
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Directory for the local-filesystem backend
    #[serde(default = "default_local_path")]
    pub local_path: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.bucket.trim().is_empty() {
            return Err(ValidationError::EmptyBucketName);
        }

        if self.backend == StorageBackend::Supabase {
            let url = self
                .supabase_url
                .as_deref()
                .filter(|u| !u.is_empty())
                .ok_or(ValidationError::MissingRequired("SUPABASE_URL"))?;
            if self
                .supabase_service_key
                .as_deref()
                .map_or(true, str::is_empty)
            {
                return Err(ValidationError::MissingRequired("SUPABASE_SERVICE_KEY"));
            }
            if *environment == Environment::Production && !url.starts_with("https://") {
                return Err(ValidationError::SupabaseUrlMustBeHttps);
            }
        }

        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            supabase_url: None,
            supabase_service_key: None,
            bucket: default_bucket(),
            local_path: default_local_path(),
        }
    }
}

fn default_bucket() -> String {
    "project-requirements-markdowns".to_string()
}

fn default_local_path() -> String {
    "./data/documents".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::Supabase);
        assert_eq!(config.bucket, "project-requirements-markdowns");
    }

    #[test]
    fn test_supabase_requires_url_and_key() {
        let config = StorageConfig::default();
        assert!(config.validate(&Environment::Development).is_err());

        let config = StorageConfig {
            supabase_url: Some("https://xyz.supabase.co".to_string()),
            supabase_service_key: Some("service-key".to_string()),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_production_requires_https() {
        let config = StorageConfig {
            supabase_url: Some("http://xyz.supabase.co".to_string()),
            supabase_service_key: Some("service-key".to_string()),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
        assert!(config.validate(&Environment::Production).is_err());
    }

    #[test]
    fn test_local_backend_needs_no_credentials() {
        let config = StorageConfig {
            backend: StorageBackend::Local,
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn test_empty_bucket_rejected() {
        let config = StorageConfig {
            backend: StorageBackend::Local,
            bucket: "  ".to_string(),
            ..Default::default()
        };
        assert!(config.validate(&Environment::Development).is_err());
    }
}
