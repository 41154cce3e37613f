use serde::Deserialize;
use ustr::Ustr;

/// Environment variables consumed by [`BusinessConfig::from_env`] share this prefix.
pub const ENV_PREFIX: &str = "ROSTER_";

const DEFAULT_API_BASE_URL: &str = "https://reqres.in/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid environment configuration: {0}")]
    Env(#[from] serde_env::Error),
    #[error("api url must not be empty")]
    EmptyApiUrl,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    /// Applied to every request on native targets.
    pub request_timeout_secs: u64,
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    api_url: Option<String>,
    request_timeout_secs: Option<u64>,
}

impl BusinessConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: base_url.into(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Reads `ROSTER_API_URL` and `ROSTER_REQUEST_TIMEOUT_SECS`, falling back
    /// to defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    pub fn from_vars<I, K, V>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let scoped: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|field| (field.to_owned(), value.as_ref().to_owned()))
            })
            .collect();

        let raw: RawConfig = serde_env::from_iter(scoped)?;
        let defaults = Self::default();

        let api_base_url = match raw.api_url {
            Some(url) if url.trim().is_empty() => return Err(ConfigError::EmptyApiUrl),
            Some(url) => url,
            None => defaults.api_base_url,
        };

        Ok(Self {
            api_base_url,
            request_timeout_secs: raw
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
        })
    }

    /// Base address with any trailing slash removed, so endpoint paths can be
    /// appended verbatim.
    pub fn api_url(&self) -> Ustr {
        Ustr::from(self.api_base_url.trim().trim_end_matches('/'))
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_reqres() {
        let config = BusinessConfig::default();
        assert_eq!(config.api_url(), Ustr::from("https://reqres.in/api"));
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn test_api_url_strips_trailing_slash() {
        let config = BusinessConfig::new("http://localhost:8080/api/");
        assert_eq!(config.api_url(), Ustr::from("http://localhost:8080/api"));
    }

    #[test]
    fn test_from_vars_reads_prefixed_keys() {
        let config = BusinessConfig::from_vars(vec![
            ("ROSTER_API_URL", "http://127.0.0.1:9000"),
            ("ROSTER_REQUEST_TIMEOUT_SECS", "3"),
            ("API_URL", "http://ignored"),
        ])
        .expect("config should deserialize");

        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.request_timeout_secs, 3);
    }

    #[test]
    fn test_from_vars_falls_back_to_defaults() {
        let config = BusinessConfig::from_vars(Vec::<(String, String)>::new())
            .expect("empty environment is valid");
        assert_eq!(config, BusinessConfig::default());
    }

    #[test]
    fn test_from_vars_rejects_blank_url() {
        let err = BusinessConfig::from_vars(vec![("ROSTER_API_URL", "   ")]).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyApiUrl));
    }
}
