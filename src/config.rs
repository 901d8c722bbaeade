use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_DIRECTORY_API_BASE_URL: &str = "https://nlytical.theprimocys.com";
pub const DEFAULT_SITE_BASE_URL: &str = "https://nlyticalapp.com";
pub const DEFAULT_OG_IMAGE: &str =
    "https://nlyticalapp.com/wp-content/uploads/2025/02/Primocys_social_og_img.jpg";
pub const DEFAULT_UPDATE_SERVICE_PATH: &str = "/api/update-service";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub directory_api_base_url: String,
    pub site_base_url: String,
    pub default_og_image: String,
    pub update_service_path: String,
    pub http_timeout_secs: u64,
    /// Logs the raw directory response at debug level before it is mapped.
    pub log_response_payload: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 3000,
            directory_api_base_url: DEFAULT_DIRECTORY_API_BASE_URL.to_string(),
            site_base_url: DEFAULT_SITE_BASE_URL.to_string(),
            default_og_image: DEFAULT_OG_IMAGE.to_string(),
            update_service_path: DEFAULT_UPDATE_SERVICE_PATH.to_string(),
            http_timeout_secs: 30,
            log_response_payload: false,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| defaults.port.to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            directory_api_base_url: http_url_var(
                "DIRECTORY_API_BASE_URL",
                defaults.directory_api_base_url,
            )?,
            site_base_url: http_url_var("SITE_BASE_URL", defaults.site_base_url)?,
            default_og_image: http_url_var("DEFAULT_OG_IMAGE", defaults.default_og_image)?,
            update_service_path: std::env::var("UPDATE_SERVICE_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|path| {
                    if !path.starts_with('/') {
                        anyhow::bail!("UPDATE_SERVICE_PATH must start with /");
                    }
                    Ok(path)
                })
                .transpose()?
                .unwrap_or(defaults.update_service_path),
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(|secs| {
                    secs.trim()
                        .parse::<u64>()
                        .ok()
                        .filter(|s| *s > 0)
                        .ok_or_else(|| {
                            anyhow::anyhow!("HTTP_TIMEOUT_SECS must be a positive number")
                        })
                })
                .transpose()?
                .unwrap_or(defaults.http_timeout_secs),
            log_response_payload: std::env::var("LOG_RESPONSE_PAYLOAD")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.log_response_payload),
        };

        tracing::info!("Configuration loaded successfully");
        tracing::debug!("Directory API Base URL: {}", config.directory_api_base_url);
        tracing::debug!("Site Base URL: {}", config.site_base_url);
        tracing::debug!("Server Port: {}", config.port);
        if config.log_response_payload {
            tracing::info!("Directory response payload logging enabled");
        }

        Ok(config)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

/// Reads an optional URL variable, keeping `default` when unset or blank.
fn http_url_var(name: &str, default: String) -> anyhow::Result<String> {
    match std::env::var(name) {
        Ok(url) if !url.trim().is_empty() => {
            let url = url.trim().trim_end_matches('/').to_string();
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("{} must start with http:// or https://", name);
            }
            Ok(url)
        }
        _ => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_production_hosts() {
        let config = Config::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.site_base_url, "https://nlyticalapp.com");
        assert!(config.default_og_image.ends_with("Primocys_social_og_img.jpg"));
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
        assert!(!config.log_response_payload);
    }

    #[test]
    fn test_url_var_falls_back_when_unset() {
        let url = http_url_var("NLYTICAL_TEST_UNSET_URL_VAR", "https://x.test".to_string());
        assert_eq!(url.unwrap(), "https://x.test");
    }
}
