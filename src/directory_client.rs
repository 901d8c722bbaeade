use crate::config::Config;
use crate::errors::AppError;
use crate::models::{ServiceDetailRequest, UpdateServiceRequest};
use serde_json::Value;

/// Client for the Nlytical directory REST API.
#[derive(Clone)]
pub struct DirectoryClient {
    client: reqwest::Client,
    base_url: String,
    update_service_path: String,
    log_response_payload: bool,
}

impl DirectoryClient {
    /// Creates a new `DirectoryClient` from the application config.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .build()
            .map_err(|e| {
                AppError::InternalError(format!("Failed to create directory client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.directory_api_base_url.trim_end_matches('/').to_string(),
            update_service_path: config.update_service_path.clone(),
            log_response_payload: config.log_response_payload,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches the raw service detail document for a decoded service id.
    ///
    /// # Returns
    ///
    /// * `Result<Value, AppError>` - The JSON body as returned by the directory.
    pub async fn get_service_detail(&self, service_id: &str) -> Result<Value, AppError> {
        let url = format!("{}/api/get-servicedetail", self.base_url);
        tracing::info!("Fetching service detail {} from directory: {}", service_id, url);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&ServiceDetailRequest { service_id })
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Directory request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Directory returned {}: {}",
                status, error_text
            )));
        }

        let data: Value = response.json().await.map_err(|e| {
            AppError::ExternalApiError(format!("Failed to parse directory response: {}", e))
        })?;

        if self.log_response_payload {
            tracing::debug!("Directory response for {}: {}", service_id, data);
        }

        Ok(data)
    }

    /// Marks a vendor's service as updated from the business dashboard.
    pub async fn update_service(&self, vendor_id: &str, service_id: &str) -> Result<(), AppError> {
        let url = format!("{}{}", self.base_url, self.update_service_path);
        tracing::info!(
            "Updating service {} for vendor {} in directory",
            service_id,
            vendor_id
        );

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&UpdateServiceRequest {
                vendor_id,
                service_id,
            })
            .send()
            .await
            .map_err(|e| AppError::ExternalApiError(format!("Failed to update service: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(AppError::ExternalApiError(format!(
                "Directory service update failed {}: {}",
                status, error_text
            )));
        }

        tracing::info!("✓ Service {} updated", service_id);
        Ok(())
    }
}
