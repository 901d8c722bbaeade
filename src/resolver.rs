//! Page metadata resolution for store/service detail pages.
//!
//! One directory lookup per call, mapped field by field onto a complete
//! [`PageMetadata`]. Nothing here fails: missing fields fall back to site
//! defaults and a failed lookup produces a `noindex` error record.

use crate::config::Config;
use crate::directory_client::DirectoryClient;
use crate::errors::{AppError, ResultExt};
use crate::models::{Alternates, OpenGraph, OpenGraphImage, PageMetadata, ServiceDetail, TwitterCard};
use url::Url;

pub const BRAND: &str = "Nlytical";
pub const SITE_NAME: &str = "Primocys | Expert Mobile App Development Company in the USA";
pub const TWITTER_HANDLE: &str = "@primocys";
pub const LOCALE: &str = "en_US";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

pub const ROBOTS_INDEX: &str = "index, follow";
pub const ROBOTS_NOINDEX: &str = "noindex, nofollow";
pub const ERROR_TITLE: &str = "Error";
pub const ERROR_DESCRIPTION: &str = "An error occurred while fetching the service details.";

/// Site-wide values every metadata record falls back to.
#[derive(Debug, Clone)]
pub struct SiteDefaults {
    pub brand: String,
    pub site_base_url: String,
    /// Used when the service has no usable cover image; also the base that
    /// relative cover paths resolve against.
    pub default_image: String,
    pub site_name: String,
    pub locale: String,
    pub twitter_handle: String,
}

impl SiteDefaults {
    pub fn from_config(config: &Config) -> Self {
        Self {
            brand: BRAND.to_string(),
            site_base_url: config.site_base_url.trim_end_matches('/').to_string(),
            default_image: config.default_og_image.clone(),
            site_name: SITE_NAME.to_string(),
            locale: LOCALE.to_string(),
            twitter_handle: TWITTER_HANDLE.to_string(),
        }
    }

    pub fn canonical_url(&self, service_id: &str) -> String {
        format!("{}/service/{}", self.site_base_url, service_id)
    }

    /// Resolves a cover image reference to an absolute URL, or the default image.
    pub fn resolve_image(&self, cover_image: Option<&str>) -> String {
        let Some(cover) = cover_image else {
            return self.default_image.clone();
        };

        let resolved = match Url::parse(&self.default_image) {
            Ok(base) => base.join(cover),
            Err(_) => Url::parse(cover),
        };

        match resolved {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::warn!("Invalid cover image URL '{}': {}", cover, e);
                self.default_image.clone()
            }
        }
    }
}

impl Default for SiteDefaults {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Maps a (possibly empty) service detail onto page metadata.
pub fn build_page_metadata(
    detail: &ServiceDetail,
    defaults: &SiteDefaults,
    service_name: &str,
    service_id: &str,
) -> PageMetadata {
    let title = match detail.meta_title.as_deref() {
        Some(meta_title) => format!("{} | {}", meta_title, defaults.brand),
        None => format!("Service - {}", service_id),
    };
    let description = detail.meta_description.clone().unwrap_or_else(|| {
        format!(
            "Explore the details of {} with ID {}.",
            service_name, service_id
        )
    });
    let image_url = defaults.resolve_image(detail.cover_image.as_deref());

    tracing::debug!("Resolved metadata title for {}: {}", service_id, title);

    assemble(defaults, service_id, title, description, ROBOTS_INDEX, image_url)
}

/// Metadata served when the directory lookup fails.
pub fn error_page_metadata(defaults: &SiteDefaults, service_id: &str) -> PageMetadata {
    assemble(
        defaults,
        service_id,
        ERROR_TITLE.to_string(),
        ERROR_DESCRIPTION.to_string(),
        ROBOTS_NOINDEX,
        defaults.default_image.clone(),
    )
}

fn assemble(
    defaults: &SiteDefaults,
    service_id: &str,
    title: String,
    description: String,
    robots: &str,
    image_url: String,
) -> PageMetadata {
    let canonical = defaults.canonical_url(service_id);

    PageMetadata {
        robots: robots.to_string(),
        alternates: Alternates {
            canonical: canonical.clone(),
        },
        open_graph: OpenGraph {
            locale: defaults.locale.clone(),
            site_name: defaults.site_name.clone(),
            kind: "website".to_string(),
            title: title.clone(),
            description: description.clone(),
            url: canonical,
            images: vec![OpenGraphImage {
                url: image_url.clone(),
                secure_url: image_url.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: title.clone(),
            }],
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            site: defaults.twitter_handle.clone(),
            title: title.clone(),
            description: description.clone(),
            creator: defaults.twitter_handle.clone(),
            images: vec![image_url],
        },
        title,
        description,
    }
}

/// Resolves page metadata through the directory API.
#[derive(Clone)]
pub struct MetadataResolver {
    client: DirectoryClient,
    defaults: SiteDefaults,
}

impl MetadataResolver {
    pub fn new(client: DirectoryClient, defaults: SiteDefaults) -> Self {
        Self { client, defaults }
    }

    pub fn defaults(&self) -> &SiteDefaults {
        &self.defaults
    }

    /// Resolves metadata for a decoded service id. Never fails.
    pub async fn resolve(&self, service_name: &str, service_id: &str) -> PageMetadata {
        match self.try_resolve(service_name, service_id).await {
            Ok(metadata) => metadata,
            Err(e) => {
                tracing::error!("Error fetching metadata for service {}: {}", service_id, e);
                error_page_metadata(&self.defaults, service_id)
            }
        }
    }

    async fn try_resolve(
        &self,
        service_name: &str,
        service_id: &str,
    ) -> Result<PageMetadata, AppError> {
        let body = self
            .client
            .get_service_detail(service_id)
            .await
            .with_context(|| format!("service detail lookup for '{}'", service_name))?;
        if body.is_null() {
            return Err(AppError::ExternalApiError(
                "directory returned a null body".to_string(),
            ));
        }
        let detail = ServiceDetail::from_response(&body);
        Ok(build_page_metadata(
            &detail,
            &self.defaults,
            service_name,
            service_id,
        ))
    }
}
