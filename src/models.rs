use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============ Directory API Models ============

/// Fields of the directory's `serviceDetail` record used for page metadata.
///
/// The directory owns this record and its shape is loose, so every field is
/// read defensively: missing, `null`, non-string and empty values are `None`.
/// Whitespace-only strings are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceDetail {
    pub meta_title: Option<String>,
    pub meta_description: Option<String>,
    pub cover_image: Option<String>,
}

impl ServiceDetail {
    /// Extracts the `serviceDetail` object from a directory response body.
    ///
    /// Anything other than an object under that key yields an empty record.
    /// A literal `null` body is rejected earlier, in the resolver.
    pub fn from_response(body: &Value) -> Self {
        match body.get("serviceDetail") {
            Some(detail @ Value::Object(_)) => Self {
                meta_title: non_empty_str(detail, "meta_title"),
                meta_description: non_empty_str(detail, "meta_description"),
                cover_image: non_empty_str(detail, "cover_image"),
            },
            _ => Self::default(),
        }
    }
}

fn non_empty_str(record: &Value, key: &str) -> Option<String> {
    record
        .get(key)
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
}

/// Request body for `/api/get-servicedetail`.
#[derive(Debug, Serialize)]
pub struct ServiceDetailRequest<'a> {
    pub service_id: &'a str,
}

/// Request body for the update-service call.
#[derive(Debug, Serialize)]
pub struct UpdateServiceRequest<'a> {
    pub vendor_id: &'a str,
    pub service_id: &'a str,
}

// ============ Page Metadata ============

/// Social preview image, 1200x630 for every block that embeds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphImage {
    pub url: String,
    pub secure_url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub locale: String,
    pub site_name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub images: Vec<OpenGraphImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterCard {
    pub card: String,
    pub site: String,
    pub title: String,
    pub description: String,
    pub creator: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternates {
    pub canonical: String,
}

/// Normalized document-head metadata for a service page.
///
/// Serialized with the field names the frontend's head generation expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub robots: String,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

impl PageMetadata {
    pub fn canonical_url(&self) -> &str {
        &self.alternates.canonical
    }

    /// URL of the preview image shared by the Open Graph and card blocks.
    pub fn image_url(&self) -> &str {
        self.open_graph
            .images
            .first()
            .map(|img| img.url.as_str())
            .unwrap_or_default()
    }
}

// ============ Social Links Quick Link ============

/// Session values the dashboard keeps in cookies, passed explicitly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SocialLinksRequest {
    pub vendor_id: Option<String>,
    pub service_id: Option<String>,
    pub is_store: Option<String>,
}

/// Dashboard modals driven by the quick link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Modal {
    #[serde(rename = "CheackStoreAdd")]
    CheckStoreAdd,
    #[serde(rename = "FollowSocialMediaModal")]
    FollowSocialMedia,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", content = "modal", rename_all = "lowercase")]
pub enum ModalAction {
    Show(Modal),
    Hide(Modal),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLinksResponse {
    pub actions: Vec<ModalAction>,
    pub service_updated: bool,
}
