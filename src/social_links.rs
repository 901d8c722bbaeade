//! "Add Social Links" quick link on the business dashboard.
//!
//! Vendors without a store are sent to the store-creation prompt. Vendors
//! with one get their service touched in the directory and are shown the
//! follow-social-media modal.

use crate::directory_client::DirectoryClient;
use crate::errors::ResultExt;
use crate::models::{Modal, ModalAction, SocialLinksRequest, SocialLinksResponse};

/// `Number(value) === 0` for a cookie string: blank counts as zero, a missing
/// cookie or a non-numeric value does not. Unsigned `0x`, `0o` and `0b`
/// literals are read in their radix.
pub fn is_zero_flag(value: Option<&str>) -> bool {
    let Some(v) = value.map(str::trim) else {
        return false;
    };
    if v.is_empty() {
        return true;
    }

    let lower = v.to_ascii_lowercase();
    let radix_digits = ["0x", "0o", "0b"]
        .iter()
        .find_map(|prefix| lower.strip_prefix(prefix));
    match radix_digits {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b == b'0'),
        None => v.parse::<f64>().map(|n| n == 0.0).unwrap_or(false),
    }
}

/// What the quick link should do for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickLinkPlan<'a> {
    pub actions: Vec<ModalAction>,
    /// `(vendor_id, service_id)` to mark as updated, when the session has both.
    pub update: Option<(&'a str, &'a str)>,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub fn plan(session: &SocialLinksRequest) -> QuickLinkPlan<'_> {
    if is_zero_flag(session.is_store.as_deref()) {
        return QuickLinkPlan {
            actions: vec![
                ModalAction::Show(Modal::CheckStoreAdd),
                ModalAction::Hide(Modal::FollowSocialMedia),
            ],
            update: None,
        };
    }

    let update = non_empty(&session.vendor_id).zip(non_empty(&session.service_id));

    QuickLinkPlan {
        actions: vec![ModalAction::Show(Modal::FollowSocialMedia)],
        update,
    }
}

/// Runs the quick link: at most one update call, then the modal actions.
///
/// An update failure does not block the modal.
pub async fn open_social_links(
    client: &DirectoryClient,
    session: &SocialLinksRequest,
) -> SocialLinksResponse {
    let plan = plan(session);

    let service_updated = match plan.update {
        Some((vendor_id, service_id)) => match client
            .update_service(vendor_id, service_id)
            .await
            .context("social links quick link")
        {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Service update failed: {}", e);
                false
            }
        },
        None => false,
    };

    SocialLinksResponse {
        actions: plan.actions,
        service_updated,
    }
}
