//! Local files, system settings and static web pages.

use crate::link::DeepLink;
use crate::url_model::{LinkKind, LinkParts};

/// `file://...` handed to the app through "Open in…".
pub(super) fn open_in(parts: &LinkParts) -> Option<DeepLink> {
    if parts.kind != LinkKind::File {
        return None;
    }
    let path = parts.file_path.as_deref()?;
    if path.trim_matches('/').is_empty() {
        return None;
    }
    Some(DeepLink::OpenInLink {
        path: path.to_string(),
    })
}

/// `app-settings:` or `mega://settings`.
pub(super) fn app_settings(parts: &LinkParts) -> Option<DeepLink> {
    let matched = match parts.kind {
        LinkKind::AppSettings => true,
        LinkKind::CustomScheme => {
            matches!(parts.route_str().as_slice(), [s] if s.eq_ignore_ascii_case("settings"))
        }
        _ => false,
    };
    matched.then_some(DeepLink::AppSettings)
}

/// `/privacy`, `/cookie`, `/terms`.
pub(super) fn policy_page(parts: &LinkParts) -> Option<DeepLink> {
    let route = parts.route_str();
    let [page] = route.as_slice() else {
        return None;
    };
    match page.to_ascii_lowercase().as_str() {
        "privacy" => Some(DeepLink::PrivacyPolicy),
        "cookie" | "cookies" => Some(DeepLink::CookiePolicy),
        "terms" => Some(DeepLink::TermsOfService),
        _ => None,
    }
}
