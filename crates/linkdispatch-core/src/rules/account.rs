//! Account-flow and keyword links (`#confirm…`, `#recover…`, `#backup`, …).

use super::{target, target_path};
use crate::link::DeepLink;
use crate::url_model::{base64url, strip_keyword, LinkParts};

/// Token following `keyword`: glued to it in a fragment (`#confirm<token>`),
/// or as its own segment in a route (`/confirm/<token>`).
fn keyword_token(parts: &LinkParts, keyword: &str) -> Option<String> {
    let route = parts.route_str();
    match (route.as_slice(), &parts.fragment) {
        ([], Some(_)) => base64url(strip_keyword(target(parts)?, keyword)?),
        ([kw, token], None) if kw.eq_ignore_ascii_case(keyword) => base64url(token),
        _ => None,
    }
}

/// Link target equals one of `keywords` (case-insensitive).
fn is_keyword(parts: &LinkParts, keywords: &[&str]) -> bool {
    target_path(parts).is_some_and(|t| keywords.iter().any(|k| t.eq_ignore_ascii_case(k)))
}

pub(super) fn confirmation(parts: &LinkParts) -> Option<DeepLink> {
    let token = keyword_token(parts, "confirm")?;
    Some(DeepLink::ConfirmationLink { token })
}

pub(super) fn new_sign_up(parts: &LinkParts) -> Option<DeepLink> {
    let token = keyword_token(parts, "newsignup")?;
    Some(DeepLink::NewSignUpLink { token })
}

pub(super) fn change_email(parts: &LinkParts) -> Option<DeepLink> {
    let token = keyword_token(parts, "verify")?;
    Some(DeepLink::ChangeEmailLink { token })
}

pub(super) fn cancel_account(parts: &LinkParts) -> Option<DeepLink> {
    let token = keyword_token(parts, "cancel")?;
    Some(DeepLink::CancelAccountLink { token })
}

pub(super) fn recover(parts: &LinkParts) -> Option<DeepLink> {
    let token = keyword_token(parts, "recover")?;
    Some(DeepLink::RecoverLink { token })
}

pub(super) fn backup(parts: &LinkParts) -> Option<DeepLink> {
    is_keyword(parts, &["backup"]).then_some(DeepLink::BackupLink)
}

pub(super) fn incoming_pending_contacts(parts: &LinkParts) -> Option<DeepLink> {
    is_keyword(parts, &["fm/ipc"]).then_some(DeepLink::IncomingPendingContactsLink)
}

pub(super) fn login_required(parts: &LinkParts) -> Option<DeepLink> {
    is_keyword(parts, &["loginrequired"]).then_some(DeepLink::LoginRequiredLink)
}

pub(super) fn achievements(parts: &LinkParts) -> Option<DeepLink> {
    is_keyword(parts, &["achievements", "fm/achievements"]).then_some(DeepLink::AchievementsLink)
}

/// Contact invitation: `C!<handle>` in the route or fragment.
pub(super) fn contact(parts: &LinkParts) -> Option<DeepLink> {
    let handle = base64url(target(parts)?.strip_prefix("C!")?)?;
    Some(DeepLink::ContactLink { handle })
}
