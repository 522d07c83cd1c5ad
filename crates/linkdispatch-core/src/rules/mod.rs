//! Ordered rule table for link classification.
//!
//! Each rule inspects [`LinkParts`] and either returns a fully extracted
//! [`DeepLink`] or `None`. Rules run in table order and the first match
//! wins; a rule whose shape matches but whose parameters fail validation
//! returns `None` so later rules still get a chance. More specific shapes
//! (scheduled meeting links) sit above the general ones they overlap with
//! (public chat links).

mod account;
mod chat;
mod node;
mod pages;
mod shortcut;

use crate::link::DeepLink;
use crate::url_model::LinkParts;

/// One entry in the rule table.
pub struct Rule {
    /// Short name used in logs.
    pub name: &'static str,
    pub matcher: fn(&LinkParts) -> Option<DeepLink>,
}

/// The rule table, highest priority first.
pub static RULES: &[Rule] = &[
    Rule { name: "open_in", matcher: pages::open_in },
    Rule { name: "app_settings", matcher: pages::app_settings },
    Rule { name: "schedule_chat", matcher: chat::schedule_chat },
    Rule { name: "public_chat", matcher: chat::public_chat },
    Rule { name: "file_request", matcher: node::file_request },
    Rule { name: "file", matcher: node::file },
    Rule { name: "folder", matcher: node::folder },
    Rule { name: "encrypted", matcher: node::encrypted },
    Rule { name: "contact", matcher: account::contact },
    Rule { name: "chat_peer_options", matcher: chat::chat_peer_options },
    Rule { name: "confirmation", matcher: account::confirmation },
    Rule { name: "new_sign_up", matcher: account::new_sign_up },
    Rule { name: "backup", matcher: account::backup },
    Rule { name: "incoming_pending_contacts", matcher: account::incoming_pending_contacts },
    Rule { name: "change_email", matcher: account::change_email },
    Rule { name: "cancel_account", matcher: account::cancel_account },
    Rule { name: "recover", matcher: account::recover },
    Rule { name: "open_chat_section", matcher: chat::open_chat_section },
    Rule { name: "login_required", matcher: account::login_required },
    Rule { name: "achievements", matcher: account::achievements },
    Rule { name: "shortcut", matcher: shortcut::shortcut },
    Rule { name: "present_node", matcher: node::present_node },
    Rule { name: "policy_page", matcher: pages::policy_page },
    Rule { name: "handle", matcher: node::handle },
];

/// Runs the table against `parts` and returns the first match.
pub fn first_match(parts: &LinkParts) -> Option<(&'static Rule, DeepLink)> {
    RULES
        .iter()
        .find_map(|rule| (rule.matcher)(parts).map(|link| (rule, link)))
}

/// The single string legacy and keyword rules match against.
///
/// Old-style links carry everything in the fragment (`mega://#confirm...`,
/// `https://mega.nz/#F!h!k`); newer ones carry it in the route
/// (`https://mega.nz/C!h`). When both a route and a fragment are
/// present the link is one of the structured forms, so there is no target.
pub(crate) fn target(parts: &LinkParts) -> Option<&str> {
    let raw = match (&parts.fragment, parts.route.len()) {
        (Some(fragment), 0) => fragment.as_str(),
        (None, 1) => parts.route[0].as_str(),
        _ => return None,
    };
    let trimmed = raw.trim_end_matches('/');
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Like [`target`], but joins a multi-segment route (`fm/ipc`).
pub(crate) fn target_path(parts: &LinkParts) -> Option<String> {
    match (&parts.fragment, parts.route.len()) {
        (None, n) if n > 1 => Some(parts.route.join("/")),
        _ => target(parts).map(str::to_string),
    }
}
