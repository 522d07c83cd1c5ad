//! Home-screen quick actions.
//!
//! The OS delivers a quick action as a type identifier such as
//! `mega.ios.upload` or, for builds with a flavour segment,
//! `mega.ios.qa.upload`. Grammar: `<prefix>(.<letters>)?.<type>`.

use crate::link::DeepLink;

/// Matches `identifier` against `<prefix>(.<letters>)?.<type>`.
pub fn matches_quick_action(identifier: &str, prefix: &str, action_type: &str) -> bool {
    quick_action_type(identifier, prefix) == Some(action_type)
}

/// Extracts the `<type>` part of a quick-action identifier.
fn quick_action_type<'a>(identifier: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = identifier.strip_prefix(prefix)?.strip_prefix('.')?;
    let mut segments = rest.split('.');
    let first = segments.next()?;
    let action = match (segments.next(), segments.next()) {
        (None, None) => first,
        (Some(kind), None) if !first.is_empty() && first.bytes().all(|b| b.is_ascii_alphabetic()) => {
            kind
        }
        _ => return None,
    };
    (!action.is_empty()).then_some(action)
}

static ACTIONS: [(&str, DeepLink); 5] = [
    ("upload", DeepLink::UploadFile),
    ("scan", DeepLink::ScanDocument),
    ("startconversation", DeepLink::StartConversation),
    ("addcontact", DeepLink::AddContact),
    ("offline", DeepLink::ShowOffline),
];

/// Maps a quick-action identifier to its link, if it names a known action.
pub fn classify_quick_action(identifier: &str, prefix: &str) -> Option<DeepLink> {
    let identifier = identifier.trim();
    ACTIONS
        .iter()
        .find(|(action_type, _)| matches_quick_action(identifier, prefix, action_type))
        .map(|(_, link)| link.clone())
}
