//! Chat and meeting links.

use super::target_path;
use crate::link::DeepLink;
use crate::url_model::{base64url, LinkParts};

/// Chat id and key from `.../chat/<id>[/...]#<key>`.
fn chat_id_and_key(parts: &LinkParts) -> Option<(String, String)> {
    let route = parts.route_str();
    match route.as_slice() {
        [first, id, ..] if first.eq_ignore_ascii_case("chat") => {
            let key = base64url(parts.fragment.as_deref()?)?;
            Some((base64url(id)?, key))
        }
        _ => None,
    }
}

/// Scheduled meeting: `.../chat/<id>?schedule=<occurrence>#<key>` or
/// `.../chat/<id>/schedule/<occurrence>#<key>`.
pub(super) fn schedule_chat(parts: &LinkParts) -> Option<DeepLink> {
    let route = parts.route_str();
    let occurrence = match route.as_slice() {
        [_, _] => parts.query_value("schedule")?,
        [_, _, kw, occurrence] if kw.eq_ignore_ascii_case("schedule") => *occurrence,
        _ => return None,
    };
    let occurrence = base64url(occurrence)?;
    let (chat_id, key) = chat_id_and_key(parts)?;
    Some(DeepLink::ScheduleChatLink {
        chat_id,
        key,
        occurrence,
    })
}

/// Public chat or meeting room: `.../chat/<id>#<key>`.
pub(super) fn public_chat(parts: &LinkParts) -> Option<DeepLink> {
    if parts.route.len() != 2 {
        return None;
    }
    let (chat_id, key) = chat_id_and_key(parts)?;
    Some(DeepLink::PublicChatLink { chat_id, key })
}

/// `mega://chatPeerOptions#<user handle>`.
pub(super) fn chat_peer_options(parts: &LinkParts) -> Option<DeepLink> {
    if !parts.is_custom_scheme() {
        return None;
    }
    match parts.route_str().as_slice() {
        [first] if first.eq_ignore_ascii_case("chatPeerOptions") => {
            Some(DeepLink::ChatPeerOptionsLink {
                handle: base64url(parts.fragment.as_deref()?)?,
            })
        }
        _ => None,
    }
}

/// `#fm/chat` or `/fm/chat`.
pub(super) fn open_chat_section(parts: &LinkParts) -> Option<DeepLink> {
    target_path(parts)?
        .eq_ignore_ascii_case("fm/chat")
        .then_some(DeepLink::OpenChatSectionLink)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::url_model::{normalize, UrlScope};

    fn parts(raw: &str) -> LinkParts {
        let scope = UrlScope::new("mega", &["mega.nz".to_string()]);
        normalize(raw, &scope).unwrap()
    }

    #[test]
    fn schedule_via_query_or_path() {
        let expected = DeepLink::ScheduleChatLink {
            chat_id: "Cid1".to_string(),
            key: "Ckey".to_string(),
            occurrence: "Occ9".to_string(),
        };
        assert_eq!(
            schedule_chat(&parts("https://mega.nz/chat/Cid1?schedule=Occ9#Ckey")),
            Some(expected.clone())
        );
        assert_eq!(
            schedule_chat(&parts("mega://chat/Cid1/schedule/Occ9#Ckey")),
            Some(expected)
        );
    }

    #[test]
    fn schedule_without_occurrence_is_not_schedule() {
        assert!(schedule_chat(&parts("https://mega.nz/chat/Cid1#Ckey")).is_none());
        assert!(schedule_chat(&parts("https://mega.nz/chat/Cid1?schedule=#Ckey")).is_none());
    }

    #[test]
    fn public_chat_needs_key() {
        assert!(public_chat(&parts("https://mega.nz/chat/Cid1#Ckey")).is_some());
        assert!(public_chat(&parts("https://mega.nz/chat/Cid1")).is_none());
        assert!(public_chat(&parts("https://mega.nz/chat/Cid1/extra#Ckey")).is_none());
    }

    #[test]
    fn chat_peer_options() {
        assert_eq!(
            super::chat_peer_options(&parts("mega://chatPeerOptions#UsrHndl1")),
            Some(DeepLink::ChatPeerOptionsLink {
                handle: "UsrHndl1".to_string()
            })
        );
        assert!(super::chat_peer_options(&parts("mega://chatPeerOptions")).is_none());
    }

    #[test]
    fn chat_section() {
        assert!(open_chat_section(&parts("mega://#fm/chat")).is_some());
        assert!(open_chat_section(&parts("https://mega.nz/fm/chat")).is_some());
        assert!(open_chat_section(&parts("mega://#fm/ipc")).is_none());
    }
}
