//! Rules for links that point at cloud nodes (files, folders, handles).

use super::target;
use crate::link::DeepLink;
use crate::url_model::{base64url, LinkParts};

/// Length of a node handle in its base64url form.
const NODE_HANDLE_LEN: usize = 8;

/// Splits `s` on `sep` into exactly `N` base64url parts.
fn split_tokens<const N: usize>(s: &str, sep: char) -> Option<[String; N]> {
    let mut out: [String; N] = std::array::from_fn(|_| String::new());
    let mut parts = s.split(sep);
    for slot in out.iter_mut() {
        *slot = base64url(parts.next()?)?;
    }
    parts.next().is_none().then_some(out)
}

/// `.../file/<handle>#<key>` or legacy `#!<handle>!<key>`.
pub(super) fn file(parts: &LinkParts) -> Option<DeepLink> {
    if let [first, handle] = parts.route_str().as_slice() {
        if !first.eq_ignore_ascii_case("file") {
            return None;
        }
        let key = base64url(parts.fragment.as_deref()?)?;
        return Some(DeepLink::FileLink {
            handle: base64url(handle)?,
            key,
        });
    }

    let rest = target(parts)?.strip_prefix('!')?;
    let [handle, key] = split_tokens::<2>(rest, '!')?;
    Some(DeepLink::FileLink { handle, key })
}

/// `.../folder/<handle>#<key>[/folder|file/<child>]` or legacy
/// `#F!<handle>!<key>[!<child>]`.
pub(super) fn folder(parts: &LinkParts) -> Option<DeepLink> {
    if let [first, handle] = parts.route_str().as_slice() {
        if !first.eq_ignore_ascii_case("folder") {
            return None;
        }
        let handle = base64url(handle)?;
        let fragment = parts.fragment.as_deref()?;
        let mut segments = fragment.split('/');
        let key = base64url(segments.next()?)?;
        let child = match (segments.next(), segments.next(), segments.next()) {
            (None, _, _) => None,
            (Some(kind), Some(child), None) if kind == "folder" || kind == "file" => {
                Some(base64url(child)?)
            }
            _ => return None,
        };
        return Some(DeepLink::FolderLink { handle, key, child });
    }

    let rest = target(parts)?.strip_prefix("F!")?;
    if let Some([handle, key]) = split_tokens::<2>(rest, '!') {
        return Some(DeepLink::FolderLink {
            handle,
            key,
            child: None,
        });
    }
    let [handle, key, child] = split_tokens::<3>(rest, '!')?;
    Some(DeepLink::FolderLink {
        handle,
        key,
        child: Some(child),
    })
}

/// Password-protected link: `#P!<payload>` or `/P!<payload>`.
pub(super) fn encrypted(parts: &LinkParts) -> Option<DeepLink> {
    let payload = base64url(target(parts)?.strip_prefix("P!")?)?;
    Some(DeepLink::EncryptedLink { payload })
}

/// `.../filerequest/<handle>`.
pub(super) fn file_request(parts: &LinkParts) -> Option<DeepLink> {
    match parts.route_str().as_slice() {
        [first, handle] if first.eq_ignore_ascii_case("filerequest") => {
            Some(DeepLink::FileRequestLink {
                handle: base64url(handle)?,
            })
        }
        _ => None,
    }
}

/// `mega://presentNode/<handle>` (spotlight and widget taps).
pub(super) fn present_node(parts: &LinkParts) -> Option<DeepLink> {
    if !parts.is_custom_scheme() {
        return None;
    }
    match parts.route_str().as_slice() {
        [first, handle] if first.eq_ignore_ascii_case("presentNode") => {
            Some(DeepLink::PresentNode {
                handle: base64url(handle)?,
            })
        }
        _ => None,
    }
}

/// Bare node handle: `#<handle>` or `/fm/<handle>`.
///
/// Lowest priority: any keyword link above is also valid base64url.
/// Only `#<handle>`, `#fm/<handle>` and `/fm/<handle>`; a bare route word is a site page.
pub(super) fn handle(parts: &LinkParts) -> Option<DeepLink> {
    let route = parts.route_str();
    let candidate = match (route.as_slice(), &parts.fragment) {
        ([fm, handle], None) if fm.eq_ignore_ascii_case("fm") => *handle,
        ([], Some(_)) => {
            let t = target(parts)?;
            t.strip_prefix("fm/").unwrap_or(t)
        }
        _ => return None,
    };
    if candidate.len() != NODE_HANDLE_LEN {
        return None;
    }
    Some(DeepLink::HandleLink {
        handle: base64url(candidate)?,
    })
}
