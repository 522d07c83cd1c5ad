//! In-app actions reached from widgets, Siri shortcuts and spotlight.
//!
//! Shape: `mega://widget.shortcut.<action>[/<argument>...]`, or the bare
//! `mega://<action>` form older widgets emit.

use crate::link::DeepLink;
use crate::url_model::{base64url, strip_keyword, LinkParts};

const WIDGET_PREFIX: &str = "widget.shortcut.";

pub(super) fn shortcut(parts: &LinkParts) -> Option<DeepLink> {
    if !parts.is_custom_scheme() {
        return None;
    }
    let (first, args) = parts.route.split_first()?;
    let action = strip_keyword(first, WIDGET_PREFIX).unwrap_or(first.as_str());

    match (action.to_ascii_lowercase().as_str(), args) {
        ("uploadfile", []) => Some(DeepLink::UploadFile),
        ("scandocument", []) => Some(DeepLink::ScanDocument),
        ("startconversation", []) => Some(DeepLink::StartConversation),
        ("addcontact", []) => Some(DeepLink::AddContact),
        ("recents" | "recent", []) => Some(DeepLink::ShowRecents),
        ("favourites" | "favorites", []) => Some(DeepLink::ShowFavourites),
        ("favourites" | "favorites", [handle]) => Some(DeepLink::PresentFavouritesNode {
            handle: base64url(handle)?,
        }),
        ("offline", []) => Some(DeepLink::ShowOffline),
        ("offline", path) => Some(DeepLink::PresentOfflineFile {
            path: path.join("/"),
        }),
        ("newtextfile", []) => Some(DeepLink::NewTextFile),
        _ => None,
    }
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
    fn widget_actions() {
        assert_eq!(
            shortcut(&parts("mega://widget.shortcut.uploadFile")),
            Some(DeepLink::UploadFile)
        );
        assert_eq!(
            shortcut(&parts("mega://widget.shortcut.scanDocument")),
            Some(DeepLink::ScanDocument)
        );
        assert_eq!(shortcut(&parts("mega://addContact")), Some(DeepLink::AddContact));
        assert_eq!(shortcut(&parts("mega://newTextFile")), Some(DeepLink::NewTextFile));
    }

    #[test]
    fn favourites_with_and_without_node() {
        assert_eq!(
            shortcut(&parts("mega://widget.shortcut.favourites")),
            Some(DeepLink::ShowFavourites)
        );
        assert_eq!(
            shortcut(&parts("mega://widget.shortcut.favourites/AbCdEfGh")),
            Some(DeepLink::PresentFavouritesNode {
                handle: "AbCdEfGh".to_string()
            })
        );
        assert_eq!(shortcut(&parts("mega://widget.shortcut.favourites/a!b")), None);
    }

    #[test]
    fn offline_file_path_is_joined_and_decoded() {
        assert_eq!(
            shortcut(&parts("mega://widget.shortcut.offline/My%20Docs/cv.pdf")),
            Some(DeepLink::PresentOfflineFile {
                path: "My Docs/cv.pdf".to_string()
            })
        );
        assert_eq!(
            shortcut(&parts("mega://widget.shortcut.offline")),
            Some(DeepLink::ShowOffline)
        );
    }

    #[test]
    fn unknown_action_and_foreign_scheme() {
        assert_eq!(shortcut(&parts("mega://widget.shortcut.teleport")), None);
        assert_eq!(shortcut(&parts("mega://uploadFile/extra")), None);
        assert_eq!(shortcut(&parts("https://mega.nz/uploadFile")), None);
    }
}
