//! Closed set of link categories the application recognizes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag chosen once per classification. `Default` is the catch-all for
/// anything the rule table does not recognize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkCategory {
    Default,
    FileLink,
    FolderLink,
    EncryptedLink,
    ConfirmationLink,
    OpenInLink,
    NewSignUpLink,
    BackupLink,
    IncomingPendingContactsLink,
    ChangeEmailLink,
    CancelAccountLink,
    RecoverLink,
    ContactLink,
    OpenChatSectionLink,
    PublicChatLink,
    LoginRequiredLink,
    HandleLink,
    AchievementsLink,
    ChatPeerOptionsLink,
    UploadFile,
    ScanDocument,
    StartConversation,
    AddContact,
    ShowRecents,
    ShowFavourites,
    PresentFavouritesNode,
    ShowOffline,
    PresentNode,
    PresentOfflineFile,
    NewTextFile,
    PrivacyPolicy,
    CookiePolicy,
    TermsOfService,
    AppSettings,
    FileRequestLink,
    ScheduleChatLink,
}

impl LinkCategory {
    /// Every category, in declaration order.
    pub const ALL: [LinkCategory; 36] = [
        LinkCategory::Default,
        LinkCategory::FileLink,
        LinkCategory::FolderLink,
        LinkCategory::EncryptedLink,
        LinkCategory::ConfirmationLink,
        LinkCategory::OpenInLink,
        LinkCategory::NewSignUpLink,
        LinkCategory::BackupLink,
        LinkCategory::IncomingPendingContactsLink,
        LinkCategory::ChangeEmailLink,
        LinkCategory::CancelAccountLink,
        LinkCategory::RecoverLink,
        LinkCategory::ContactLink,
        LinkCategory::OpenChatSectionLink,
        LinkCategory::PublicChatLink,
        LinkCategory::LoginRequiredLink,
        LinkCategory::HandleLink,
        LinkCategory::AchievementsLink,
        LinkCategory::ChatPeerOptionsLink,
        LinkCategory::UploadFile,
        LinkCategory::ScanDocument,
        LinkCategory::StartConversation,
        LinkCategory::AddContact,
        LinkCategory::ShowRecents,
        LinkCategory::ShowFavourites,
        LinkCategory::PresentFavouritesNode,
        LinkCategory::ShowOffline,
        LinkCategory::PresentNode,
        LinkCategory::PresentOfflineFile,
        LinkCategory::NewTextFile,
        LinkCategory::PrivacyPolicy,
        LinkCategory::CookiePolicy,
        LinkCategory::TermsOfService,
        LinkCategory::AppSettings,
        LinkCategory::FileRequestLink,
        LinkCategory::ScheduleChatLink,
    ];

    /// Number of categories (including `Default`).
    pub const COUNT: usize = Self::ALL.len();

    /// Stable snake_case name, identical to the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            LinkCategory::Default => "default",
            LinkCategory::FileLink => "file_link",
            LinkCategory::FolderLink => "folder_link",
            LinkCategory::EncryptedLink => "encrypted_link",
            LinkCategory::ConfirmationLink => "confirmation_link",
            LinkCategory::OpenInLink => "open_in_link",
            LinkCategory::NewSignUpLink => "new_sign_up_link",
            LinkCategory::BackupLink => "backup_link",
            LinkCategory::IncomingPendingContactsLink => "incoming_pending_contacts_link",
            LinkCategory::ChangeEmailLink => "change_email_link",
            LinkCategory::CancelAccountLink => "cancel_account_link",
            LinkCategory::RecoverLink => "recover_link",
            LinkCategory::ContactLink => "contact_link",
            LinkCategory::OpenChatSectionLink => "open_chat_section_link",
            LinkCategory::PublicChatLink => "public_chat_link",
            LinkCategory::LoginRequiredLink => "login_required_link",
            LinkCategory::HandleLink => "handle_link",
            LinkCategory::AchievementsLink => "achievements_link",
            LinkCategory::ChatPeerOptionsLink => "chat_peer_options_link",
            LinkCategory::UploadFile => "upload_file",
            LinkCategory::ScanDocument => "scan_document",
            LinkCategory::StartConversation => "start_conversation",
            LinkCategory::AddContact => "add_contact",
            LinkCategory::ShowRecents => "show_recents",
            LinkCategory::ShowFavourites => "show_favourites",
            LinkCategory::PresentFavouritesNode => "present_favourites_node",
            LinkCategory::ShowOffline => "show_offline",
            LinkCategory::PresentNode => "present_node",
            LinkCategory::PresentOfflineFile => "present_offline_file",
            LinkCategory::NewTextFile => "new_text_file",
            LinkCategory::PrivacyPolicy => "privacy_policy",
            LinkCategory::CookiePolicy => "cookie_policy",
            LinkCategory::TermsOfService => "terms_of_service",
            LinkCategory::AppSettings => "app_settings",
            LinkCategory::FileRequestLink => "file_request_link",
            LinkCategory::ScheduleChatLink => "schedule_chat_link",
        }
    }

    /// Whether the router needs a logged-in account before acting on the link.
    ///
    /// Public links, policy pages and account-flow links (signup, confirm,
    /// recover, cancel, change email) can be handled while logged out; in-app
    /// navigation cannot.
    pub fn requires_session(self) -> bool {
        !matches!(
            self,
            LinkCategory::Default
                | LinkCategory::FileLink
                | LinkCategory::FolderLink
                | LinkCategory::EncryptedLink
                | LinkCategory::ConfirmationLink
                | LinkCategory::NewSignUpLink
                | LinkCategory::ChangeEmailLink
                | LinkCategory::CancelAccountLink
                | LinkCategory::RecoverLink
                | LinkCategory::PublicChatLink
                | LinkCategory::ScheduleChatLink
                | LinkCategory::FileRequestLink
                | LinkCategory::PrivacyPolicy
                | LinkCategory::CookiePolicy
                | LinkCategory::TermsOfService
                | LinkCategory::OpenInLink
        )
    }
}

impl fmt::Display for LinkCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn all_is_complete_and_unique() {
        let set: HashSet<_> = LinkCategory::ALL.iter().collect();
        assert_eq!(set.len(), LinkCategory::COUNT);
        assert_eq!(LinkCategory::ALL[0], LinkCategory::Default);
    }

    #[test]
    fn as_str_matches_serde_name() {
        for cat in LinkCategory::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
        }
    }

    #[test]
    fn session_requirement() {
        assert!(!LinkCategory::FileLink.requires_session());
        assert!(!LinkCategory::ConfirmationLink.requires_session());
        assert!(!LinkCategory::PublicChatLink.requires_session());
        assert!(LinkCategory::UploadFile.requires_session());
        assert!(LinkCategory::ContactLink.requires_session());
        assert!(LinkCategory::ShowOffline.requires_session());
    }
}
