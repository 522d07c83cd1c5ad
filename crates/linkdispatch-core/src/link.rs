//! Classification result types.

use crate::category::LinkCategory;
use crate::context::DispatchContext;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A recognized link with its extracted parameters.
///
/// One variant per [`LinkCategory`]; parameters live on the variant so the
/// router never looks up a key that the category does not carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum DeepLink {
    Default,
    FileLink {
        handle: String,
        key: String,
    },
    FolderLink {
        handle: String,
        key: String,
        /// Node inside the shared folder to open, if the link points below the root.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        child: Option<String>,
    },
    EncryptedLink {
        payload: String,
    },
    ConfirmationLink {
        token: String,
    },
    OpenInLink {
        path: String,
    },
    NewSignUpLink {
        token: String,
    },
    BackupLink,
    IncomingPendingContactsLink,
    ChangeEmailLink {
        token: String,
    },
    CancelAccountLink {
        token: String,
    },
    RecoverLink {
        token: String,
    },
    ContactLink {
        handle: String,
    },
    OpenChatSectionLink,
    PublicChatLink {
        chat_id: String,
        key: String,
    },
    LoginRequiredLink,
    HandleLink {
        handle: String,
    },
    AchievementsLink,
    ChatPeerOptionsLink {
        handle: String,
    },
    UploadFile,
    ScanDocument,
    StartConversation,
    AddContact,
    ShowRecents,
    ShowFavourites,
    PresentFavouritesNode {
        handle: String,
    },
    ShowOffline,
    PresentNode {
        handle: String,
    },
    PresentOfflineFile {
        path: String,
    },
    NewTextFile,
    PrivacyPolicy,
    CookiePolicy,
    TermsOfService,
    AppSettings,
    FileRequestLink {
        handle: String,
    },
    ScheduleChatLink {
        chat_id: String,
        key: String,
        occurrence: String,
    },
}

impl DeepLink {
    pub fn category(&self) -> LinkCategory {
        match self {
            DeepLink::Default => LinkCategory::Default,
            DeepLink::FileLink { .. } => LinkCategory::FileLink,
            DeepLink::FolderLink { .. } => LinkCategory::FolderLink,
            DeepLink::EncryptedLink { .. } => LinkCategory::EncryptedLink,
            DeepLink::ConfirmationLink { .. } => LinkCategory::ConfirmationLink,
            DeepLink::OpenInLink { .. } => LinkCategory::OpenInLink,
            DeepLink::NewSignUpLink { .. } => LinkCategory::NewSignUpLink,
            DeepLink::BackupLink => LinkCategory::BackupLink,
            DeepLink::IncomingPendingContactsLink => LinkCategory::IncomingPendingContactsLink,
            DeepLink::ChangeEmailLink { .. } => LinkCategory::ChangeEmailLink,
            DeepLink::CancelAccountLink { .. } => LinkCategory::CancelAccountLink,
            DeepLink::RecoverLink { .. } => LinkCategory::RecoverLink,
            DeepLink::ContactLink { .. } => LinkCategory::ContactLink,
            DeepLink::OpenChatSectionLink => LinkCategory::OpenChatSectionLink,
            DeepLink::PublicChatLink { .. } => LinkCategory::PublicChatLink,
            DeepLink::LoginRequiredLink => LinkCategory::LoginRequiredLink,
            DeepLink::HandleLink { .. } => LinkCategory::HandleLink,
            DeepLink::AchievementsLink => LinkCategory::AchievementsLink,
            DeepLink::ChatPeerOptionsLink { .. } => LinkCategory::ChatPeerOptionsLink,
            DeepLink::UploadFile => LinkCategory::UploadFile,
            DeepLink::ScanDocument => LinkCategory::ScanDocument,
            DeepLink::StartConversation => LinkCategory::StartConversation,
            DeepLink::AddContact => LinkCategory::AddContact,
            DeepLink::ShowRecents => LinkCategory::ShowRecents,
            DeepLink::ShowFavourites => LinkCategory::ShowFavourites,
            DeepLink::PresentFavouritesNode { .. } => LinkCategory::PresentFavouritesNode,
            DeepLink::ShowOffline => LinkCategory::ShowOffline,
            DeepLink::PresentNode { .. } => LinkCategory::PresentNode,
            DeepLink::PresentOfflineFile { .. } => LinkCategory::PresentOfflineFile,
            DeepLink::NewTextFile => LinkCategory::NewTextFile,
            DeepLink::PrivacyPolicy => LinkCategory::PrivacyPolicy,
            DeepLink::CookiePolicy => LinkCategory::CookiePolicy,
            DeepLink::TermsOfService => LinkCategory::TermsOfService,
            DeepLink::AppSettings => LinkCategory::AppSettings,
            DeepLink::FileRequestLink { .. } => LinkCategory::FileRequestLink,
            DeepLink::ScheduleChatLink { .. } => LinkCategory::ScheduleChatLink,
        }
    }

    /// Flat `name -> value` view of the variant's parameters.
    pub fn parameters(&self) -> BTreeMap<&'static str, String> {
        let mut out = BTreeMap::new();
        match self {
            DeepLink::FileLink { handle, key } => {
                out.insert("handle", handle.clone());
                out.insert("key", key.clone());
            }
            DeepLink::FolderLink { handle, key, child } => {
                out.insert("handle", handle.clone());
                out.insert("key", key.clone());
                if let Some(child) = child {
                    out.insert("child", child.clone());
                }
            }
            DeepLink::EncryptedLink { payload } => {
                out.insert("payload", payload.clone());
            }
            DeepLink::ConfirmationLink { token }
            | DeepLink::NewSignUpLink { token }
            | DeepLink::ChangeEmailLink { token }
            | DeepLink::CancelAccountLink { token }
            | DeepLink::RecoverLink { token } => {
                out.insert("token", token.clone());
            }
            DeepLink::OpenInLink { path } | DeepLink::PresentOfflineFile { path } => {
                out.insert("path", path.clone());
            }
            DeepLink::ContactLink { handle }
            | DeepLink::HandleLink { handle }
            | DeepLink::ChatPeerOptionsLink { handle }
            | DeepLink::PresentFavouritesNode { handle }
            | DeepLink::PresentNode { handle }
            | DeepLink::FileRequestLink { handle } => {
                out.insert("handle", handle.clone());
            }
            DeepLink::PublicChatLink { chat_id, key } => {
                out.insert("chat_id", chat_id.clone());
                out.insert("key", key.clone());
            }
            DeepLink::ScheduleChatLink {
                chat_id,
                key,
                occurrence,
            } => {
                out.insert("chat_id", chat_id.clone());
                out.insert("key", key.clone());
                out.insert("occurrence", occurrence.clone());
            }
            DeepLink::Default
            | DeepLink::BackupLink
            | DeepLink::IncomingPendingContactsLink
            | DeepLink::OpenChatSectionLink
            | DeepLink::LoginRequiredLink
            | DeepLink::AchievementsLink
            | DeepLink::UploadFile
            | DeepLink::ScanDocument
            | DeepLink::StartConversation
            | DeepLink::AddContact
            | DeepLink::ShowRecents
            | DeepLink::ShowFavourites
            | DeepLink::ShowOffline
            | DeepLink::NewTextFile
            | DeepLink::PrivacyPolicy
            | DeepLink::CookiePolicy
            | DeepLink::TermsOfService
            | DeepLink::AppSettings => {}
        }
        out
    }
}

/// Output of one classification: the recognized link, the untouched input,
/// and the context it arrived with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLink {
    pub link: DeepLink,
    pub raw_url: String,
    pub context: DispatchContext,
}

impl ClassifiedLink {
    pub fn new(link: DeepLink, raw_url: impl Into<String>, context: DispatchContext) -> Self {
        Self {
            link,
            raw_url: raw_url.into(),
            context,
        }
    }

    /// Catch-all result for input no rule recognized.
    pub fn unrecognized(raw_url: impl Into<String>, context: DispatchContext) -> Self {
        Self::new(DeepLink::Default, raw_url, context)
    }

    pub fn category(&self) -> LinkCategory {
        self.link.category()
    }

    pub fn parameters(&self) -> BTreeMap<&'static str, String> {
        self.link.parameters()
    }

    pub fn is_default(&self) -> bool {
        matches!(self.link, DeepLink::Default)
    }
}
