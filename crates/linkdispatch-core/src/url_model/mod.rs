//! URL normalization for link classification.
//!
//! Reduces a raw incoming string to [`LinkParts`]: which family of URL it is
//! (custom scheme, universal link, local file, settings) plus the route
//! segments, query pairs and fragment the rule table matches against.

mod token;

pub use token::{base64url, is_base64url, percent_decode, strip_keyword};

use url::{ParseError, Url};

/// Family of an accepted URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// `<custom_scheme>://...`; the authority is the first route segment.
    CustomScheme,
    /// `https://<configured host>/...`
    Universal,
    /// `file://...` handed over by another app.
    File,
    /// `app-settings:` system URL.
    AppSettings,
}

/// Normalized view of an accepted URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkParts {
    pub kind: LinkKind,
    /// Non-empty, percent-decoded route segments.
    pub route: Vec<String>,
    /// Decoded query pairs, in order of appearance.
    pub query: Vec<(String, String)>,
    /// Fragment without the leading `#`; `None` when absent or empty.
    pub fragment: Option<String>,
    /// Decoded local path, only for [`LinkKind::File`].
    pub file_path: Option<String>,
}

impl LinkParts {
    pub fn route_str(&self) -> Vec<&str> {
        self.route.iter().map(String::as_str).collect()
    }

    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn is_custom_scheme(&self) -> bool {
        self.kind == LinkKind::CustomScheme
    }
}

/// Schemes and hosts the application accepts.
#[derive(Debug, Clone)]
pub struct UrlScope {
    /// Lowercased custom scheme, e.g. `mega`.
    pub custom_scheme: String,
    /// Lowercased universal-link hosts without a `www.` prefix.
    pub universal_hosts: Vec<String>,
}

impl UrlScope {
    pub fn new(custom_scheme: &str, universal_hosts: &[String]) -> Self {
        Self {
            custom_scheme: custom_scheme.trim().to_ascii_lowercase(),
            universal_hosts: universal_hosts
                .iter()
                .map(|h| strip_www(&h.trim().to_ascii_lowercase()).to_string())
                .collect(),
        }
    }

    fn is_universal_host(&self, host: &str) -> bool {
        let host = strip_www(host);
        self.universal_hosts.iter().any(|h| h == host)
    }
}

fn strip_www(host: &str) -> &str {
    host.strip_prefix("www.").unwrap_or(host)
}

/// Parses `raw` into [`LinkParts`], or `None` if it is not a URL this
/// application handles.
///
/// A bare `host/path` without a scheme is retried as `https://` so pasted
/// web links still resolve.
pub fn normalize(raw: &str, scope: &UrlScope) -> Option<LinkParts> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let parsed = match Url::parse(raw) {
        Ok(u) => u,
        Err(ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{raw}")).ok()?,
        Err(_) => return None,
    };

    let scheme = parsed.scheme();
    let kind = if scheme == scope.custom_scheme {
        LinkKind::CustomScheme
    } else if scheme == "file" {
        LinkKind::File
    } else if scheme == "app-settings" {
        LinkKind::AppSettings
    } else if scheme == "https" || scheme == "http" {
        let host = parsed.host_str()?.to_ascii_lowercase();
        if !scope.is_universal_host(&host) {
            return None;
        }
        LinkKind::Universal
    } else {
        return None;
    };

    let mut route = Vec::new();
    if kind == LinkKind::CustomScheme {
        if let Some(host) = parsed.host_str().filter(|h| !h.is_empty()) {
            route.push(percent_decode(host));
        }
    }
    route.extend(
        parsed
            .path()
            .split('/')
            .filter(|s| !s.is_empty())
            .map(percent_decode),
    );

    let query = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let fragment = parsed
        .fragment()
        .filter(|f| !f.is_empty())
        .map(str::to_string);

    let file_path = (kind == LinkKind::File).then(|| percent_decode(parsed.path()));

    Some(LinkParts {
        kind,
        route,
        query,
        fragment,
        file_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope() -> UrlScope {
        UrlScope::new("mega", &["mega.nz".to_string(), "mega.co.nz".to_string()])
    }

    #[test]
    fn custom_scheme_authority_is_first_segment() {
        let parts = normalize("mega://chat/AbCd#key", &scope()).unwrap();
        assert_eq!(parts.kind, LinkKind::CustomScheme);
        assert_eq!(parts.route_str(), vec!["chat", "AbCd"]);
        assert_eq!(parts.fragment.as_deref(), Some("key"));
    }

    #[test]
    fn custom_scheme_fragment_only() {
        let parts = normalize("mega://#!h!k", &scope()).unwrap();
        assert!(parts.route.is_empty());
        assert_eq!(parts.fragment.as_deref(), Some("!h!k"));
    }

    #[test]
    fn universal_host_with_www() {
        let parts = normalize("https://www.mega.nz/file/h#k", &scope()).unwrap();
        assert_eq!(parts.kind, LinkKind::Universal);
        assert_eq!(parts.route_str(), vec!["file", "h"]);
    }

    #[test]
    fn unknown_host_rejected() {
        assert!(normalize("https://example.com/file/h#k", &scope()).is_none());
    }

    #[test]
    fn unknown_scheme_rejected() {
        assert!(normalize("ftp://mega.nz/file/h#k", &scope()).is_none());
        assert!(normalize("", &scope()).is_none());
        assert!(normalize("   ", &scope()).is_none());
    }

    #[test]
    fn bare_host_is_retried_as_https() {
        let parts = normalize("mega.nz/#!h!k", &scope()).unwrap();
        assert_eq!(parts.kind, LinkKind::Universal);
        assert_eq!(parts.fragment.as_deref(), Some("!h!k"));
    }

    #[test]
    fn query_pairs_decoded() {
        let parts = normalize("https://mega.nz/chat/c?schedule=o%31#k", &scope()).unwrap();
        assert_eq!(parts.query_value("schedule"), Some("o1"));
        assert_eq!(parts.query_value("missing"), None);
    }

    #[test]
    fn file_path_decoded() {
        let parts = normalize("file:///private/var/Inbox/My%20Doc.pdf", &scope()).unwrap();
        assert_eq!(parts.kind, LinkKind::File);
        assert_eq!(
            parts.file_path.as_deref(),
            Some("/private/var/Inbox/My Doc.pdf")
        );
    }
}
