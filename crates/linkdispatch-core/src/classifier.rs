//! Link classifier: raw URL + arrival context → [`ClassifiedLink`].
//!
//! Classification is total. Input that is not a URL, uses a foreign scheme or
//! host, or fails parameter validation in every rule resolves to
//! [`DeepLink::Default`] with the raw string preserved.

use crate::config::LinkConfig;
use crate::context::{DispatchContext, LinkSource};
use crate::link::{ClassifiedLink, DeepLink};
use crate::quick_action::classify_quick_action;
use crate::rules;
use crate::url_model::{normalize, UrlScope};
use std::sync::OnceLock;

/// Immutable classifier. Cheap to share across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    scope: UrlScope,
    quick_action_prefix: String,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&LinkConfig::default())
    }
}

impl Classifier {
    pub fn new(config: &LinkConfig) -> Self {
        Self {
            scope: UrlScope::new(&config.custom_scheme, &config.universal_hosts),
            quick_action_prefix: config.quick_action_prefix.trim().to_string(),
        }
    }

    pub fn classify(&self, raw_url: &str, context: DispatchContext) -> ClassifiedLink {
        let (link, rule) = self.resolve(raw_url, context.source);
        match rule {
            Some(rule) => tracing::debug!(
                category = %link.category(),
                source = %context.source,
                rule,
                "classified link"
            ),
            None => tracing::debug!(
                source = %context.source,
                len = raw_url.len(),
                "unrecognized link; using default"
            ),
        }
        ClassifiedLink::new(link, raw_url, context)
    }

    fn resolve(&self, raw_url: &str, source: LinkSource) -> (DeepLink, Option<&'static str>) {
        if source == LinkSource::QuickAction {
            if let Some(link) = classify_quick_action(raw_url, &self.quick_action_prefix) {
                return (link, Some("quick_action"));
            }
        }
        let Some(parts) = normalize(raw_url, &self.scope) else {
            return (DeepLink::Default, None);
        };
        match rules::first_match(&parts) {
            Some((rule, link)) => (link, Some(rule.name)),
            None => (DeepLink::Default, None),
        }
    }
}

static DEFAULT_CLASSIFIER: OnceLock<Classifier> = OnceLock::new();

/// Installs the process-wide classifier used by [`classify`].
///
/// Returns false if one was already installed (explicitly or by an earlier
/// call to [`classify`]); the existing classifier is kept.
pub fn init_default(config: &LinkConfig) -> bool {
    DEFAULT_CLASSIFIER.set(Classifier::new(config)).is_ok()
}

/// The process-wide classifier, built from [`LinkConfig::default`] unless
/// [`init_default`] ran first.
pub fn default_classifier() -> &'static Classifier {
    DEFAULT_CLASSIFIER.get_or_init(Classifier::default)
}

/// Classifies `raw_url` with the process-wide classifier.
pub fn classify(raw_url: &str, context: DispatchContext) -> ClassifiedLink {
    default_classifier().classify(raw_url, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::LinkCategory;

    fn cat(raw: &str) -> LinkCategory {
        Classifier::default()
            .classify(raw, DispatchContext::default())
            .category()
    }

    #[test]
    fn unrecognized_preserves_raw_input() {
        let out = Classifier::default().classify("not a url at all", DispatchContext::default());
        assert!(out.is_default());
        assert_eq!(out.raw_url, "not a url at all");
        assert!(out.parameters().is_empty());
    }

    #[test]
    fn custom_scheme_from_config() {
        let cfg = LinkConfig {
            custom_scheme: "megadev".to_string(),
            ..LinkConfig::default()
        };
        let c = Classifier::new(&cfg);
        let ctx = DispatchContext::default();
        assert_eq!(c.classify("megadev://#!h!k", ctx).category(), LinkCategory::FileLink);
        assert_eq!(c.classify("mega://#!h!k", ctx).category(), LinkCategory::Default);
    }

    #[test]
    fn quick_action_only_with_quick_action_source() {
        let c = Classifier::default();
        assert_eq!(
            c.classify("mega.ios.upload", DispatchContext::quick_action())
                .category(),
            LinkCategory::UploadFile
        );
        assert_eq!(
            c.classify("mega.ios.upload", DispatchContext::default())
                .category(),
            LinkCategory::Default
        );
    }

    #[test]
    fn quick_action_source_still_accepts_urls() {
        let out = Classifier::default().classify("mega://#fm/chat", DispatchContext::quick_action());
        assert_eq!(out.category(), LinkCategory::OpenChatSectionLink);
        assert_eq!(out.context.source, LinkSource::QuickAction);
    }

    #[test]
    fn case_insensitive_scheme_and_host() {
        assert_eq!(cat("MEGA://#!h!k"), LinkCategory::FileLink);
        assert_eq!(cat("HTTPS://MEGA.NZ/file/h#k"), LinkCategory::FileLink);
    }

    #[test]
    fn free_function_uses_default_classifier() {
        let out = classify("https://mega.nz/#confirmABC", DispatchContext::default());
        assert_eq!(out.category(), LinkCategory::ConfirmationLink);
    }
}
