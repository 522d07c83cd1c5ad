//! Deep link classification.
//!
//! [`classify`] maps an incoming URL (custom scheme, universal link, local
//! file or quick-action identifier) to exactly one [`LinkCategory`] and the
//! parameters that category carries. It never fails: unrecognized input
//! becomes [`DeepLink::Default`].

pub mod config;
pub mod logging;

pub mod category;
pub mod classifier;
pub mod context;
pub mod link;
pub mod quick_action;
pub mod rules;
pub mod url_model;

pub use category::LinkCategory;
pub use classifier::{classify, Classifier};
pub use context::{DispatchContext, LaunchState, LinkSource};
pub use link::{ClassifiedLink, DeepLink};
