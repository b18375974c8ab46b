// public modules
pub mod acl;
pub mod app;
pub mod appdirs;
pub mod cli;
pub mod config;
pub mod error;
pub mod resolve;
pub mod settings;

// public uses
pub use acl::{AccessList, Action, Rule, Source};
pub use app::{Checker, Matcher};
pub use resolve::{Fallback, NoResolver, Resolver, StaticResolver, SystemResolver};
pub use settings::Settings;
pub use wildcard::{Budget, CaseMapping, Mask, matches, matches_ci, matches_with};
