// std imports
use std::include_str;
use std::net::IpAddr;
use std::path::PathBuf;

// third-party imports
use clap::ValueEnum;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use wildcard::CaseMapping;

// local imports
use crate::acl::Action;
use crate::error::Result;

// ---

pub const DEFAULT_SETTINGS_RAW: &str = include_str!("../etc/defaults/config.yaml");
pub const DEFAULT_STEP_LIMIT: u64 = 100_000;

// ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Settings {
    pub case_mapping: CaseMappingOption,
    pub default_action: Action,
    pub step_limit: Option<u64>,
    pub resolve: bool,
    pub rules: Vec<RuleSettings>,
    pub hosts: Vec<HostEntry>,
}

impl Settings {
    /// Loads settings from the given sources, layered in order on top of the embedded defaults
    /// unless `with_defaults` is `false`.
    pub fn load<I>(sources: I, with_defaults: bool) -> Result<Self>
    where
        I: IntoIterator<Item = Source>,
    {
        let mut builder = Config::builder();

        if with_defaults {
            builder = builder.add_source(File::from_str(DEFAULT_SETTINGS_RAW, FileFormat::Yaml));
        }

        for source in sources {
            log::debug!(
                "adding settings source {} (required: {})",
                source.path.display(),
                source.required
            );
            builder = builder.add_source(File::from(source.path.as_path()).required(source.required));
        }

        Ok(builder.build()?.try_deserialize()?)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            case_mapping: CaseMappingOption::default(),
            default_action: Action::Deny,
            step_limit: Some(DEFAULT_STEP_LIMIT),
            resolve: false,
            rules: Vec::new(),
            hosts: Vec::new(),
        }
    }
}

// ---

/// A settings file to load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub path: PathBuf,
    pub required: bool,
}

impl Source {
    pub fn required(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    pub fn optional(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: false,
        }
    }
}

// ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSettings {
    pub mask: String,
    pub action: Action,
}

// ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostEntry {
    pub name: String,
    pub addresses: Vec<IpAddr>,
}

// ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CaseMappingOption {
    None,
    Ascii,
    #[default]
    Rfc1459,
    StrictRfc1459,
}

impl CaseMappingOption {
    pub fn mapping(self) -> Option<CaseMapping> {
        match self {
            Self::None => None,
            Self::Ascii => Some(CaseMapping::Ascii),
            Self::Rfc1459 => Some(CaseMapping::Rfc1459),
            Self::StrictRfc1459 => Some(CaseMapping::StrictRfc1459),
        }
    }
}

#[cfg(test)]
mod tests;
