// std imports
use std::fmt;
use std::net::IpAddr;

// third-party imports
use serde::{Deserialize, Serialize};
use wildcard::{Budget, CaseMapping, Mask};

// local imports
use crate::resolve::Resolver;
use crate::settings::Settings;

// ---

/// Decision taken for a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    Allow,
    Deny,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Allow => "allow",
            Self::Deny => "deny",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---

/// Origin of a connection in `nick!user@host` form.
///
/// Parsing never fails, missing parts are left empty, so `host` becomes `!@host`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Source {
    pub nick: String,
    pub user: String,
    pub host: String,
}

impl Source {
    pub fn new(nick: impl Into<String>, user: impl Into<String>, host: impl Into<String>) -> Self {
        Self {
            nick: nick.into(),
            user: user.into(),
            host: host.into(),
        }
    }

    pub fn parse(s: &str) -> Self {
        match s.split_once('!') {
            Some((nick, rest)) => match rest.split_once('@') {
                Some((user, host)) => Self::new(nick, user, host),
                None => Self::new(nick, rest, ""),
            },
            None => match s.split_once('@') {
                Some((user, host)) => Self::new("", user, host),
                None => Self::new("", "", s),
            },
        }
    }

    /// Returns a copy of the source with the host replaced.
    pub fn with_host(&self, host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..self.clone()
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}!{}@{}", self.nick, self.user, self.host)
    }
}

impl From<&str> for Source {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

// ---

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub mask: Mask,
    pub action: Action,
}

impl Rule {
    pub fn new(mask: impl Into<Mask>, action: Action) -> Self {
        Self {
            mask: mask.into(),
            action,
        }
    }
}

// ---

/// Ordered list of hostmask rules where the first matching rule decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessList {
    rules: Vec<Rule>,
    default_action: Action,
    case_mapping: Option<CaseMapping>,
    budget: Budget,
}

impl AccessList {
    pub fn new(rules: Vec<Rule>, default_action: Action) -> Self {
        Self {
            rules,
            default_action,
            case_mapping: None,
            budget: Budget::unlimited(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let rules = settings
            .rules
            .iter()
            .map(|rule| Rule::new(rule.mask.as_str(), rule.action))
            .collect();

        Self::new(rules, settings.default_action)
            .with_case_mapping(settings.case_mapping.mapping())
            .with_budget(settings.step_limit.into())
    }

    pub fn with_case_mapping(mut self, case_mapping: Option<CaseMapping>) -> Self {
        self.case_mapping = case_mapping;
        self
    }

    pub fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn default_action(&self) -> Action {
        self.default_action
    }

    /// Returns the action of the first rule matching `subject`, or the default action.
    pub fn check(&self, subject: &str) -> Action {
        self.lookup(subject).unwrap_or(self.default_action)
    }

    /// Checks the source as given, then the forms with its host resolved by `resolver`.
    ///
    /// An address host is reverse resolved to a name, a name host is resolved to addresses.
    /// Resolver failures only mean there are no alternative forms to check.
    pub fn check_source<R: Resolver>(&self, source: &Source, resolver: R) -> Action {
        if let Some(action) = self.lookup(&source.to_string()) {
            return action;
        }

        for host in alternative_hosts(&source.host, &resolver) {
            let subject = source.with_host(host).to_string();
            if let Some(action) = self.lookup(&subject) {
                log::debug!("{} matched as {}", source, subject);
                return action;
            }
        }

        self.default_action
    }

    fn lookup(&self, subject: &str) -> Option<Action> {
        for (i, rule) in self.rules.iter().enumerate() {
            match rule.mask.try_matches(self.case_mapping, subject, self.budget) {
                Ok(true) => {
                    log::debug!("{:?} matched rule #{} {:?}: {}", subject, i, rule.mask.to_string(), rule.action);
                    return Some(rule.action);
                }
                Ok(false) => {}
                Err(err) => {
                    log::warn!(
                        "skipping rule #{} {:?} for {:?}: {}",
                        i,
                        rule.mask.to_string(),
                        subject,
                        err
                    );
                }
            }
        }
        None
    }
}

impl Default for AccessList {
    fn default() -> Self {
        Self::new(Vec::new(), Action::Deny)
    }
}

fn alternative_hosts<R: Resolver>(host: &str, resolver: &R) -> Vec<String> {
    if host.is_empty() {
        return Vec::new();
    }

    let result = match host.parse::<IpAddr>() {
        Ok(addr) => resolver.reverse(addr).map(|name| vec![name]),
        Err(_) => resolver
            .resolve(host)
            .map(|addrs| addrs.into_iter().map(|addr| addr.to_string()).collect()),
    };

    result.unwrap_or_else(|err| {
        log::debug!("no alternative hosts for {:?}: {}", host, err);
        Vec::new()
    })
}
