// third-party imports
use clap::{Args, Parser, Subcommand};

// local imports
use crate::settings::CaseMappingOption;

// ---

/// Wildcard hostmask matcher and access list checker.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opt {
    /// Configuration file path, may be repeated; an empty value or "-" discards the preceding ones and the defaults.
    #[arg(long, value_name = "FILE", env = "HOSTMASK_CONFIG", global = true, num_args = 1)]
    pub config: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Test subjects against a wildcard mask.
    Match(MatchOpt),

    /// Check hostmask sources against the configured access list.
    Check(CheckOpt),
}

#[derive(Args, Debug)]
pub struct MatchOpt {
    /// Ignore ASCII case, alias for --case-mapping=ascii unless --case-mapping is given.
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Case mapping to fold subject and mask with.
    #[arg(long, value_enum)]
    pub case_mapping: Option<CaseMappingOption>,

    /// Mask with `*` and `?` wildcards.
    pub mask: String,

    /// Subjects to test, read line by line from stdin if none are given.
    pub subjects: Vec<String>,
}

impl MatchOpt {
    pub fn case_mapping(&self) -> CaseMappingOption {
        match (self.case_mapping, self.ignore_case) {
            (Some(option), _) => option,
            (None, true) => CaseMappingOption::Ascii,
            (None, false) => CaseMappingOption::None,
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckOpt {
    /// Resolve hosts with the system resolver, overrides the configuration.
    #[arg(long, overrides_with = "no_resolve")]
    pub resolve: bool,

    /// Do not resolve hosts with the system resolver, overrides the configuration.
    #[arg(long, overrides_with = "resolve")]
    pub no_resolve: bool,

    /// Override the configured case mapping.
    #[arg(long, value_enum)]
    pub case_mapping: Option<CaseMappingOption>,

    /// Sources in nick!user@host form.
    #[arg(required = true)]
    pub sources: Vec<String>,
}

impl CheckOpt {
    pub fn resolve(&self, configured: bool) -> bool {
        match (self.resolve, self.no_resolve) {
            (true, _) => true,
            (_, true) => false,
            _ => configured,
        }
    }
}
