// std imports
use std::io::{BufRead, Write};

// third-party imports
use wildcard::Mask;

// local imports
use crate::acl::{AccessList, Action, Source};
use crate::error::Result;
use crate::resolve::Resolver;
use crate::settings::CaseMappingOption;

// ---

/// Tests subjects against a single mask.
pub struct Matcher {
    mask: Mask,
    case_mapping: CaseMappingOption,
}

impl Matcher {
    pub fn new(mask: impl Into<Mask>, case_mapping: CaseMappingOption) -> Self {
        Self {
            mask: mask.into(),
            case_mapping,
        }
    }

    pub fn matches(&self, subject: &[u8]) -> bool {
        match self.case_mapping.mapping() {
            Some(mapping) => self.mask.matches_with(mapping, subject),
            None => self.mask.matches(subject),
        }
    }

    /// Writes a verdict line for each subject and returns `true` if all of them matched.
    pub fn run<'a, I, W>(&self, subjects: I, output: &mut W) -> Result<bool>
    where
        I: IntoIterator<Item = &'a [u8]>,
        W: Write,
    {
        let mut all = true;
        for subject in subjects {
            let matched = self.matches(subject);
            all &= matched;
            output.write_all(subject)?;
            writeln!(output, ": {}", if matched { "match" } else { "no match" })?;
        }
        Ok(all)
    }

    /// Same as [`run`](Self::run) with subjects read line by line from `input`.
    pub fn run_lines<R, W>(&self, mut input: R, output: &mut W) -> Result<bool>
    where
        R: BufRead,
        W: Write,
    {
        let mut all = true;
        let mut line = Vec::new();
        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            let subject = line.strip_suffix(b"\n").unwrap_or(&line);
            let subject = subject.strip_suffix(b"\r").unwrap_or(subject);
            all &= self.run([subject], output)?;
        }
        Ok(all)
    }
}

// ---

/// Checks sources against an access list and reports the decisions.
pub struct Checker<R> {
    acl: AccessList,
    resolver: R,
}

impl<R: Resolver> Checker<R> {
    pub fn new(acl: AccessList, resolver: R) -> Self {
        Self { acl, resolver }
    }

    /// Writes a decision line for each source and returns `true` if all of them were allowed.
    pub fn run<'a, I, W>(&self, sources: I, output: &mut W) -> Result<bool>
    where
        I: IntoIterator<Item = &'a str>,
        W: Write,
    {
        let mut all = true;
        for source in sources {
            let action = self.acl.check_source(&Source::parse(source), &self.resolver);
            all &= action == Action::Allow;
            writeln!(output, "{}: {}", source, action)?;
        }
        Ok(all)
    }
}
