// std imports
use std::io::{BufWriter, Write, stdin, stdout};
use std::process;

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use hostmask::{
    AccessList, Checker, Fallback, Matcher, Resolver, StaticResolver, SystemResolver,
    cli::{self, CheckOpt, MatchOpt},
    config,
    error::*,
    settings::Settings,
};

const HOSTMASK_DEBUG_LOG: &str = "HOSTMASK_DEBUG_LOG";
const HOSTMASK_DEBUG_LOG_STYLE: &str = "HOSTMASK_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(HOSTMASK_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(HOSTMASK_DEBUG_LOG)
                .write_style(HOSTMASK_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn load_settings(opt: &cli::Opt) -> Result<Settings> {
    let (offset, no_default_configs) = opt
        .config
        .iter()
        .rposition(|x| x.is_empty() || x == "-")
        .map(|x| (x + 1, true))
        .unwrap_or_default();
    let configs = &opt.config[offset..];

    config::at(configs).no_default(no_default_configs).load()
}

fn run() -> Result<bool> {
    bootstrap();

    let opt = cli::Opt::parse();

    match &opt.command {
        cli::Command::Match(args) => run_match(args),
        cli::Command::Check(args) => {
            let settings = load_settings(&opt)?;
            run_check(args, &settings)
        }
    }
}

fn run_match(opt: &MatchOpt) -> Result<bool> {
    let matcher = Matcher::new(opt.mask.as_str(), opt.case_mapping());
    log::debug!("matching against {:?} with {:?}", opt.mask, opt.case_mapping());

    let mut output = BufWriter::new(stdout().lock());
    let all = if opt.subjects.is_empty() {
        matcher.run_lines(stdin().lock(), &mut output)?
    } else {
        matcher.run(opt.subjects.iter().map(|s| s.as_bytes()), &mut output)?
    };
    output.flush()?;

    Ok(all)
}

fn run_check(opt: &CheckOpt, settings: &Settings) -> Result<bool> {
    let mut acl = AccessList::from_settings(settings);
    if let Some(option) = opt.case_mapping {
        acl = acl.with_case_mapping(option.mapping());
    }
    log::debug!("loaded {} rules, default action is {}", acl.rules().len(), acl.default_action());

    let table = StaticResolver::new(settings.hosts.iter().cloned());
    let resolver: Box<dyn Resolver> = if opt.resolve(settings.resolve) {
        Box::new(Fallback::new(table, SystemResolver))
    } else {
        Box::new(table)
    };

    let mut output = BufWriter::new(stdout().lock());
    let all = Checker::new(acl, resolver).run(opt.sources.iter().map(|s| s.as_str()), &mut output)?;
    output.flush()?;

    Ok(all)
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}
