pub mod cli;
pub mod simulate;

use crate::util::*;
use openjass_lib::rules::ruleset::SRuleSet;

pub fn clap_arg(str_long: &'static str, str_default: &'static str) -> clap::Arg<'static> {
    clap::Arg::new(str_long)
        .long(str_long)
        .takes_value(true)
        .default_value(str_default)
}

pub fn ruleset_arg() -> clap::Arg<'static> {
    clap::Arg::new("ruleset")
        .long("ruleset")
        .takes_value(true)
        .help("Path to a TOML rule set (goal, chibre)")
}

pub fn get_ruleset(clapmatches: &clap::ArgMatches) -> Result<SRuleSet, Error> {
    match clapmatches.value_of("ruleset") {
        Some(str_path) => SRuleSet::from_file(std::path::Path::new(str_path)),
        None => Ok(SRuleSet::default()),
    }
}
