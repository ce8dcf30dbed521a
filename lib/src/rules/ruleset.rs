use crate::util::*;
use std::{fs::File, io::prelude::*, path::Path};

/// Match-level configuration. Loaded from a small TOML document:
///
/// ```toml
/// goal = 1000
/// chibre = true
/// ```
#[derive(Debug, Clone, new)]
pub struct SRuleSet {
    pub n_points_goal: isize,
    pub b_chibre_allowed: bool,
}

impl Default for SRuleSet {
    fn default() -> Self {
        SRuleSet::new(/*n_points_goal*/1000, /*b_chibre_allowed*/true)
    }
}

impl SRuleSet {
    pub fn from_string(str_toml: &str) -> Result<SRuleSet, Error> {
        let tomltbl = str_toml.parse::<toml::Value>()?;
        let n_points_goal = match tomltbl.get("goal") {
            None => {
                info!("SRuleSet: no goal given, falling back to 1000");
                1000
            },
            Some(&toml::Value::Integer(n_goal)) if 1 <= n_goal => n_goal.as_num::<isize>(),
            Some(_) => bail!("Invalid value for goal. A number of at least 1 is required."),
        };
        let b_chibre_allowed = match tomltbl.get("chibre") {
            None => true,
            Some(&toml::Value::Boolean(b_chibre)) => b_chibre,
            Some(_) => bail!("Invalid value for chibre. true or false is required."),
        };
        Ok(SRuleSet::new(n_points_goal, b_chibre_allowed))
    }

    pub fn from_file(path: &Path) -> Result<SRuleSet, Error> {
        let mut str_toml = String::new();
        File::open(path)?.read_to_string(&mut str_toml)?;
        Self::from_string(&str_toml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ruleset_defaults() {
        let ruleset = unwrap!(SRuleSet::from_string(""));
        assert_eq!(ruleset.n_points_goal, 1000);
        assert!(ruleset.b_chibre_allowed);
    }

    #[test]
    fn test_ruleset_values() {
        let ruleset = unwrap!(SRuleSet::from_string("goal = 2500\nchibre = false"));
        assert_eq!(ruleset.n_points_goal, 2500);
        assert!(!ruleset.b_chibre_allowed);
    }

    #[test]
    fn test_ruleset_rejects_invalid() {
        assert!(SRuleSet::from_string("goal = 0").is_err());
        assert!(SRuleSet::from_string("goal = \"high\"").is_err());
        assert!(SRuleSet::from_string("chibre = 1").is_err());
        assert!(SRuleSet::from_string("not toml at all [").is_err());
    }
}
