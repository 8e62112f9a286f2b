use serde::{Deserialize, Serialize};

use crate::judgment::DEFAULT_CONSISTENCY_THRESHOLD;

pub const DEFAULT_MAX_DEPTH: usize = 4;
pub const DEFAULT_MIN_GROUP: usize = 2;
pub const DEFAULT_MAX_GROUP: usize = 3;

/// Tool configuration.
///
/// Every field is optional; missing fields fall back to the defaults, so an
/// empty file (or no file at all) gives standard AHP behavior.
///
/// Example YAML:
/// ```yaml
/// max_depth: 4
/// consistency_threshold: 0.1
/// group_size:
///   min: 2
///   max: 3
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum hierarchy depth, counting the goal root as level 1.
    /// The default of 4 allows three levels of criteria below the goal.
    #[serde(default)]
    pub max_depth: Option<usize>,

    /// Judgment matrices with a consistency ratio above this are rejected
    /// and re-collected (default: 0.1).
    #[serde(default)]
    pub consistency_threshold: Option<f64>,

    /// Allowed size of a sibling group (criteria, sub-criteria, and
    /// alternatives alike).
    #[serde(default)]
    pub group_size: Option<GroupSizeConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GroupSizeConfig {
    pub min: usize,
    pub max: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            consistency_threshold: Some(DEFAULT_CONSISTENCY_THRESHOLD),
            group_size: Some(GroupSizeConfig {
                min: DEFAULT_MIN_GROUP,
                max: DEFAULT_MAX_GROUP,
            }),
        }
    }
}

impl Config {
    pub fn max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }

    pub fn consistency_threshold(&self) -> f64 {
        self.consistency_threshold
            .unwrap_or(DEFAULT_CONSISTENCY_THRESHOLD)
    }

    pub fn group_bounds(&self) -> (usize, usize) {
        match &self.group_size {
            Some(group) => (group.min, group.max),
            None => (DEFAULT_MIN_GROUP, DEFAULT_MAX_GROUP),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.max_depth(), 4);
        assert_eq!(config.consistency_threshold(), 0.1);
        assert_eq!(config.group_bounds(), (2, 3));
    }

    #[test]
    fn test_empty_yaml_falls_back_to_defaults() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.max_depth.is_none());
        assert_eq!(config.max_depth(), 4);
        assert_eq!(config.consistency_threshold(), 0.1);
        assert_eq!(config.group_bounds(), (2, 3));
    }

    #[test]
    fn test_partial_yaml_parse() {
        let yaml = "consistency_threshold: 0.2\n";
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.consistency_threshold(), 0.2);
        assert_eq!(config.max_depth(), 4);
    }

    #[test]
    fn test_full_yaml_parse() {
        let yaml = r#"
max_depth: 3
consistency_threshold: 0.15
group_size:
  min: 2
  max: 4
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.max_depth(), 3);
        assert_eq!(config.consistency_threshold(), 0.15);
        assert_eq!(config.group_bounds(), (2, 4));
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = Config::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: Config = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let yaml = "max_dpeth: 4\n";
        assert!(serde_saphyr::from_str::<Config>(yaml).is_err());
    }
}
