//! Rule configuration and its builder.

use std::sync::OnceLock;

#[cfg(feature = "serde")]
use super::types::RuleRepr;
use super::types::{Divisor, Entry, Rule};
use crate::error::{FizzBuzzError, Result};

const fn divisor(value: u64) -> Divisor {
    match Divisor::new(value) {
        Some(divisor) => divisor,
        None => panic!("default divisors are non-zero"),
    }
}

/// The classic rules, in priority order.
///
/// 15 precedes 3 and 5; otherwise multiples of 15 would be caught by
/// one of the partial rules first.
pub const DEFAULT_RULES: [(Divisor, &str); 3] = [
    (divisor(15), "FizzBuzz"),
    (divisor(3), "Fizz"),
    (divisor(5), "Buzz"),
];

/// An ordered, non-empty rule set. The first matching rule wins.
///
/// Can only be built valid, so evaluation never re-checks it.
///
/// # Examples
///
/// ```
/// use u_fizzbuzz::labeling::{Configuration, Entry};
///
/// let config = Configuration::builder()
///     .with_rule(14, "FizzBang")
///     .with_rule(2, "Fizz")
///     .with_rule(7, "Bang")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.label(28), Entry::Replacement("FizzBang".into()));
/// assert_eq!(config.label(9), Entry::Original(9));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "ConfigurationRepr")
)]
pub struct Configuration {
    rules: Vec<Rule>,
}

impl Configuration {
    /// Creates a configuration from already-validated rules.
    pub fn new(rules: Vec<Rule>) -> Result<Self> {
        if rules.is_empty() {
            return Err(FizzBuzzError::EmptyConfiguration);
        }
        Ok(Self { rules })
    }

    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::new()
    }

    /// Rules in priority order. Never empty.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the highest-priority rule dividing `n`, if any.
    pub fn first_match(&self, n: u64) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(n))
    }

    /// Labels a single integer.
    ///
    /// `0` is divisible by everything and gets the first rule's text.
    pub fn label(&self, n: u64) -> Entry {
        match self.first_match(n) {
            Some(rule) => Entry::Replacement(rule.replacement.clone()),
            None => Entry::Original(n),
        }
    }

    /// Shared instance of the default rules.
    pub(crate) fn shared_default() -> &'static Configuration {
        static DEFAULT: OnceLock<Configuration> = OnceLock::new();
        DEFAULT.get_or_init(Configuration::default)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        let rules = DEFAULT_RULES
            .iter()
            .map(|&(divisor, replacement)| Rule {
                divisor,
                replacement: replacement.to_owned(),
            })
            .collect();
        Self { rules }
    }
}

/// A `rules` value that is not an array counts as no rules.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LooseRules {
    List(Vec<LooseRule>),
    Other(serde::de::IgnoredAny),
}

/// A list element that is not a rule object fails on its divisor.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum LooseRule {
    Fields(RuleRepr),
    Other(serde::de::IgnoredAny),
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct ConfigurationRepr {
    #[serde(default)]
    rules: Option<LooseRules>,
}

#[cfg(feature = "serde")]
impl TryFrom<ConfigurationRepr> for Configuration {
    type Error = FizzBuzzError;

    fn try_from(repr: ConfigurationRepr) -> Result<Self> {
        let raw = match repr.rules {
            Some(LooseRules::List(raw)) if !raw.is_empty() => raw,
            _ => return Err(FizzBuzzError::EmptyConfiguration),
        };
        let rules = raw
            .into_iter()
            .map(|rule| match rule {
                LooseRule::Fields(fields) => Rule::try_from(fields),
                LooseRule::Other(_) => Err(FizzBuzzError::InvalidDivisor),
            })
            .collect::<Result<Vec<_>>>()?;
        Configuration::new(rules)
    }
}

/// Chained construction of a [`Configuration`].
///
/// Rules are validated as they are added; `build` reports the first
/// failure in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ConfigurationBuilder {
    rules: Vec<Rule>,
    error: Option<FizzBuzzError>,
}

impl ConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a rule with the lowest priority so far.
    pub fn with_rule<D>(mut self, divisor: D, replacement: impl Into<String>) -> Self
    where
        D: TryInto<Divisor>,
        FizzBuzzError: From<D::Error>,
    {
        if self.error.is_some() {
            return self;
        }
        match Rule::new(divisor, replacement) {
            Ok(rule) => self.rules.push(rule),
            Err(err) => self.error = Some(err),
        }
        self
    }

    /// Appends already-validated rules, keeping their order.
    pub fn with_rules(mut self, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.rules.extend(rules);
        self
    }

    pub fn build(self) -> Result<Configuration> {
        if let Some(err) = self.error {
            return Err(err);
        }
        Configuration::new(self.rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(config: &Configuration) -> Vec<(u64, &str)> {
        config
            .rules()
            .iter()
            .map(|r| (r.divisor().get(), r.replacement()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = Configuration::default();
        assert_eq!(
            texts(&config),
            vec![(15, "FizzBuzz"), (3, "Fizz"), (5, "Buzz")]
        );
    }

    #[test]
    fn test_default_rules_are_valid() {
        for (divisor, replacement) in DEFAULT_RULES {
            assert!(Rule::new(divisor, replacement).is_ok());
        }
    }

    #[test]
    fn test_shared_default_matches_default() {
        assert_eq!(Configuration::shared_default(), &Configuration::default());
    }

    #[test]
    fn test_new_empty() {
        assert_eq!(
            Configuration::new(Vec::new()),
            Err(FizzBuzzError::EmptyConfiguration)
        );
    }

    #[test]
    fn test_builder_ok() {
        let config = Configuration::builder()
            .with_rule(2, "Even")
            .with_rule(3.0, "Three")
            .build()
            .unwrap();
        assert_eq!(texts(&config), vec![(2, "Even"), (3, "Three")]);
    }

    #[test]
    fn test_builder_empty() {
        assert_eq!(
            ConfigurationBuilder::new().build(),
            Err(FizzBuzzError::EmptyConfiguration)
        );
    }

    #[test]
    fn test_builder_bad_divisor() {
        let result = Configuration::builder().with_rule(0, "X").build();
        assert_eq!(result, Err(FizzBuzzError::InvalidDivisor));
    }

    #[test]
    fn test_builder_bad_replacement() {
        let result = Configuration::builder().with_rule(3, "").build();
        assert_eq!(result, Err(FizzBuzzError::InvalidReplacement));
    }

    #[test]
    fn test_builder_reports_first_failure() {
        let result = Configuration::builder()
            .with_rule(3, "Fizz")
            .with_rule(5, "   ")
            .with_rule(-7, "Bang")
            .build();
        assert_eq!(result, Err(FizzBuzzError::InvalidReplacement));
    }

    #[test]
    fn test_builder_with_rules() {
        let config = Configuration::builder()
            .with_rules(Configuration::default().rules().iter().cloned())
            .with_rule(7, "Bang")
            .build()
            .unwrap();
        assert_eq!(config.rules().len(), 4);
        assert_eq!(config.rules()[3].replacement(), "Bang");
    }

    #[test]
    fn test_first_match_respects_order() {
        let config = Configuration::default();
        assert_eq!(config.first_match(30).map(Rule::replacement), Some("FizzBuzz"));
        assert_eq!(config.first_match(6).map(Rule::replacement), Some("Fizz"));
        assert_eq!(config.first_match(10).map(Rule::replacement), Some("Buzz"));
        assert!(config.first_match(7).is_none());
    }

    #[test]
    fn test_shadowed_rule_never_fires() {
        // 3 before 15: the 15 rule is unreachable.
        let config = Configuration::builder()
            .with_rule(3, "Fizz")
            .with_rule(15, "FizzBuzz")
            .build()
            .unwrap();
        assert_eq!(config.label(15), Entry::Replacement("Fizz".into()));
        assert_eq!(config.label(45), Entry::Replacement("Fizz".into()));
    }

    #[test]
    fn test_label_zero_takes_first_rule() {
        let config = Configuration::default();
        assert_eq!(config.label(0), Entry::Replacement("FizzBuzz".into()));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn test_deserialize_config() {
        let json = r#"{"rules": [
            {"divisor": 14, "replacement": "FizzBang"},
            {"divisor": 2, "replacement": "Fizz"},
            {"divisor": 7, "replacement": "Bang"}
        ]}"#;
        let config: Configuration = serde_json::from_str(json).unwrap();
        assert_eq!(config.rules().len(), 3);
        assert_eq!(config.label(14), Entry::Replacement("FizzBang".into()));
    }

    #[test]
    fn test_deserialize_empty_rules() {
        let err = serde_json::from_str::<Configuration>(r#"{"rules": []}"#).unwrap_err();
        assert!(err
            .to_string()
            .contains("Configuration must contain at least one rule"));
    }

    fn config_error(json: &str) -> String {
        serde_json::from_str::<Configuration>(json)
            .unwrap_err()
            .to_string()
    }

    #[test]
    fn test_deserialize_missing_or_mistyped_rules() {
        const EMPTY: &str = "Configuration must contain at least one rule";
        assert!(config_error("{}").contains(EMPTY));
        assert!(config_error(r#"{"rules": null}"#).contains(EMPTY));
        assert!(config_error(r#"{"rules": 5}"#).contains(EMPTY));
        assert!(config_error(r#"{"rules": {"divisor": 3}}"#).contains(EMPTY));
    }

    #[test]
    fn test_deserialize_mistyped_rule_fields() {
        assert!(
            config_error(r#"{"rules": [{"divisor": "3", "replacement": "Fizz"}]}"#)
                .contains("Rule divisors must be positive integers")
        );
        assert!(config_error(r#"{"rules": [{"replacement": "X"}]}"#)
            .contains("Rule divisors must be positive integers"));
        assert!(config_error(r#"{"rules": [{"divisor": 3, "replacement": 5}]}"#)
            .contains("Rule replacements must be non-empty strings"));
        assert!(config_error(r#"{"rules": [7]}"#)
            .contains("Rule divisors must be positive integers"));
    }

    #[test]
    fn test_deserialize_reports_first_bad_rule() {
        let json = r#"{"rules": [
            {"divisor": 3, "replacement": "Fizz"},
            {"divisor": 5, "replacement": ""},
            {"divisor": 0, "replacement": "Zero"}
        ]}"#;
        assert!(config_error(json).contains("Rule replacements must be non-empty strings"));
    }

    #[test]
    fn test_serialize_round_trip_default() {
        let json = serde_json::to_string(&Configuration::default()).unwrap();
        let back: Configuration = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Configuration::default());
    }
}
