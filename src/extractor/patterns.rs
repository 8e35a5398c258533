use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ExtractorConfig;

pub static ROOM_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+[A-Z]*\s*-\s*[0-9]+$").unwrap());
pub static ALL_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
pub static DECIMAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9.]+$").unwrap());
pub static SHORT_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{1,3}[0-9]+[A-Z]*$").unwrap());
pub static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{1,2}\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)\s+[0-9]{4}$")
        .unwrap()
});
pub static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap());

// Name shapes, matched as prefixes
pub static FIRST_LAST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+ [A-Z][a-z]+").unwrap());
pub static LAST_COMMA_FIRST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+, [A-Z][a-z]+").unwrap());
pub static UPPER_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z]+ [A-Z]+").unwrap());

static EXCLUDED_PATTERNS: [&Lazy<Regex>; 6] = [
    &ROOM_NUMBER,
    &ALL_DIGITS,
    &DECIMAL,
    &SHORT_CODE,
    &DAY_MONTH_YEAR,
    &ISO_DATE,
];

/// One reason a trimmed value cannot be a person's name.
#[derive(Debug, Clone)]
pub enum Exclusion {
    /// At most this many characters.
    MaxLength(usize),
    Literal(String),
    Contains(String),
    Pattern(&'static Lazy<Regex>),
}

impl Exclusion {
    pub fn rejects(&self, value: &str) -> bool {
        match self {
            Exclusion::MaxLength(max) => value.chars().count() <= *max,
            Exclusion::Literal(literal) => value == literal.as_str(),
            Exclusion::Contains(needle) => value.contains(needle.as_str()),
            Exclusion::Pattern(re) => re.is_match(value),
        }
    }
}

/// The name-validity predicate as an ordered list of exclusions.
#[derive(Debug, Clone)]
pub struct NameRules {
    exclusions: Vec<Exclusion>,
}

impl NameRules {
    pub fn new(config: &ExtractorConfig) -> Self {
        let mut exclusions = vec![Exclusion::MaxLength(2)];
        exclusions.extend(
            config
                .excluded_literals
                .iter()
                .cloned()
                .map(Exclusion::Literal),
        );
        exclusions.extend(
            config
                .excluded_substrings
                .iter()
                .filter(|s| !s.is_empty())
                .cloned()
                .map(Exclusion::Contains),
        );
        exclusions.extend(EXCLUDED_PATTERNS.iter().map(|re| Exclusion::Pattern(*re)));

        Self { exclusions }
    }

    /// Add a rule after the built-in ones.
    pub fn push(&mut self, exclusion: Exclusion) {
        self.exclusions.push(exclusion);
    }

    /// `value` must already be trimmed.
    #[must_use]
    pub fn is_valid_name(&self, value: &str) -> bool {
        !self.exclusions.iter().any(|rule| rule.rejects(value))
    }
}

impl Default for NameRules {
    fn default() -> Self {
        Self::new(&ExtractorConfig::default())
    }
}

/// Whether a trimmed value looks like a person's name under the default rules.
#[must_use]
pub fn is_valid_person_name(value: &str) -> bool {
    static DEFAULT_RULES: Lazy<NameRules> = Lazy::new(NameRules::default);
    DEFAULT_RULES.is_valid_name(value.trim())
}
