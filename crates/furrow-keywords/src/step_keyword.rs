//! Step keyword families.
//!
//! Every step line starts with one synonym from one of five families. The
//! tokenizer records which family matched so the tree builder can resolve
//! conjunctions without knowing any locale text.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Family of a step keyword.
///
/// `And` and `But` are conjunctions; [`resolve`](Self::resolve) maps them
/// onto the primary keyword that precedes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum StepKeyword {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action.
    When,
    /// Assert the expected outcome.
    Then,
    /// Additional conditions sharing context with the previous step.
    And,
    /// Negative or contrasting conditions.
    But,
}

impl StepKeyword {
    /// All families in matching order.
    pub const ALL: [Self; 5] = [Self::Given, Self::When, Self::Then, Self::And, Self::But];

    /// Return the canonical English name of the family.
    ///
    /// # Examples
    ///
    /// ```
    /// use furrow_keywords::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::But.as_str(), "But");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Return `true` for `And` and `But`.
    #[must_use]
    pub const fn is_conjunction(&self) -> bool {
        matches!(self, Self::And | Self::But)
    }

    /// Resolve conjunctions to the family of the previous primary step.
    ///
    /// For `And`/`But` the value stored in `prev` is returned, defaulting to
    /// `Given` when nothing precedes. Primary keywords update `prev` and are
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use furrow_keywords::StepKeyword;
    ///
    /// let mut prev = Some(StepKeyword::Given);
    /// assert_eq!(StepKeyword::And.resolve(&mut prev), StepKeyword::Given);
    /// assert_eq!(StepKeyword::When.resolve(&mut prev), StepKeyword::When);
    /// assert_eq!(prev, Some(StepKeyword::When));
    /// ```
    #[must_use]
    pub fn resolve(self, prev: &mut Option<Self>) -> Self {
        if self.is_conjunction() {
            prev.as_ref().copied().unwrap_or(Self::Given)
        } else {
            *prev = Some(self);
            self
        }
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`StepKeyword`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepKeywordParseError(pub String);

impl fmt::Display for StepKeywordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid step keyword: {}", self.0)
    }
}

impl std::error::Error for StepKeywordParseError {}

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|kw| trimmed.eq_ignore_ascii_case(kw.as_str()))
            .ok_or_else(|| StepKeywordParseError(trimmed.to_string()))
    }
}

impl TryFrom<&str> for StepKeyword {
    type Error = StepKeywordParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}
