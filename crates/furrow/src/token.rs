//! Flat token stream produced by the tokenizer.

use std::fmt;

use furrow_keywords::StepKeyword;

/// Kind of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum TokenKind {
    /// `Feature:` line.
    Feature,
    /// `Background:` line.
    Background,
    /// `Scenario:` line.
    Scenario,
    /// `Scenario Outline:` line.
    ScenarioOutline,
    /// `Examples:` line.
    Examples,
    /// One `@word` annotation.
    Tag,
    /// Step line; records which keyword family matched.
    Step(StepKeyword),
    /// Free text following a feature line.
    FeatureDescription,
    /// `|a|b|` table line.
    Row,
    /// Triple-quoted block following a step.
    Multiline,
}

impl TokenKind {
    /// Snake-case name of the kind.
    ///
    /// # Examples
    /// ```
    /// use furrow::TokenKind;
    /// use furrow_keywords::StepKeyword;
    ///
    /// assert_eq!(TokenKind::ScenarioOutline.name(), "scenario_outline");
    /// assert_eq!(TokenKind::Step(StepKeyword::And).name(), "step");
    /// ```
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Background => "background",
            Self::Scenario => "scenario",
            Self::ScenarioOutline => "scenario_outline",
            Self::Examples => "examples",
            Self::Tag => "tag",
            Self::Step(_) => "step",
            Self::FeatureDescription => "feature_description",
            Self::Row => "row",
            Self::Multiline => "multiline",
        }
    }

    /// Return `true` for kinds that own steps.
    #[must_use]
    pub const fn is_container(&self) -> bool {
        matches!(
            self,
            Self::Background | Self::Scenario | Self::ScenarioOutline
        )
    }

    /// Return `true` for step tokens of any family.
    #[must_use]
    pub const fn is_step(&self) -> bool {
        matches!(self, Self::Step(_))
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One lexical unit of a feature document.
///
/// `line` is the 0-based index of the physical source line, counting blank
/// and comment lines. Description and multiline tokens carry the index of
/// their first line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// Token kind.
    pub kind: TokenKind,
    /// Literal keyword as written, `@` for tags, empty for free text.
    pub keyword: String,
    /// Keyword-stripped payload.
    pub text: String,
    /// Originating source line.
    pub line: usize,
}

impl Token {
    /// Create a token.
    #[must_use]
    pub fn new(
        kind: TokenKind,
        keyword: impl Into<String>,
        text: impl Into<String>,
        line: usize,
    ) -> Self {
        Self {
            kind,
            keyword: keyword.into(),
            text: text.into(),
            line,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {:?}", self.line, self.kind, self.text)
    }
}
