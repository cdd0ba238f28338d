//! Ordered keyword matcher chain compiled from one locale record.
//!
//! Every synonym becomes its own anchored regular expression. Within each
//! group (structural keywords, step keywords) matchers are tried longest
//! synonym first, so `Scenario Outline` beats `Scenario` and `Et que` beats
//! `Et`.

use furrow_keywords::{Keywords, StepKeyword};
use regex::Regex;

use crate::error::ParseError;
use crate::token::TokenKind;

/// Successful keyword match on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Matched<'a> {
    pub(super) kind: TokenKind,
    pub(super) keyword: &'a str,
    pub(super) text: &'a str,
}

#[derive(Debug)]
struct KeywordMatcher {
    kind: TokenKind,
    keyword: String,
    pattern: Regex,
}

impl KeywordMatcher {
    fn compile(kind: TokenKind, keyword: &str) -> Result<Self, regex::Error> {
        let separator = match (kind.is_step(), needs_separator(keyword)) {
            (false, true) => r"(?:\s*:\s*|\s+|$)",
            (false, false) => r"\s*:?\s*",
            (true, true) => r"(?:\s+|$)",
            (true, false) => r"\s*",
        };
        let pattern = Regex::new(&format!(
            "^{}{separator}(?P<text>.*)$",
            regex::escape(keyword)
        ))?;
        Ok(Self {
            kind,
            keyword: keyword.to_string(),
            pattern,
        })
    }

    fn captures<'a>(&'a self, line: &'a str) -> Option<Matched<'a>> {
        let text = self.pattern.captures(line)?.name("text")?.as_str();
        Some(Matched {
            kind: self.kind,
            keyword: &self.keyword,
            text: text.trim(),
        })
    }
}

/// Keywords ending in a letter of a space-separated script must be followed
/// by whitespace, a colon or the end of the line.
fn needs_separator(keyword: &str) -> bool {
    keyword
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() && c < '\u{2E80}')
}

fn compile_group(entries: &[(TokenKind, &[String])]) -> Result<Vec<KeywordMatcher>, regex::Error> {
    let mut matchers = entries
        .iter()
        .flat_map(|(kind, synonyms)| synonyms.iter().map(move |kw| (*kind, kw)))
        .map(|(kind, kw)| KeywordMatcher::compile(kind, kw))
        .collect::<Result<Vec<_>, _>>()?;
    matchers.sort_by_key(|m| std::cmp::Reverse(m.keyword.chars().count()));
    Ok(matchers)
}

/// Compiled matchers for structural and step keywords of one locale.
#[derive(Debug)]
pub(super) struct MatcherChain {
    structural: Vec<KeywordMatcher>,
    steps: Vec<KeywordMatcher>,
}

impl MatcherChain {
    pub(super) fn compile(keywords: &Keywords) -> Result<Self, ParseError> {
        let structural = compile_group(&[
            (TokenKind::Feature, keywords.feature.as_slice()),
            (TokenKind::Background, keywords.background.as_slice()),
            (TokenKind::Scenario, keywords.scenario.as_slice()),
            (TokenKind::ScenarioOutline, keywords.scenario_outline.as_slice()),
            (TokenKind::Examples, keywords.examples.as_slice()),
        ])?;
        let step_entries: Vec<_> = StepKeyword::ALL
            .into_iter()
            .map(|kw| (TokenKind::Step(kw), keywords.step(kw)))
            .collect();
        let steps = compile_group(&step_entries)?;
        Ok(Self { structural, steps })
    }

    /// Match `feature`, `background`, `scenario`, `scenario_outline` or
    /// `examples`.
    pub(super) fn structural<'a>(&'a self, line: &'a str) -> Option<Matched<'a>> {
        self.structural.iter().find_map(|m| m.captures(line))
    }

    /// Match a step keyword of any family.
    pub(super) fn step<'a>(&'a self, line: &'a str) -> Option<Matched<'a>> {
        self.steps.iter().find_map(|m| m.captures(line))
    }
}
