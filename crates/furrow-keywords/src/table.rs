//! Keyword records and the locale lookup table.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use crate::builtin;
use crate::errors::KeywordTableError;
use crate::step_keyword::StepKeyword;

/// Literal keyword synonyms recognised for one locale.
///
/// Each key holds an ordered list of synonyms. When loading from JSON a key
/// may be written as a single string or as a list; surrounding whitespace is
/// trimmed so files using the `"Given "` convention load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Keywords {
    /// Synonyms opening a feature.
    #[serde(deserialize_with = "synonyms")]
    pub feature: Vec<String>,
    /// Synonyms opening a background.
    #[serde(deserialize_with = "synonyms")]
    pub background: Vec<String>,
    /// Synonyms opening a scenario.
    #[serde(deserialize_with = "synonyms")]
    pub scenario: Vec<String>,
    /// Synonyms opening a scenario outline.
    #[serde(alias = "scenarioOutline", deserialize_with = "synonyms")]
    pub scenario_outline: Vec<String>,
    /// Synonyms opening an examples block.
    #[serde(deserialize_with = "synonyms")]
    pub examples: Vec<String>,
    /// `Given` step synonyms.
    #[serde(deserialize_with = "synonyms")]
    pub given: Vec<String>,
    /// `When` step synonyms.
    #[serde(deserialize_with = "synonyms")]
    pub when: Vec<String>,
    /// `Then` step synonyms.
    #[serde(deserialize_with = "synonyms")]
    pub then: Vec<String>,
    /// `And` step synonyms.
    #[serde(deserialize_with = "synonyms")]
    pub and: Vec<String>,
    /// `But` step synonyms.
    #[serde(deserialize_with = "synonyms")]
    pub but: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn synonyms<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    };
    Ok(raw
        .into_iter()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .collect())
}

impl Keywords {
    /// Return the synonyms for a step keyword family.
    ///
    /// # Examples
    /// ```
    /// use furrow_keywords::{KeywordTable, StepKeyword};
    ///
    /// let table = KeywordTable::builtin();
    /// let en = table.lookup("en").unwrap();
    /// assert_eq!(en.step(StepKeyword::Then), ["Then"]);
    /// ```
    #[must_use]
    pub fn step(&self, keyword: StepKeyword) -> &[String] {
        match keyword {
            StepKeyword::Given => &self.given,
            StepKeyword::When => &self.when,
            StepKeyword::Then => &self.then,
            StepKeyword::And => &self.and,
            StepKeyword::But => &self.but,
        }
    }

    fn entries(&self) -> [(&'static str, &[String]); 10] {
        [
            ("feature", self.feature.as_slice()),
            ("background", self.background.as_slice()),
            ("scenario", self.scenario.as_slice()),
            ("scenario_outline", self.scenario_outline.as_slice()),
            ("examples", self.examples.as_slice()),
            ("given", self.given.as_slice()),
            ("when", self.when.as_slice()),
            ("then", self.then.as_slice()),
            ("and", self.and.as_slice()),
            ("but", self.but.as_slice()),
        ]
    }

    /// Check that every key supplies at least one synonym.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordTableError::MissingKeyword`] naming the first empty
    /// key.
    pub fn validate(&self, locale: &str) -> Result<(), KeywordTableError> {
        match self.entries().into_iter().find(|(_, values)| values.is_empty()) {
            Some((key, _)) => Err(KeywordTableError::MissingKeyword {
                locale: locale.to_string(),
                key,
            }),
            None => Ok(()),
        }
    }
}

/// Mapping from locale code to [`Keywords`], with a designated base locale.
///
/// The table is consumed read-only by the tokenizer. The base locale applies
/// whenever a document carries no `# language:` directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTable {
    locales: BTreeMap<String, Keywords>,
    base: String,
}

impl KeywordTable {
    /// Create a table holding a single locale, which becomes the base.
    #[must_use]
    pub fn new(base: impl Into<String>, keywords: Keywords) -> Self {
        let base = base.into();
        let mut locales = BTreeMap::new();
        locales.insert(base.clone(), keywords);
        Self { locales, base }
    }

    /// Table shipping English (base), French, German and Spanish keywords.
    ///
    /// # Examples
    /// ```
    /// use furrow_keywords::KeywordTable;
    ///
    /// let table = KeywordTable::builtin();
    /// assert_eq!(table.base_locale(), "en");
    /// assert!(table.lookup("fr").is_some());
    /// ```
    #[must_use]
    pub fn builtin() -> Self {
        builtin::LOCALES
            .iter()
            .fold(Self::new(builtin::BASE, builtin::EN.to_keywords()), |table, (code, raw)| {
                table.with_locale(*code, raw.to_keywords())
            })
    }

    /// Decode a JSON object mapping locale codes to keyword records.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordTableError::Json`] for malformed input,
    /// [`KeywordTableError::MissingKeyword`] when a record leaves a key
    /// empty, and [`KeywordTableError::UnknownBase`] when `base` names no
    /// record.
    ///
    /// # Examples
    /// ```
    /// use furrow_keywords::KeywordTable;
    ///
    /// let json = r#"{"xx": {
    ///     "feature": "Feat", "background": "Bg", "scenario": "Sc",
    ///     "scenarioOutline": "Outline", "examples": "Ex",
    ///     "given": ["Given ", "*"], "when": "When", "then": "Then",
    ///     "and": "And", "but": "But"
    /// }}"#;
    /// let table = KeywordTable::from_json(json, "xx").unwrap();
    /// assert_eq!(table.lookup("xx").unwrap().given, ["Given", "*"]);
    /// ```
    pub fn from_json(json: &str, base: &str) -> Result<Self, KeywordTableError> {
        let locales: BTreeMap<String, Keywords> = serde_json::from_str(json)?;
        for (code, keywords) in &locales {
            keywords.validate(code)?;
        }
        if !locales.contains_key(base) {
            return Err(KeywordTableError::UnknownBase(base.to_string()));
        }
        Ok(Self {
            locales,
            base: base.to_string(),
        })
    }

    /// Add or replace a locale record.
    #[must_use]
    pub fn with_locale(mut self, code: impl Into<String>, keywords: Keywords) -> Self {
        self.locales.insert(code.into(), keywords);
        self
    }

    /// Change the base locale.
    ///
    /// # Errors
    ///
    /// Returns [`KeywordTableError::UnknownBase`] when `code` has no record.
    pub fn with_base(mut self, code: &str) -> Result<Self, KeywordTableError> {
        if !self.locales.contains_key(code) {
            return Err(KeywordTableError::UnknownBase(code.to_string()));
        }
        code.clone_into(&mut self.base);
        Ok(self)
    }

    /// Locale used when a document has no language directive.
    #[must_use]
    pub fn base_locale(&self) -> &str {
        &self.base
    }

    /// Look up the record for `code`.
    ///
    /// An exact key wins; otherwise keys are compared ignoring ASCII case so
    /// `# language: FR` finds `fr`.
    #[must_use]
    pub fn lookup(&self, code: &str) -> Option<&Keywords> {
        self.locales.get(code).or_else(|| {
            self.locales
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(code))
                .map(|(_, keywords)| keywords)
        })
    }

    /// Iterate over the known locale codes in sorted order.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::builtin()
    }
}
