//! Line-oriented tokenizer.
//!
//! The tokenizer runs in a single pass over the document lines. Before the
//! pass it resolves the effective locale from the last `# language:`
//! directive and discards blank and comment lines; line indices in the
//! emitted tokens still refer to the physical input lines.
//!
//! Each remaining line is dispatched in a fixed priority order:
//!
//! 1. structural keywords (`feature`, `background`, `scenario`,
//!    `scenario_outline`, `examples`)
//! 2. tag lines (every `@word` on a line starting with `@`)
//! 3. step keywords
//! 4. feature description text, while the last token is a feature
//! 5. multiline block opening, while the last token is a step
//! 6. table rows
//!
//! While a multiline block is open every line belongs to it.

mod locale;
mod matcher;
mod multiline;

use furrow_keywords::KeywordTable;
use tracing::{debug, instrument, trace};

use crate::error::ParseError;
use crate::token::{Token, TokenKind};

pub use locale::language_directive;

use self::matcher::MatcherChain;
use self::multiline::{Multiline, Transition};

/// Stateless tokenizer bound to a keyword table.
///
/// Every call to [`tokenize`](Self::tokenize) owns its own scratch state, so
/// one tokenizer may be shared across threads.
///
/// # Examples
/// ```
/// use furrow::{Tokenizer, TokenKind};
/// use furrow_keywords::KeywordTable;
///
/// let table = KeywordTable::builtin();
/// let tokens = Tokenizer::new(&table).tokenize_str("Feature: Testing").unwrap();
/// assert_eq!(tokens.len(), 1);
/// assert_eq!(tokens[0].kind, TokenKind::Feature);
/// assert_eq!(tokens[0].text, "Testing");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'t> {
    table: &'t KeywordTable,
}

impl<'t> Tokenizer<'t> {
    /// Create a tokenizer reading keywords from `table`.
    #[must_use]
    pub fn new(table: &'t KeywordTable) -> Self {
        Self { table }
    }

    /// Effective locale of `lines`: the last language directive, or the
    /// table's base locale.
    #[must_use]
    pub fn resolve_locale<S: AsRef<str>>(&self, lines: &[S]) -> String {
        locale::last_directive(lines)
            .unwrap_or_else(|| self.table.base_locale())
            .to_string()
    }

    /// Tokenize newline-delimited `source`.
    ///
    /// # Errors
    ///
    /// See [`tokenize`](Self::tokenize).
    pub fn tokenize_str(&self, source: &str) -> Result<Vec<Token>, ParseError> {
        self.tokenize(source.lines())
    }

    /// Tokenize a sequence of lines.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::LocaleNotFound`] when the resolved locale has no
    /// keyword record, and [`ParseError::Matcher`] if a keyword matcher
    /// cannot be compiled.
    #[instrument(level = "debug", skip_all)]
    pub fn tokenize<I, S>(&self, lines: I) -> Result<Vec<Token>, ParseError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(|line| line.as_ref().trim().to_string())
            .collect();
        let locale = self.resolve_locale(&lines);
        let keywords = self
            .table
            .lookup(&locale)
            .ok_or_else(|| ParseError::LocaleNotFound {
                locale: locale.clone(),
            })?;
        let matchers = MatcherChain::compile(keywords)?;
        debug!(%locale, lines = lines.len(), "tokenizing document");

        let mut scanner = Scanner::new(&matchers);
        for (index, line) in lines.iter().enumerate() {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            scanner.scan(index, line);
        }
        Ok(scanner.finish())
    }
}

/// Per-call scratch state.
struct Scanner<'m> {
    matchers: &'m MatcherChain,
    tokens: Vec<Token>,
    description: Vec<String>,
    description_line: usize,
    block: Multiline,
}

impl<'m> Scanner<'m> {
    fn new(matchers: &'m MatcherChain) -> Self {
        Self {
            matchers,
            tokens: Vec::new(),
            description: Vec::new(),
            description_line: 0,
            block: Multiline::default(),
        }
    }

    fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(|token| token.kind)
    }

    fn scan(&mut self, line: usize, text: &str) {
        if self.block.is_open() {
            if let Transition::Closed(token) = self.block.feed(text) {
                self.emit(token);
            }
            return;
        }

        if let Some(matched) = self.matchers.structural(text) {
            let token = Token::new(matched.kind, matched.keyword, matched.text, line);
            self.emit(token);
            return;
        }

        if text.starts_with('@') {
            let tags = tag_names(text);
            if !tags.is_empty() {
                for name in tags {
                    self.emit(Token::new(TokenKind::Tag, "@", name, line));
                }
                return;
            }
        }

        if let Some(matched) = self.matchers.step(text) {
            let token = Token::new(matched.kind, matched.keyword, matched.text, line);
            self.emit(token);
            return;
        }

        match self.last_kind() {
            Some(TokenKind::Feature) => {
                if self.description.is_empty() {
                    self.description_line = line;
                }
                self.description.push(text.to_string());
                return;
            }
            Some(TokenKind::Step(_)) => match self.block.open(line, text) {
                Transition::Ignored => {}
                Transition::Consumed => return,
                Transition::Closed(token) => {
                    self.emit(token);
                    return;
                }
            },
            _ => {}
        }

        if text.starts_with('|') {
            self.emit(Token::new(TokenKind::Row, "", text, line));
            return;
        }

        trace!(line, "ignoring unrecognised line");
    }

    /// Append `token`, flushing any pending feature description first.
    fn emit(&mut self, token: Token) {
        self.flush_description();
        self.tokens.push(token);
    }

    fn flush_description(&mut self) {
        if self.description.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.description).join("\n");
        self.tokens.push(Token::new(
            TokenKind::FeatureDescription,
            "",
            text,
            self.description_line,
        ));
    }

    fn finish(mut self) -> Vec<Token> {
        self.flush_description();
        if let Some(line) = self.block.unclosed_line() {
            debug!(line, "dropping unclosed multiline block");
        }
        self.tokens
    }
}

/// Every `@word` on a tag line, in order.
fn tag_names(text: &str) -> Vec<&str> {
    text.split('@')
        .skip(1)
        .filter_map(|chunk| {
            let end = chunk
                .find(|c: char| !(c.is_alphanumeric() || c == '_'))
                .unwrap_or(chunk.len());
            chunk.get(..end).filter(|name| !name.is_empty())
        })
        .collect()
}
