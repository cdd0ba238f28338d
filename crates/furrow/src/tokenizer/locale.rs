//! `# language: <code>` directive detection.

/// Extract the locale code from a language directive line.
///
/// Matching ignores ASCII case and tolerates whitespace around `#` and `:`.
///
/// # Examples
/// ```
/// use furrow::language_directive;
///
/// assert_eq!(language_directive("# language: fr"), Some("fr"));
/// assert_eq!(language_directive("#LANGUAGE :en-GB  "), Some("en-GB"));
/// assert_eq!(language_directive("# a comment"), None);
/// ```
#[must_use]
pub fn language_directive(line: &str) -> Option<&str> {
    const KEY: &str = "language";
    let rest = line.trim().strip_prefix('#')?.trim_start();
    let key = rest.get(..KEY.len())?;
    if !key.eq_ignore_ascii_case(KEY) {
        return None;
    }
    let code = rest.get(KEY.len()..)?.trim_start().strip_prefix(':')?.trim();
    if code.is_empty() || code.contains(char::is_whitespace) {
        return None;
    }
    Some(code)
}

/// Return the code of the last language directive among `lines`.
pub(super) fn last_directive<S: AsRef<str>>(lines: &[S]) -> Option<&str> {
    lines
        .iter()
        .filter_map(|line| language_directive(line.as_ref()))
        .next_back()
}
