//! Table row cell splitting.

/// Split a `|a|b|c|` line into trimmed cells.
///
/// One leading and one trailing pipe are removed before splitting, so an
/// empty last cell written as `|n||` survives. A line with no cell content
/// yields a single empty cell. Escaped pipes are not recognised.
///
/// # Examples
/// ```
/// use furrow::row::split_cells;
///
/// assert_eq!(split_cells("| a | b |"), ["a", "b"]);
/// assert_eq!(split_cells("|n||"), ["n", ""]);
/// assert_eq!(split_cells("|"), [""]);
/// ```
#[must_use]
pub fn split_cells(line: &str) -> Vec<String> {
    let line = line.trim();
    let inner = line.strip_prefix('|').unwrap_or(line);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    inner.split('|').map(|cell| cell.trim().to_string()).collect()
}
