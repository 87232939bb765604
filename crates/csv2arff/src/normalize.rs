//! Cell-level cleanup applied before inference.
//!
//! Two passes run over the in-memory table, in place:
//!
//! 1. [`fill_empty_cells`] replaces every empty field (header included) with
//!    [`EMPTY_CELL_PLACEHOLDER`].
//! 2. [`normalize_rows`] rewrites every data cell with [`normalize_cell`]:
//!    lower-cased, CR/LF removed, quotes backslash-escaped, and wrapped in
//!    double quotes unless the result reads as a float.

use crate::input::DataTable;

/// Text substituted for empty fields.
pub const EMPTY_CELL_PLACEHOLDER: &str = "0";

/// Returns true if `value` reads as a floating-point number.
///
/// Accepts surrounding whitespace, an optional sign, decimal and exponent
/// forms, `inf`/`infinity`/`nan` in any case, and single underscores
/// between digits (`1_000.5`).
pub fn parses_as_float(value: &str) -> bool {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return false;
    }

    if !trimmed.contains('_') {
        return trimmed.parse::<f64>().is_ok();
    }

    let bytes = trimmed.as_bytes();
    let mut digits = String::with_capacity(trimmed.len());
    for (i, ch) in trimmed.char_indices() {
        if ch == '_' {
            let before = i.checked_sub(1).map(|p| bytes[p]);
            let after = bytes.get(i + 1).copied();
            match (before, after) {
                (Some(b), Some(a)) if b.is_ascii_digit() && a.is_ascii_digit() => continue,
                _ => return false,
            }
        }
        digits.push(ch);
    }
    digits.parse::<f64>().is_ok()
}

/// Normalize a single raw data cell.
pub fn normalize_cell(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let single_line: String = lowered.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    let escaped = single_line.replace('\'', "\\'").replace('"', "\\\"");

    if parses_as_float(&escaped) {
        escaped
    } else {
        format!("\"{}\"", escaped)
    }
}

/// Replace every empty field, header row included, with the placeholder.
pub fn fill_empty_cells(table: &mut DataTable) -> usize {
    let mut filled = 0;
    for cell in table
        .headers
        .iter_mut()
        .chain(table.rows.iter_mut().flatten())
    {
        if cell.is_empty() {
            *cell = EMPTY_CELL_PLACEHOLDER.to_string();
            filled += 1;
        }
    }
    filled
}

/// Normalize every data cell in place. Header cells are left untouched.
pub fn normalize_rows(table: &mut DataTable) {
    for cell in table.rows.iter_mut().flatten() {
        *cell = normalize_cell(cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_as_float() {
        assert!(parses_as_float("30"));
        assert!(parses_as_float("9.5"));
        assert!(parses_as_float("-0.25"));
        assert!(parses_as_float("+3"));
        assert!(parses_as_float("1e5"));
        assert!(parses_as_float("2.5E-3"));
        assert!(parses_as_float(".5"));
        assert!(parses_as_float("5."));
        assert!(parses_as_float(" 42 "));
        assert!(parses_as_float("inf"));
        assert!(parses_as_float("-Infinity"));
        assert!(parses_as_float("nan"));
        assert!(parses_as_float("1_000"));
        assert!(parses_as_float("1_000.000_1"));

        assert!(!parses_as_float(""));
        assert!(!parses_as_float("   "));
        assert!(!parses_as_float("abc"));
        assert!(!parses_as_float("1,5"));
        assert!(!parses_as_float("1e"));
        assert!(!parses_as_float("_1"));
        assert!(!parses_as_float("1_"));
        assert!(!parses_as_float("1__0"));
        assert!(!parses_as_float("0x10"));
        assert!(!parses_as_float("\"30\""));
    }

    #[test]
    fn test_normalize_numeric_stays_bare() {
        assert_eq!(normalize_cell("30"), "30");
        assert_eq!(normalize_cell("9.5\r\n"), "9.5");
        assert_eq!(normalize_cell("1E3"), "1e3");
    }

    #[test]
    fn test_normalize_text_is_lowercased_and_quoted() {
        assert_eq!(normalize_cell("Alice"), "\"alice\"");
        assert_eq!(normalize_cell("New York"), "\"new york\"");
    }

    #[test]
    fn test_normalize_strips_line_endings() {
        assert_eq!(normalize_cell("Bob\r\n"), "\"bob\"");
        assert_eq!(normalize_cell("\nBob"), "\"bob\"");
        assert_eq!(normalize_cell("multi\nline"), "\"multiline\"");
    }

    #[test]
    fn test_normalize_escapes_quotes() {
        assert_eq!(normalize_cell("O'Brien"), "\"o\\'brien\"");
        assert_eq!(normalize_cell("say \"hi\""), "\"say \\\"hi\\\"\"");
    }

    #[test]
    fn test_fill_empty_cells() {
        let mut table = DataTable::new(
            vec!["a".into(), "".into()],
            vec![vec!["".into(), "x".into()], vec!["1".into(), "".into()]],
        );
        assert_eq!(fill_empty_cells(&mut table), 3);
        assert_eq!(table.headers, vec!["a", "0"]);
        assert_eq!(table.rows[0], vec!["0", "x"]);
        assert_eq!(table.rows[1], vec!["1", "0"]);
    }

    #[test]
    fn test_normalize_rows_leaves_header() {
        let mut table = DataTable::new(
            vec!["Name".into()],
            vec![vec!["Alice".into()], vec!["7".into()]],
        );
        normalize_rows(&mut table);
        assert_eq!(table.headers, vec!["Name"]);
        assert_eq!(table.rows[0], vec!["\"alice\""]);
        assert_eq!(table.rows[1], vec!["7"]);
    }
}
