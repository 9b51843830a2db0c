//! Utility functions for SQLite storage operations.

/// Bind parameters allowed in a single statement.
///
/// SQLite builds may be compiled with a limit as low as 999
/// (SQLITE_MAX_VARIABLE_NUMBER); 500 leaves room for the rest of the statement.
pub const SQLITE_MAX_PARAMS_CHUNK: usize = 500;

/// Splits rows for a multi-row `INSERT` so that no statement binds more than
/// [`SQLITE_MAX_PARAMS_CHUNK`] parameters.
///
/// `columns_per_row` is the number of bound values each row contributes.
pub fn chunk_rows_for_sqlite<T>(items: &[T], columns_per_row: usize) -> impl Iterator<Item = &[T]> {
    let rows_per_chunk = (SQLITE_MAX_PARAMS_CHUNK / columns_per_row.max(1)).max(1);
    items.chunks(rows_per_chunk)
}

/// Escapes `%`, `_` and the escape character itself so `text` matches
/// literally inside a `LIKE ... ESCAPE '\'` pattern.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

/// Escape character used with [`escape_like`].
pub const LIKE_ESCAPE: char = '\\';

/// `%text%` with `text` escaped.
pub fn contains_pattern(text: &str) -> String {
    format!("%{}%", escape_like(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_rows_empty() {
        let items: Vec<i32> = vec![];
        assert_eq!(chunk_rows_for_sqlite(&items, 9).count(), 0);
    }

    #[test]
    fn test_chunk_rows_respects_param_limit() {
        let items: Vec<i32> = (0..200).collect();
        let chunks: Vec<_> = chunk_rows_for_sqlite(&items, 9).collect();
        assert!(chunks.iter().all(|c| c.len() * 9 <= SQLITE_MAX_PARAMS_CHUNK));
        assert_eq!(chunks.iter().map(|c| c.len()).sum::<usize>(), 200);
        assert_eq!(chunks[0].len(), 55);
    }

    #[test]
    fn test_chunk_rows_wide_rows() {
        let items: Vec<i32> = (0..3).collect();
        let chunks: Vec<_> = chunk_rows_for_sqlite(&items, 10_000).collect();
        assert_eq!(chunks.len(), 3);
    }

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("shirt"), "shirt");
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("c:\\"), "c:\\\\");
        assert_eq!(contains_pattern("5%"), "%5\\%%");
    }
}
