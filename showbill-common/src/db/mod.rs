//! Database schema, models, and queries

pub mod artists;
pub mod init;
pub mod models;
pub mod shows;
pub mod venues;

pub use init::*;
pub use models::*;

/// Build a substring LIKE pattern from a user-supplied term.
///
/// `%` and `_` in the term are literal characters, not wildcards; queries
/// using the pattern must declare `ESCAPE '\'`. An empty term reduces to a
/// match-all pattern.
pub(crate) fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[cfg(test)]
mod tests {
    use super::like_pattern;

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
    }

    #[test]
    fn empty_term_matches_all() {
        assert_eq!(like_pattern(""), "%%");
    }
}
