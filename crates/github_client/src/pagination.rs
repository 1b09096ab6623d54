//! Parsing of the GitHub `link` pagination header.
//!
//! GitHub paginates list endpoints with an RFC 8288 style header such as
//!
//! ```text
//! <https://api.github.com/repositories/1/actions/runs?page=2>; rel="next",
//! <https://api.github.com/repositories/1/actions/runs?page=5>; rel="last"
//! ```
//!
//! Only the `rel="last"` entry matters here: it tells the caller how many
//! pages exist in total.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;

static LAST_PAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)[&?]page=([0-9]+)>; rel="last""#).expect("last page pattern is valid")
});

/// Extracts the page number of the `rel="last"` entry of a `link` header.
///
/// Returns `None` when there is no such entry or its page number does not fit
/// in a `u32`.
///
/// # Examples
///
/// ```
/// use github_client::parse_last_page;
///
/// let link = r#"<https://api.github.com/repos/o/r/actions/runs?status=completed&per_page=100&page=2>; rel="next", <https://api.github.com/repos/o/r/actions/runs?status=completed&per_page=100&page=3>; rel="last""#;
/// assert_eq!(parse_last_page(link), Some(3));
/// assert_eq!(parse_last_page(""), None);
/// ```
pub fn parse_last_page(link: &str) -> Option<u32> {
    LAST_PAGE
        .captures(link)
        .and_then(|captures| captures.get(1))
        .and_then(|page| page.as_str().parse().ok())
}
