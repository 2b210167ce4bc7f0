//! Begin/end marker recognition.

use once_cell::sync::Lazy;
use regex::Regex;

/// Default begin token, matching the original marker spelling.
pub const DEFAULT_BEGIN_TOKEN: &str = "@codegen";

/// Default end token.
pub const DEFAULT_END_TOKEN: &str = "@end";

#[allow(clippy::expect_used)]
static DEFAULT_SYNTAX: Lazy<MarkerSyntax> = Lazy::new(|| {
    MarkerSyntax::new(DEFAULT_BEGIN_TOKEN, DEFAULT_END_TOKEN)
        .expect("default marker tokens compile")
});

/// The marker pair that delimits generated regions.
///
/// A begin marker is any line containing the begin token directly followed by
/// a parenthesized region name (word characters and hyphens, possibly empty).
/// An end marker is any line containing the bare end token. Both match as
/// substrings, so markers normally live inside a line comment of the host
/// language.
#[derive(Debug, Clone)]
pub struct MarkerSyntax {
    begin: Regex,
    end: Regex,
}

impl MarkerSyntax {
    /// Build a syntax from a custom token pair.
    ///
    /// # Errors
    /// Propagates the regex compile error; escaped tokens should never
    /// produce one.
    pub fn new(begin_token: &str, end_token: &str) -> Result<Self, regex::Error> {
        let begin = Regex::new(&format!(r"{}\(([\w\-]*)\)", regex::escape(begin_token)))?;
        let end = Regex::new(&regex::escape(end_token))?;
        Ok(Self { begin, end })
    }

    /// Region name captured from a begin-marker line, if the line is one.
    #[must_use]
    pub fn match_begin<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.begin
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Whether the line is an end marker.
    #[must_use]
    pub fn match_end(&self, line: &str) -> bool {
        self.end.is_match(line)
    }
}

impl Default for MarkerSyntax {
    fn default() -> Self {
        DEFAULT_SYNTAX.clone()
    }
}
