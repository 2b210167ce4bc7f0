//! The mutable fragment model for one parsed file.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::error::TemplateError;
use crate::parser::Parser;
use crate::syntax::MarkerSyntax;

/// One span of a parsed file.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// Literal text, emitted verbatim. Marker lines live here, not in the
    /// region body they delimit.
    Text(String),
    /// The regenerable body strictly between a begin and end marker.
    Placeholder {
        /// Region name captured from the begin marker.
        name: String,
        /// Current body text.
        content: String,
    },
}

/// A parsed file: ordered fragments plus a by-name index over regions.
///
/// A `Template` is owned by a single render pass: parse one file, mutate
/// region bodies, render, discard. The name index is derived from the
/// fragment sequence at parse time and is first-wins; when a name repeats,
/// later occurrences are not addressable and round-trip untouched.
#[derive(Debug, Clone)]
pub struct Template {
    fragments: Vec<Fragment>,
    index: HashMap<String, usize>,
}

impl Template {
    /// Parse with the default `@codegen` / `@end` markers.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::parse_with(&MarkerSyntax::default(), text)
    }

    /// Parse with a custom marker syntax.
    #[must_use]
    pub fn parse_with(syntax: &MarkerSyntax, text: &str) -> Self {
        Self::from_fragments(Parser::new(syntax, text).parse())
    }

    /// Parse, rejecting duplicate region names.
    ///
    /// Opt-in strictness; the plain constructors keep the lenient first-wins
    /// behavior and never fail.
    ///
    /// # Errors
    /// [`TemplateError::DuplicateName`] when a region name repeats.
    pub fn parse_strict(text: &str) -> Result<Self, TemplateError> {
        Self::parse_strict_with(&MarkerSyntax::default(), text)
    }

    /// Strict variant of [`Template::parse_with`].
    ///
    /// # Errors
    /// [`TemplateError::DuplicateName`] when a region name repeats.
    pub fn parse_strict_with(syntax: &MarkerSyntax, text: &str) -> Result<Self, TemplateError> {
        let template = Self::parse_with(syntax, text);
        let mut seen = HashSet::new();
        for name in template.names() {
            if !seen.insert(name.to_string()) {
                return Err(TemplateError::DuplicateName(name.to_string()));
            }
        }
        Ok(template)
    }

    fn from_fragments(fragments: Vec<Fragment>) -> Self {
        let mut index = HashMap::new();
        for (position, fragment) in fragments.iter().enumerate() {
            if let Fragment::Placeholder { name, .. } = fragment {
                index.entry(name.clone()).or_insert(position);
            }
        }
        Self { fragments, index }
    }

    /// All region names in source order, duplicates included.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.fragments
            .iter()
            .filter_map(|fragment| match fragment {
                Fragment::Placeholder { name, .. } => Some(name.as_str()),
                Fragment::Text(_) => None,
            })
            .collect()
    }

    /// Body of the first region with this name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        match self.fragments.get(*self.index.get(name)?) {
            Some(Fragment::Placeholder { content, .. }) => Some(content),
            _ => None,
        }
    }

    /// Replace the body of the first region with this name.
    ///
    /// Returns whether a region was updated. Unknown names are a no-op: the
    /// engine fills pre-declared regions, it never inserts new ones.
    pub fn set(&mut self, name: &str, content: impl Into<String>) -> bool {
        let Some(&position) = self.index.get(name) else {
            return false;
        };
        match self.fragments.get_mut(position) {
            Some(Fragment::Placeholder { content: body, .. }) => {
                *body = content.into();
                true
            }
            _ => false,
        }
    }

    /// The fragment sequence, in source order.
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Serialize back to text.
    ///
    /// Text fragments are emitted byte-for-byte. A non-empty region body gets
    /// a trailing newline appended unless it already ends in one, so the body
    /// always closes its own line before the end-marker line that follows.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(text) => out.push_str(text),
                Fragment::Placeholder { content, .. } => {
                    out.push_str(content);
                    if !content.is_empty() && !content.ends_with(['\n', '\r']) {
                        out.push('\n');
                    }
                }
            }
        }
        out
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
