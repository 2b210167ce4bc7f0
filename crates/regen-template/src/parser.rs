//! Region parser: lines in, fragments out.

use crate::splitter::split_lines;
use crate::syntax::MarkerSyntax;
use crate::template::Fragment;

/// Parses one file's text into an ordered fragment sequence.
///
/// The parser alternates between two modes. In text mode, lines accumulate
/// into a literal span; a begin-marker line is appended to that same span
/// (markers stay part of the surrounding text) and switches to region mode.
/// In region mode, lines accumulate as the region body until an end-marker
/// line, which is not part of the body and instead opens the next text span.
/// Hitting end of input while still in region mode is not an error; the body
/// extends to end of file.
pub(crate) struct Parser<'a> {
    syntax: &'a MarkerSyntax,
    lines: Vec<&'a str>,
    index: usize,
}

struct TextSpan {
    text: String,
    next_region: Option<String>,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(syntax: &'a MarkerSyntax, text: &'a str) -> Self {
        Self {
            syntax,
            lines: split_lines(text),
            index: 0,
        }
    }

    pub(crate) fn parse(mut self) -> Vec<Fragment> {
        let mut fragments = Vec::new();

        loop {
            let Some(span) = self.read_text_span() else {
                break;
            };
            fragments.push(Fragment::Text(span.text));

            let Some(name) = span.next_region else {
                break;
            };
            fragments.push(Fragment::Placeholder {
                name,
                content: self.read_region_body(),
            });
        }

        fragments
    }

    fn read_text_span(&mut self) -> Option<TextSpan> {
        if self.index >= self.lines.len() {
            return None;
        }

        let mut text = String::new();
        let mut next_region = None;
        while let Some(line) = self.lines.get(self.index) {
            text.push_str(line);
            self.index += 1;
            if let Some(name) = self.syntax.match_begin(line) {
                next_region = Some(name.to_string());
                break;
            }
        }

        Some(TextSpan { text, next_region })
    }

    fn read_region_body(&mut self) -> String {
        let mut body = String::new();
        while let Some(line) = self.lines.get(self.index) {
            if self.syntax.match_end(line) {
                break;
            }
            body.push_str(line);
            self.index += 1;
        }
        body
    }
}
