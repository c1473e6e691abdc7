//! Action templates: parsing, rendering, and value encoding.
//!
//! Templates are scanned once into literal and placeholder segments; rendering
//! walks the segments instead of doing substring replacement.

mod encode;
mod error;
mod scan;

pub use encode::{percent_encode, ValueEncoding};
pub use error::{TemplateValidationError, ValidationErrorKind};
pub use scan::is_identifier;

use scan::Segment;

/// A parsed action template such as `/items/:id/edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
    malformed: Vec<usize>,
}

impl Template {
    pub fn parse(source: impl Into<String>) -> Self {
        let source = source.into();
        let scan = scan::scan(&source);
        Self {
            source,
            segments: scan.segments,
            malformed: scan.malformed,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Distinct placeholder names in order of first appearance.
    pub fn placeholders(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(name) = segment {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    pub fn references(&self, name: &str) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder(p) if p == name))
    }

    /// Byte offsets of `:` directly followed by a digit.
    pub fn malformed_positions(&self) -> &[usize] {
        &self.malformed
    }

    /// Appends the rendered template to `out`.
    ///
    /// Placeholders for which `lookup` returns `None` are written back as `:name`.
    pub fn render_into<'a, F>(&self, out: &mut String, lookup: F)
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => match lookup(name) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push(':');
                        out.push_str(name);
                    }
                },
            }
        }
    }

    pub fn render<'a, F>(&self, lookup: F) -> String
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let mut out = String::with_capacity(self.source.len());
        self.render_into(&mut out, lookup);
        out
    }
}
