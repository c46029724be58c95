//! Relation text parser
//!
//! ```text
//! RelationName(Attr1,Attr2,Attr3)
//!
//! Attr1,Attr2 --> Attr3
//! Attr3 --> Attr1
//! ```
//!
//! The first non-blank line names the relation and its attributes. Every
//! later non-blank line is one functional dependency with exactly one
//! right-pointing arrow. A line without an arrow is an error.

use crate::error::{ParseError, ParseResult};
use fd_core::{Attr, AttrSet, Config, FuncDep, Relation, DEFAULT_SEPARATOR};
use regex::Regex;
use std::sync::OnceLock;

/// Accepts `-->`, `--->`, `>>`, `-->>`, `~~>`, `~>`, `==>`, `===>>` and the
/// Unicode arrows `→`, `⇒`, `⇾`.
static ARROW_RE: OnceLock<Regex> = OnceLock::new();

fn arrow_re() -> &'static Regex {
    ARROW_RE.get_or_init(|| Regex::new(r"[-=~]*[>→⇒⇾]+").expect("valid regex"))
}

/// Parser for relation descriptions with a configurable attribute separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelationParser {
    separator: String,
}

impl RelationParser {
    /// Create a parser splitting attributes on `separator`. An empty
    /// separator treats every non-whitespace character as an attribute.
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }

    /// Create a parser using the configured separator
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.separator.clone())
    }

    /// Get the attribute separator
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Parse a relation and its dependencies.
    pub fn parse(&self, text: &str) -> ParseResult<Relation> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (_, header) = lines.next().ok_or(ParseError::EmptyInput)?;
        let (name, attrs) = self.parse_header(header)?;

        let mut func_deps = Vec::new();
        for (line_no, line) in lines {
            func_deps.push(self.parse_line(line_no, line)?);
        }

        log::debug!(
            "Parsed relation '{}' with {} attributes and {} dependencies",
            name,
            attrs.len(),
            func_deps.len()
        );
        Ok(Relation::new(name, attrs, func_deps)?)
    }

    /// Parse a single functional dependency such as `A,B --> C`.
    pub fn parse_func_dep(&self, text: &str) -> ParseResult<FuncDep> {
        self.parse_line(1, text.trim())
    }

    /// Split an attribute list on the separator. Names are trimmed and
    /// empty names are skipped.
    pub fn parse_attrs(&self, text: &str) -> AttrSet {
        if self.separator.is_empty() {
            return text
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| Attr::new(c.to_string()))
                .collect();
        }
        text.split(self.separator.as_str())
            .filter_map(|s| Attr::try_new(s.trim()))
            .collect()
    }

    /// Render `relation` in the text form this parser reads.
    pub fn render(&self, relation: &Relation) -> String {
        relation.render(&self.separator)
    }

    fn parse_header(&self, header: &str) -> ParseResult<(String, AttrSet)> {
        let malformed = |reason: &str| ParseError::MalformedRelationHeader {
            header: header.to_string(),
            reason: reason.to_string(),
        };

        let open = header.find('(').ok_or_else(|| malformed("missing '('"))?;
        if !header.ends_with(')') {
            return Err(malformed("missing closing ')'"));
        }
        let inner = &header[open + 1..header.len() - 1];
        if inner.contains('(') || inner.contains(')') {
            return Err(malformed("unbalanced parentheses"));
        }

        let name = header[..open].trim().to_string();
        let attrs = self.parse_attrs(inner);
        Ok((name, attrs))
    }

    fn parse_line(&self, line_no: usize, line: &str) -> ParseResult<FuncDep> {
        let found = arrow_re().find_iter(line).count();
        if found != 1 {
            return Err(ParseError::ArrowCount {
                line: line_no,
                text: line.to_string(),
                found,
            });
        }
        let mut parts = arrow_re().splitn(line, 2);
        let left = parts.next().unwrap_or_default();
        let right = parts.next().unwrap_or_default();
        Ok(FuncDep::new(self.parse_attrs(left), self.parse_attrs(right)))
    }
}

impl Default for RelationParser {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

#[cfg(test)]
#[path = "parser_test.rs"]
mod tests;
