//! Classify normalized lines into annotation markers and elements.
//!
//! The order of checks matters and mirrors what the transducer does with the result:
//! annotation marker first, then the `inactive` and `protect` markers (independent of each
//! other, an element can carry both), then exactly one of leaf / close / open.

/// A meaningful (non-blank, non-`#`) line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    /// `/* text */`, with the comment delimiters turned into double quotes.
    Annotation(String),
    Element(Element<'a>),
}

/// A structural or leaf line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element<'a> {
    /// The line with surrounding whitespace and `{` stripped, markers still present.
    pub clean: &'a str,
    /// Leaf for the `deactivate` command, when the element mentions `inactive`.
    pub deactivate: Option<String>,
    /// Leaf for the `protect` command, when the element mentions `protect`.
    pub protect: Option<String>,
    pub kind: ElementKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// `;`-terminated statement; holds the text before the first `;`.
    Leaf(String),
    /// A lone `}`.
    Close,
    /// Anything else opens a block named by the element.
    Open(String),
}

const INACTIVE_MARKER: &str = "inactive: ";
const PROTECT_MARKER: &str = "protect: ";

/// Classify one normalized line. Returns `None` for blank lines and `#` comments.
pub fn classify(line: &str) -> Option<Line<'_>> {
    let elem = line.trim();
    if elem.is_empty() || elem.starts_with('#') {
        return None;
    }
    if elem.starts_with("/*") {
        return Some(Line::Annotation(annotation_text(elem)));
    }
    let clean = elem.trim_matches(|c| matches!(c, '\t' | '\n' | '\r' | '{' | ' '));
    Some(Line::Element(Element::new(clean)))
}

fn annotation_text(elem: &str) -> String {
    elem.replace("/* ", "\"").replace(" */", "\"")
}

impl<'a> Element<'a> {
    pub fn new(clean: &'a str) -> Self {
        let mut text = clean.to_string();

        // Substring checks: a leaf merely mentioning the word still triggers the command.
        let deactivate = if text.contains("inactive") {
            text = text.replace(INACTIVE_MARKER, "");
            Some(text.clone())
        } else {
            None
        };
        let protect = if text.contains("protect") {
            text = text.replace(PROTECT_MARKER, "");
            Some(text.clone())
        } else {
            None
        };

        let kind = if let Some((leaf, _)) = text.split_once(';') {
            ElementKind::Leaf(leaf.to_string())
        } else if text == "}" {
            ElementKind::Close
        } else {
            ElementKind::Open(text)
        };

        Self {
            clean,
            deactivate,
            protect,
            kind,
        }
    }

    /// Keyword an annotation attaches to: the first word of a leaf (without its `;`), or the
    /// whole block name.
    pub fn annotation_keyword(&self) -> &'a str {
        match self.clean.split_once(';') {
            Some((statement, _)) => statement.split_whitespace().next().unwrap_or(statement),
            None => self.clean,
        }
    }
}
