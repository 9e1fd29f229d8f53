//! Output lines: flat commands and the deferred annotation lines.

use std::fmt;

/// Leading keyword of a command line (slot 0 of the path stack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Set,
    Deactivate,
    Protect,
}

impl Keyword {
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Set => "set",
            Keyword::Deactivate => "deactivate",
            Keyword::Protect => "protect",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One emitted command: `<prefix><keyword> <path...> <leaf>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub prefix: String,
    pub keyword: Keyword,
    /// Enclosing blocks, outermost first.
    pub path: Vec<String>,
    pub leaf: String,
}

impl CommandLine {
    pub fn new(keyword: Keyword, path: &[String], leaf: &str, prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            keyword,
            path: path.to_vec(),
            leaf: leaf.to_string(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.prefix, self.keyword)?;
        for segment in &self.path {
            write!(f, " {}", segment)?;
        }
        write!(f, " {}", self.leaf)
    }
}

/// A line of the annotation record, printed after all commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationLine {
    /// Return to the top of the hierarchy.
    Top,
    /// `edit <path...>`: move to the block holding the annotated element.
    Edit(Vec<String>),
    /// `annotate <keyword> <text>`; `text` keeps its double quotes.
    Annotate { keyword: String, text: String },
}

impl fmt::Display for AnnotationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnnotationLine::Top => f.write_str("top"),
            AnnotationLine::Edit(path) => {
                f.write_str("edit")?;
                for segment in path {
                    write!(f, " {}", segment)?;
                }
                Ok(())
            }
            AnnotationLine::Annotate { keyword, text } => write!(f, "annotate {} {}", keyword, text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn command_joins_with_single_spaces() {
        let c = CommandLine::new(Keyword::Set, &path(&["system", "login"]), "user x", "");
        assert_eq!(c.to_string(), "set system login user x");
    }

    #[test]
    fn command_at_root_has_no_path() {
        let c = CommandLine::new(Keyword::Deactivate, &[], "interfaces", "");
        assert_eq!(c.to_string(), "deactivate interfaces");
    }

    #[test]
    fn prefix_sits_directly_before_keyword() {
        let c = CommandLine::new(Keyword::Protect, &path(&["system"]), "host-name r1", "r1.conf:");
        assert_eq!(c.to_string(), "r1.conf:protect system host-name r1");
    }

    #[test]
    fn annotation_lines() {
        assert_eq!(AnnotationLine::Top.to_string(), "top");
        assert_eq!(
            AnnotationLine::Edit(path(&["interfaces", "ge-0/0/0"])).to_string(),
            "edit interfaces ge-0/0/0"
        );
        let a = AnnotationLine::Annotate {
            keyword: "unit".to_string(),
            text: "\"uplink\"".to_string(),
        };
        assert_eq!(a.to_string(), "annotate unit \"uplink\"");
    }
}
