//! The transducer: walk normalized lines, track the block path on a stack, and emit
//! flat commands plus the deferred annotation record.

use crate::classify::{classify, Element, ElementKind, Line};
use crate::command::{AnnotationLine, CommandLine, Keyword};
use crate::normalize::normalize;
use crate::options::ConvertOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("could not read input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("line {line}: `}}` does not close any open block")]
    UnmatchedClose { line: usize },
    #[error("odd number of double quotes ({count}), cannot tell quoted text apart")]
    UnbalancedQuotes { count: usize },
}

/// Output of one conversion: commands in input order, then the annotation record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    pub commands: Vec<CommandLine>,
    /// Empty when annotations are ignored.
    pub annotations: Vec<AnnotationLine>,
}

impl Conversion {
    /// All output lines, rendered, in print order.
    pub fn lines(&self) -> Vec<String> {
        self.commands
            .iter()
            .map(ToString::to_string)
            .chain(self.annotations.iter().map(ToString::to_string))
            .collect()
    }

    /// Write every line, newline-terminated.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for c in &self.commands {
            writeln!(out, "{}", c)?;
        }
        for a in &self.annotations {
            writeln!(out, "{}", a)?;
        }
        Ok(())
    }
}

/// Conversion state for a single input. Create one per file.
#[derive(Debug)]
pub struct Transducer {
    options: ConvertOptions,
    /// Slot 0 is the keyword placeholder; the rest is the current block path.
    stack: Vec<String>,
    pending_annotation: Option<String>,
    annotations: Vec<AnnotationLine>,
    commands: Vec<CommandLine>,
}

impl Transducer {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            stack: vec![Keyword::Set.as_str().to_string()],
            pending_annotation: None,
            annotations: Vec::new(),
            commands: Vec::new(),
        }
    }

    /// Current stack length: 1 at the root, +1 per open block.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Current block path, outermost first.
    pub fn path(&self) -> &[String] {
        &self.stack[1..]
    }

    /// Feed one normalized line. `line_no` is only used for error reporting.
    pub fn feed_line(&mut self, line_no: usize, line: &str) -> Result<(), ConvertError> {
        match classify(line) {
            None => Ok(()),
            Some(Line::Annotation(text)) => {
                self.pending_annotation = Some(text);
                Ok(())
            }
            Some(Line::Element(element)) => self.apply(line_no, element),
        }
    }

    fn apply(&mut self, line_no: usize, element: Element<'_>) -> Result<(), ConvertError> {
        if let Some(text) = self.pending_annotation.take() {
            self.annotations.push(AnnotationLine::Top);
            if self.stack.len() > 1 {
                self.annotations.push(AnnotationLine::Edit(self.path().to_vec()));
            }
            self.annotations.push(AnnotationLine::Annotate {
                keyword: element.annotation_keyword().to_string(),
                text,
            });
        }

        if let Some(leaf) = &element.deactivate {
            self.emit(Keyword::Deactivate, leaf);
        }
        if let Some(leaf) = &element.protect {
            self.emit(Keyword::Protect, leaf);
        }

        match element.kind {
            ElementKind::Leaf(leaf) => self.emit(Keyword::Set, &leaf),
            ElementKind::Close => self.pop(line_no)?,
            ElementKind::Open(name) => {
                log::trace!("enter {:?} at depth {}", name, self.stack.len());
                self.stack.push(name);
            }
        }
        Ok(())
    }

    fn emit(&mut self, keyword: Keyword, leaf: &str) {
        let line = CommandLine::new(keyword, self.path(), leaf, self.options.prefix_str());
        self.commands.push(line);
    }

    fn pop(&mut self, line_no: usize) -> Result<(), ConvertError> {
        if self.stack.len() <= 1 {
            return Err(ConvertError::UnmatchedClose { line: line_no });
        }
        let name = self.stack.pop();
        log::trace!("leave {:?}", name.unwrap_or_default());
        Ok(())
    }

    /// Finish the input and hand back the collected output.
    pub fn finish(self) -> Conversion {
        if self.stack.len() > 1 {
            log::warn!(
                "input ended with {} unclosed block(s): {}",
                self.stack.len() - 1,
                self.path().join(" ")
            );
        }
        let annotations = if self.options.ignore_annotations {
            if !self.annotations.is_empty() {
                log::debug!("dropping {} annotation line(s)", self.annotations.len());
            }
            Vec::new()
        } else {
            self.annotations
        };
        Conversion {
            commands: self.commands,
            annotations,
        }
    }
}

/// Convert configuration text into set commands.
pub fn convert(source: &str, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let normalized = normalize(source, options.quotes)?;
    let mut transducer = Transducer::new(options.clone());
    for (line_no, line) in normalized.lines() {
        transducer.feed_line(line_no, line)?;
    }
    Ok(transducer.finish())
}

/// Read `path` fully and convert it.
pub fn convert_file(path: impl AsRef<Path>, options: &ConvertOptions) -> Result<Conversion, ConvertError> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("{}: read {} bytes", path.display(), source.len());
    let conversion = convert(&source, options)?;
    log::debug!(
        "{}: {} command(s), {} annotation line(s)",
        path.display(),
        conversion.commands.len(),
        conversion.annotations.len()
    );
    Ok(conversion)
}
