//! # junos-set: curly-brace configuration to `set` commands
//!
//! Converts hierarchical network device configuration (blocks in `{ ... }`, leaves ending
//! in `;`) into the flat form, one fully qualified command per line:
//!
//! ```text
//! policy-options {
//!     policy-statement P {
//!         term T {
//!             then accept;
//!         }
//!     }
//! }
//! ```
//!
//! becomes `set policy-options policy-statement P term T then accept`.
//!
//! ## Pipeline
//!
//! - [`normalize`]: put every unquoted `{` / `}` on its own line
//! - [`classify`]: turn each line into an annotation marker or an element (leaf, open, close)
//! - [`convert`]: the [`Transducer`] keeps the block path on a stack and emits
//!   [`CommandLine`]s; `inactive:` / `protect:` markers add `deactivate` / `protect` commands
//! - `/* ... */` annotations are collected and printed after all commands as
//!   `top` / `edit <path>` / `annotate <keyword> "<text>"`
//!
//! ## Usage
//!
//! ```
//! use junos_set::{convert, ConvertOptions};
//!
//! let out = convert("system { host-name foo; }", &ConvertOptions::default()).unwrap();
//! assert_eq!(out.lines(), vec!["set system host-name foo"]);
//! ```
//!
//! The `display_set` binary wraps this for files on disk.

pub mod classify;
pub mod command;
pub mod convert;
pub mod normalize;
pub mod options;

pub use command::{AnnotationLine, CommandLine, Keyword};
pub use convert::{convert, convert_file, Conversion, ConvertError, Transducer};
pub use normalize::{normalize_braces, Normalized};
pub use options::{ConvertOptions, QuoteHandling};
