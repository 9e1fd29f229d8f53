//! Print curly-brace device configuration as flat set commands.
//!
//! Usage:
//!   display_set [OPTIONS] --input FILE
//!   display_set [OPTIONS] FILE...
//!
//! With `--input`, one file is converted and its annotations are printed after the commands
//! (unless `--ignore-annotations`). With positional files, every command line is prefixed with
//! `FILE:` and annotations are never printed.
//!
//! The first unreadable or malformed file stops the run with exit code 1; output for files
//! before it has already been written. Set `RUST_LOG=junos_set=debug` for diagnostics on stderr.

use clap::{ArgGroup, Parser};
use junos_set::{convert_file, ConvertError, ConvertOptions, QuoteHandling};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "display_set", version, about = "Convert curly-brace configuration into set commands")]
#[command(group(ArgGroup::new("source").required(true).args(["input", "files"])))]
struct Args {
    #[arg(long, help = "Remove annotations from the output")]
    ignore_annotations: bool,

    #[arg(long, value_name = "FILE", help = "Configuration file to convert (no line prefix)")]
    input: Option<PathBuf>,

    // Positional mode never prints annotations, even without --ignore-annotations.
    #[arg(
        value_name = "FILE",
        help = "One or more configuration files; lines are prefixed with FILE: and annotations are not printed"
    )]
    files: Vec<PathBuf>,

    #[arg(long, help = "Accept an odd number of double quotes instead of failing")]
    lenient_quotes: bool,
}

impl Args {
    fn quotes(&self) -> QuoteHandling {
        if self.lenient_quotes {
            QuoteHandling::Reference
        } else {
            QuoteHandling::Reject
        }
    }

    /// Files to convert, each with its options.
    fn jobs(&self) -> Vec<(&Path, ConvertOptions)> {
        let base = ConvertOptions::new().quotes(self.quotes());
        match &self.input {
            Some(path) => vec![(
                path.as_path(),
                base.ignore_annotations(self.ignore_annotations),
            )],
            None => self
                .files
                .iter()
                .map(|path| {
                    let options = base
                        .clone()
                        .with_source_prefix(&path.display().to_string())
                        .ignore_annotations(true);
                    (path.as_path(), options)
                })
                .collect(),
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let stdout = io::stdout();
    for (path, options) in args.jobs() {
        let conversion = match convert_file(path, &options) {
            Ok(c) => c,
            // Already names the path.
            Err(e @ ConvertError::Read { .. }) => return Err(e.into()),
            Err(e) => {
                return Err(anyhow::Error::new(e).context(format!("failed to convert {}", path.display())))
            }
        };
        let mut out = io::BufWriter::new(stdout.lock());
        conversion.write_to(&mut out)?;
        out.flush()?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    log::debug!("{:?}", args);

    if let Err(e) = run(&args) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
