use std::path::PathBuf;

use crate::error::Result;
use crate::writer::{Writer, WriterBuilder};

/// A light wrapper over clap's matches for a single subcommand, providing
/// convenient access to the flags every table command shares.
#[derive(Debug)]
pub struct ArgMatches<'a>(&'a clap::ArgMatches<'a>);

impl<'a> ArgMatches<'a> {
    /// Create a new wrapper for the given subcommand matches.
    pub fn new(matches: &'a clap::ArgMatches<'a>) -> ArgMatches<'a> {
        ArgMatches(matches)
    }

    /// Returns true if and only if the given flag is present.
    pub fn is_present(&self, name: &str) -> bool {
        self.0.is_present(name)
    }

    /// Return the directory containing the UCD files.
    pub fn ucd_dir(&self) -> Result<PathBuf> {
        match self.0.value_of_os("ucd-dir") {
            None => err!("missing UCD directory"),
            Some(dir) => Ok(PathBuf::from(dir)),
        }
    }

    /// Create a writer for this command's output.
    ///
    /// If the --out flag was given, output is staged in a temporary file
    /// that replaces the target only once the writer finishes cleanly.
    /// Otherwise, output goes to stdout.
    pub fn writer(&self) -> Result<Writer> {
        let mut builder = WriterBuilder::new();
        builder.char_literals(self.is_present("chars"));
        match self.0.value_of_os("out") {
            None => Ok(builder.from_stdout()),
            Some(path) => builder.from_out_path(path),
        }
    }
}
