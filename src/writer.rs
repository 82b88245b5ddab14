use std::env;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

#[derive(Clone, Debug)]
pub struct WriterBuilder(WriterOptions);

#[derive(Clone, Debug)]
struct WriterOptions {
    columns: usize,
    char_literals: bool,
}

impl WriterBuilder {
    /// Create a new builder for table writers.
    pub fn new() -> WriterBuilder {
        WriterBuilder(WriterOptions { columns: 79, char_literals: false })
    }

    /// Create a new table writer from this builder's configuration.
    pub fn from_writer<W: io::Write + 'static>(&self, wtr: W) -> Writer {
        Writer {
            wtr: LineWriter::new(Box::new(wtr), self.0.columns),
            out: None,
            wrote_header: false,
            depth: 0,
            opts: self.0.clone(),
        }
    }

    /// Create a new table writer that writes to stdout.
    pub fn from_stdout(&self) -> Writer {
        self.from_writer(io::stdout())
    }

    /// Create a new table writer that writes to the given file path.
    ///
    /// Output is staged in a sibling temporary file. The target path is
    /// only replaced when the writer's `finish` method runs without error;
    /// a writer dropped before that removes its staging file and leaves
    /// the target alone.
    pub fn from_out_path<P: AsRef<Path>>(&self, path: P) -> Result<Writer> {
        let (file, out) = OutFile::create(path.as_ref())?;
        let mut wtr = self.from_writer(file);
        wtr.out = Some(out);
        Ok(wtr)
    }

    /// Set the column limit to use when writing Rust source code.
    ///
    /// Note that this is adhered to on a "best effort" basis.
    pub fn columns(&mut self, columns: usize) -> &mut WriterBuilder {
        self.0.columns = columns;
        self
    }

    /// When printing Rust source code, emit `char` literals instead of
    /// `u32` literals. Any codepoints that aren't Unicode scalar values
    /// (i.e., surrogate codepoints) are silently dropped when writing.
    pub fn char_literals(&mut self, yes: bool) -> &mut WriterBuilder {
        self.0.char_literals = yes;
        self
    }
}

/// A writer of Unicode property tables.
///
/// A writer takes property tables as input and emits them as Rust source
/// code: one sorted range slice per property, a `BY_NAME` slice per
/// property family, and optional `pub mod` wrappers when several families
/// share one file.
pub struct Writer {
    wtr: LineWriter<Box<dyn io::Write + 'static>>,
    out: Option<OutFile>,
    wrote_header: bool,
    depth: usize,
    opts: WriterOptions,
}

impl Writer {
    /// Write a sorted sequence of property names that map to range table
    /// constants.
    pub fn names<I: IntoIterator<Item = T>, T: AsRef<str>>(
        &mut self,
        names: I,
    ) -> Result<()> {
        self.header()?;
        self.separator()?;
        let mut names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();
        names.sort();

        let ty = self.rust_codepoint_type();
        self.const_line(&format!(
            "pub const BY_NAME: &'static [(&'static str, \
             &'static [({}, {})])] = &[",
            ty, ty,
        ))?;
        for name in names {
            let rustname = rust_const_name(&name);
            self.wtr.write_str(&format!("({:?}, {}), ", name, rustname))?;
        }
        self.const_line("];")?;
        Ok(())
    }

    /// Write one property's table as a slice of closed codepoint ranges.
    ///
    /// The table is sorted ascending by range start before emission,
    /// regardless of the order the caller collected it in.
    pub fn ranges(&mut self, name: &str, table: &[(u32, u32)]) -> Result<()> {
        self.header()?;
        self.separator()?;

        let name = rust_const_name(name);
        let mut table = table.to_vec();
        table.sort_by_key(|&(start, _)| start);

        let ty = self.rust_codepoint_type();
        self.const_line(&format!(
            "pub const {}: &'static [({}, {})] = &[",
            name, ty, ty,
        ))?;
        for &(start, end) in &table {
            let range = (self.rust_codepoint(start), self.rust_codepoint(end));
            if let (Some(start), Some(end)) = range {
                self.wtr.write_str(&format!("({}, {}), ", start, end))?;
            }
        }
        self.const_line("];")?;
        self.wtr.flush()?;
        Ok(())
    }

    /// Open a `pub mod` wrapper with the given name. Everything written
    /// until the matching `end_module` call is indented one level deeper.
    pub fn begin_module(&mut self, name: &str) -> Result<()> {
        self.header()?;
        self.separator()?;
        self.const_line(&format!("pub mod {} {{", rust_module_name(name)))?;
        self.depth += 1;
        self.update_indent();
        Ok(())
    }

    /// Close the innermost `pub mod` wrapper.
    pub fn end_module(&mut self) -> Result<()> {
        assert!(self.depth > 0, "unbalanced end_module");
        self.depth -= 1;
        self.update_indent();
        self.const_line("}")?;
        self.wtr.flush()?;
        Ok(())
    }

    /// Re-export the table lookup routines, so that a generated module can
    /// answer name and membership queries on its own.
    pub fn lookup_reexports(&mut self) -> Result<()> {
        self.header()?;
        self.separator()?;
        self.const_line(
            "pub use ::uniprop_table::{contains_codepoint, property_ranges};",
        )?;
        Ok(())
    }

    /// Flush buffered output and, when writing to a file, move the staged
    /// output into place.
    pub fn finish(&mut self) -> Result<()> {
        self.wtr.flush()?;
        if let Some(ref mut out) = self.out {
            out.persist()?;
        }
        Ok(())
    }

    fn header(&mut self) -> Result<()> {
        if self.wrote_header {
            return Ok(());
        }
        self.wrote_header = true;
        let mut argv = vec![];
        argv.push(
            env::current_exe()?
                .file_name()
                .unwrap()
                .to_string_lossy()
                .into_owned(),
        );
        for arg in env::args_os().skip(1) {
            let x = arg.to_string_lossy();
            if x.contains("\n") {
                argv.push("[snip (arg too long)]".to_string());
            } else {
                argv.push(x.into_owned());
            }
        }
        writeln!(
            self.wtr,
            "// DO NOT EDIT THIS FILE. IT WAS AUTOMATICALLY GENERATED BY:"
        )?;
        writeln!(self.wtr, "//")?;
        writeln!(self.wtr, "//   {}", argv.join(" "))?;
        writeln!(self.wtr, "//")?;
        writeln!(self.wtr, "// uniprop-generate is available on crates.io.")?;
        Ok(())
    }

    fn separator(&mut self) -> Result<()> {
        write!(self.wtr, "\n")?;
        Ok(())
    }

    /// Write one line of Rust source at the current module depth. Goes
    /// around the data line buffer, flushing it first.
    fn const_line(&mut self, line: &str) -> Result<()> {
        let mut full = String::new();
        for _ in 0..self.depth {
            full.push_str("    ");
        }
        full.push_str(line);
        full.push('\n');
        self.wtr.write_all(full.as_bytes())?;
        Ok(())
    }

    fn update_indent(&mut self) {
        let mut indent = String::new();
        for _ in 0..self.depth {
            indent.push_str("    ");
        }
        indent.push_str("  ");
        self.wtr.set_indent(&indent);
    }

    /// Return valid Rust source code that represents the given codepoint.
    ///
    /// The source code returned is either a u32 literal or a char literal,
    /// depending on the configuration. If the configuration demands a char
    /// literal and the given codepoint is a surrogate, then return None.
    fn rust_codepoint(&self, cp: u32) -> Option<String> {
        if self.opts.char_literals {
            std::char::from_u32(cp).map(|c| format!("{:?}", c))
        } else {
            Some(cp.to_string())
        }
    }

    /// Return valid Rust source code indicating the type of the codepoint
    /// that we emit based on this writer's configuration.
    fn rust_codepoint_type(&self) -> &'static str {
        if self.opts.char_literals {
            "char"
        } else {
            "u32"
        }
    }
}

/// A staged output file: writes land in `tmp`, and only a clean `persist`
/// renames it over `dst`. An unpersisted staging file is removed on drop.
#[derive(Debug)]
struct OutFile {
    tmp: PathBuf,
    dst: PathBuf,
    persisted: bool,
}

impl OutFile {
    fn create(dst: &Path) -> Result<(File, OutFile)> {
        let mut tmp = dst.as_os_str().to_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        let file = File::create(&tmp)?;
        let out =
            OutFile { tmp, dst: dst.to_path_buf(), persisted: false };
        Ok((file, out))
    }

    fn persist(&mut self) -> Result<()> {
        fs::rename(&self.tmp, &self.dst)?;
        self.persisted = true;
        Ok(())
    }
}

impl Drop for OutFile {
    fn drop(&mut self) {
        if !self.persisted {
            let _ = fs::remove_file(&self.tmp);
        }
    }
}

#[derive(Debug)]
struct LineWriter<W> {
    wtr: W,
    line: String,
    columns: usize,
    indent: String,
}

impl<W: io::Write> LineWriter<W> {
    fn new(wtr: W, columns: usize) -> LineWriter<W> {
        LineWriter {
            wtr,
            line: String::new(),
            columns,
            indent: "  ".to_string(),
        }
    }

    fn write_str(&mut self, s: &str) -> io::Result<()> {
        if self.line.len() + s.len() > self.columns {
            self.flush_line()?;
        }
        if self.line.is_empty() {
            self.line.push_str(&self.indent);
        }
        self.line.push_str(s);
        Ok(())
    }

    fn set_indent(&mut self, s: &str) {
        self.indent = s.to_string();
    }

    fn flush_line(&mut self) -> io::Result<()> {
        if self.line.is_empty() {
            return Ok(());
        }
        self.wtr.write_all(self.line.trim_end().as_bytes())?;
        self.wtr.write_all(b"\n")?;
        self.line.clear();
        Ok(())
    }
}

impl<W: io::Write> io::Write for LineWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.flush_line()?;
        self.wtr.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_line()?;
        self.wtr.flush()
    }
}

/// Heuristically produce an appropriate constant Rust name.
///
/// Property names and values are uniform enough that uppercasing them is
/// all it takes.
fn rust_const_name(s: &str) -> String {
    let mut s = s.to_string();
    s.make_ascii_uppercase();
    s
}

/// Heuristically produce an appropriate module Rust name.
fn rust_module_name(s: &str) -> String {
    let mut s = s.to_string();
    s.make_ascii_lowercase();
    s
}
