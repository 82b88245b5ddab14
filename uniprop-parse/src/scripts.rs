use std::path::Path;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::common::{Codepoint, CodepointRange, Codepoints, UcdFile};
use crate::error::Error;

/// A single row in the `Scripts.txt` file.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Script {
    /// The codepoint or codepoint range for this entry.
    pub codepoints: Codepoints,
    /// The script name assigned to the codepoints in this entry, e.g.
    /// `Greek` or `Old_Italic`.
    pub script: String,
}

impl UcdFile for Script {
    fn relative_file_path() -> &'static Path {
        Path::new("Scripts.txt")
    }
}

impl FromStr for Script {
    type Err = Error;

    fn from_str(line: &str) -> Result<Script, Error> {
        lazy_static! {
            static ref PARTS: Regex = Regex::new(
                r"(?x)
                ^
                \s*(?P<start>[0-9A-F]+)
                (?:\.\.(?P<end>[0-9A-F]+))?
                \s*;\s*
                (?P<script>\w+)
                "
            )
            .unwrap();
        };
        let caps = match PARTS.captures(line) {
            Some(caps) => caps,
            None => return err!("invalid Scripts.txt line: '{}'", line),
        };
        let start: Codepoint = caps["start"].parse()?;
        let codepoints = match caps.name("end") {
            None => Codepoints::Single(start),
            Some(end) => {
                let end: Codepoint = end.as_str().parse()?;
                if start > end {
                    return err!(
                        "invalid Scripts.txt range: '{}' ends before it starts",
                        line
                    );
                }
                Codepoints::Range(CodepointRange { start, end })
            }
        };
        Ok(Script { codepoints, script: caps["script"].to_string() })
    }
}
