/*!
A library for parsing the slice of the Unicode character database that
backs character class tables: `UnicodeData.txt` (general categories) and
`Scripts.txt` (script assignments).

Each supported file has a corresponding type that represents a single line
of that file, with a `FromStr` implementation for its grammar. The
`UcdLineParser` iterator applies that grammar to a whole file, skipping
comment and blank lines along the way.

Parsing is strict per line, but it is the caller who decides what a failed
line means. The table compiler built on this library treats a line that
does not match its file's grammar as not applicable and moves on, while an
I/O error always aborts.
*/

#![deny(missing_docs)]

pub use crate::common::{
    Codepoint, CodepointRange, Codepoints, UcdFile, UcdLineParser,
};
pub use crate::error::{Error, ErrorKind};
pub use crate::scripts::Script;
pub use crate::unicode_data::UnicodeData;

macro_rules! err {
    ($($tt:tt)*) => {
        Err(crate::error::Error::parse(format!($($tt)*)))
    }
}

mod common;
mod error;
mod scripts;
mod unicode_data;
