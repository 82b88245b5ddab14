use std::path::Path;
use std::str::FromStr;

use crate::common::{Codepoint, UcdFile};
use crate::error::Error;

/// The number of semicolon delimited fields in a well formed row.
const NUM_FIELDS: usize = 15;

/// A single row in the `UnicodeData.txt` file.
///
/// Only the fields consumed by the table compiler are retained: the
/// codepoint and its `General_Category` assignment. A raw row carries
/// thirteen further fields (name, canonical combining class, bidi
/// properties, decomposition, numeric values, mirroring, legacy names and
/// simple case mappings) that play no part in character class tables.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct UnicodeData {
    /// The codepoint corresponding to this row.
    pub codepoint: Codepoint,
    /// The general category assigned to this codepoint, e.g. `Nd` or `Lu`.
    pub general_category: String,
}

impl UcdFile for UnicodeData {
    fn relative_file_path() -> &'static Path {
        Path::new("UnicodeData.txt")
    }
}

impl FromStr for UnicodeData {
    type Err = Error;

    fn from_str(line: &str) -> Result<UnicodeData, Error> {
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() != NUM_FIELDS {
            return err!(
                "expected {} fields in UnicodeData.txt line, found {}",
                NUM_FIELDS,
                fields.len()
            );
        }
        Ok(UnicodeData {
            codepoint: fields[0].parse()?,
            general_category: fields[2].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::UnicodeData;

    #[test]
    fn parse_letter() {
        let line = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;";
        let row: UnicodeData = line.parse().unwrap();
        assert_eq!(row.codepoint, 0x0041);
        assert_eq!(row.general_category, "Lu");
    }

    #[test]
    fn parse_digit() {
        let line = "0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;";
        let row: UnicodeData = line.parse().unwrap();
        assert_eq!(row.codepoint, 0x0030);
        assert_eq!(row.general_category, "Nd");
    }

    #[test]
    fn parse_surrogate() {
        let line =
            "D800;<Non Private Use High Surrogate, First>;Cs;0;L;;;;;N;;;;;";
        let row: UnicodeData = line.parse().unwrap();
        assert_eq!(row.codepoint, 0xD800);
        assert_eq!(row.general_category, "Cs");
    }

    #[test]
    fn parse_wrong_field_count() {
        let line = "0041;LATIN CAPITAL LETTER A;Lu;0;L";
        assert!(line.parse::<UnicodeData>().is_err());
    }

    #[test]
    fn parse_bad_codepoint() {
        let line = "GGGG;BOGUS;Lu;0;L;;;;;N;;;;;";
        assert!(line.parse::<UnicodeData>().is_err());
    }
}
