use std::collections::BTreeMap;
use std::io;

use uniprop_parse::{Script, UcdFile, UcdLineParser};

use crate::args::ArgMatches;
use crate::error::Result;

/// The scripts compiled into tables. Lines in Scripts.txt naming any
/// other script are skipped. This list must stay sorted, since membership
/// is decided by binary search.
const SCRIPTS: &[&str] = &[
    "Arabic", "Armenian", "Balinese", "Bengali", "Bopomofo", "Braille",
    "Buginese", "Buhid", "Canadian_Aboriginal", "Carian", "Cham",
    "Cherokee", "Common", "Coptic", "Cuneiform", "Cypriot", "Cyrillic",
    "Deseret", "Devanagari", "Ethiopic", "Georgian", "Glagolitic",
    "Gothic", "Greek", "Gujarati", "Gurmukhi", "Han", "Hangul", "Hanunoo",
    "Hebrew", "Hiragana", "Inherited", "Kannada", "Katakana", "Kayah_Li",
    "Kharoshthi", "Khmer", "Lao", "Latin", "Lepcha", "Limbu", "Linear_B",
    "Lycian", "Lydian", "Malayalam", "Mongolian", "Myanmar", "New_Tai_Lue",
    "Nko", "Ogham", "Ol_Chiki", "Old_Italic", "Old_Persian", "Oriya",
    "Osmanya", "Phags_Pa", "Phoenician", "Rejang", "Runic", "Saurashtra",
    "Shavian", "Sinhala", "Sundanese", "Syloti_Nagri", "Syriac", "Tagalog",
    "Tagbanwa", "Tai_Le", "Tamil", "Telugu", "Thaana", "Thai", "Tibetan",
    "Tifinagh", "Ugaritic", "Vai", "Yi",
];

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let dir = args.ucd_dir()?;
    let by_name = read_ranges(Script::from_dir(dir)?)?;

    let mut wtr = args.writer()?;
    wtr.names(by_name.keys())?;
    for (name, table) in &by_name {
        wtr.ranges(name, table)?;
    }
    wtr.finish()?;
    Ok(())
}

/// Collect the ranges of every recognized script, in file order and
/// exactly as written. No merging happens here: non-adjacent ranges of
/// one script stay distinct in its table.
pub fn read_ranges<R: io::Read>(
    parser: UcdLineParser<R, Script>,
) -> Result<BTreeMap<String, Vec<(u32, u32)>>> {
    let mut by_name: BTreeMap<String, Vec<(u32, u32)>> = BTreeMap::new();
    for result in parser {
        let row = match result {
            Ok(row) => row,
            Err(ref err) if !err.is_io_error() => continue,
            Err(err) => return Err(err.into()),
        };
        if SCRIPTS.binary_search(&row.script.as_str()).is_err() {
            continue;
        }
        by_name
            .entry(row.script)
            .or_insert_with(Vec::new)
            .push(row.codepoints.range());
    }
    Ok(by_name)
}

#[cfg(test)]
mod tests {
    use uniprop_parse::{Script, UcdLineParser};

    use super::{read_ranges, SCRIPTS};

    fn parser(data: &str) -> UcdLineParser<&[u8], Script> {
        UcdLineParser::new(None, data.as_bytes())
    }

    #[test]
    fn script_list_is_sorted() {
        let mut sorted = SCRIPTS.to_vec();
        sorted.sort();
        assert_eq!(sorted, SCRIPTS);
        assert_eq!(SCRIPTS.len(), 77);
    }

    #[test]
    fn nonadjacent_ranges_stay_separate() {
        let data = "\
0370..0373    ; Greek # L&   [4] GREEK CAPITAL LETTER HETA..GREEK SMALL LETTER ARCHAIC SAMPI
0376..0377    ; Greek # L&   [2] GREEK CAPITAL LETTER PAMPHYLIAN DIGAMMA..GREEK SMALL LETTER PAMPHYLIAN DIGAMMA
";
        let by_name = read_ranges(parser(data)).unwrap();
        assert_eq!(by_name["Greek"], vec![(0x370, 0x373), (0x376, 0x377)]);
    }

    #[test]
    fn singleton_lines_become_degenerate_ranges() {
        let data = "00AA          ; Latin # Lo       FEMININE ORDINAL INDICATOR\n";
        let by_name = read_ranges(parser(data)).unwrap();
        assert_eq!(by_name["Latin"], vec![(0xAA, 0xAA)]);
    }

    #[test]
    fn unrecognized_scripts_are_skipped() {
        let data = "\
0800..082D    ; Samaritan # Lo  [46] SAMARITAN LETTER ALAF..SAMARITAN MARK EPENTHETIC YUT
0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
";
        let by_name = read_ranges(parser(data)).unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name["Latin"], vec![(0x41, 0x5A)]);
    }

    #[test]
    fn unparseable_lines_are_skipped() {
        let data = "\
@missing: 0000..10FFFF; Unknown
0531..0556    ; Armenian # L&  [38] ARMENIAN CAPITAL LETTER AYB..ARMENIAN CAPITAL LETTER FEH
";
        let by_name = read_ranges(parser(data)).unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name["Armenian"], vec![(0x531, 0x556)]);
    }

    #[test]
    fn ranges_collected_in_file_order() {
        let data = "\
0376..0377    ; Greek
0370..0373    ; Greek
";
        let by_name = read_ranges(parser(data)).unwrap();
        assert_eq!(by_name["Greek"], vec![(0x376, 0x377), (0x370, 0x373)]);
    }
}
