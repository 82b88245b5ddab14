use std::collections::BTreeMap;
use std::io;

use uniprop_parse::{UcdFile, UcdLineParser, UnicodeData};

use crate::args::ArgMatches;
use crate::error::Result;
use crate::runs::RunAccumulator;

/// The General_Category value reserved for surrogate codepoints. Rows
/// carrying it never reach the accumulator, so a run of some other
/// category continues straight across the surrogate block.
const SURROGATE_CATEGORY: &str = "Cs";

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let dir = args.ucd_dir()?;
    let (rows, skipped) = read_rows(UnicodeData::from_dir(dir)?)?;
    if skipped > 0 {
        eprintln!("skipped {} unparseable lines in UnicodeData.txt", skipped);
    }
    let by_name = coalesce(rows);

    let mut wtr = args.writer()?;
    wtr.names(by_name.keys())?;
    for (name, table) in &by_name {
        wtr.ranges(name, table)?;
    }
    wtr.finish()?;
    Ok(())
}

/// Collect every row that parses, counting the lines that do not.
///
/// A line that fails the grammar is skipped; an I/O failure aborts.
pub fn read_rows<R: io::Read>(
    parser: UcdLineParser<R, UnicodeData>,
) -> Result<(Vec<UnicodeData>, u64)> {
    let mut rows = vec![];
    let mut skipped = 0;
    for result in parser {
        match result {
            Ok(row) => rows.push(row),
            Err(ref err) if !err.is_io_error() => skipped += 1,
            Err(err) => return Err(err.into()),
        }
    }
    Ok((rows, skipped))
}

/// Coalesce rows into per-category range tables, discarding surrogate
/// rows before run accumulation.
pub fn coalesce(rows: Vec<UnicodeData>) -> BTreeMap<String, Vec<(u32, u32)>> {
    let mut runs = RunAccumulator::new();
    for row in rows {
        if row.general_category == SURROGATE_CATEGORY {
            continue;
        }
        runs.push(row.codepoint.value(), &row.general_category);
    }
    runs.into_tables()
}

#[cfg(test)]
mod tests {
    use uniprop_parse::{UcdLineParser, UnicodeData};

    use super::{coalesce, read_rows};

    fn parser(data: &str) -> UcdLineParser<&[u8], UnicodeData> {
        UcdLineParser::new(None, data.as_bytes())
    }

    #[test]
    fn uppercase_run_coalesces() {
        let mut data = String::new();
        for cp in 0x41..0x5B {
            data.push_str(&format!(
                "{:04X};LATIN CAPITAL LETTER;Lu;0;L;;;;;N;;;;;\n",
                cp
            ));
        }
        let (rows, skipped) = read_rows(parser(&data)).unwrap();
        assert_eq!(skipped, 0);
        let tables = coalesce(rows);
        assert_eq!(tables["Lu"], vec![(0x41, 0x5A)]);
    }

    #[test]
    fn surrogates_are_excluded() {
        let data = "\
D7FB;HANGUL JONGSEONG PHIEUPH-THIEUTH;Lo;0;L;;;;;N;;;;;
D800;<Non Private Use High Surrogate, First>;Cs;0;L;;;;;N;;;;;
DFFF;<Low Surrogate, Last>;Cs;0;L;;;;;N;;;;;
E000;<Private Use, First>;Co;0;L;;;;;N;;;;;
";
        let (rows, _) = read_rows(parser(data)).unwrap();
        let tables = coalesce(rows);
        assert!(tables.get("Cs").is_none());
        assert_eq!(tables["Lo"], vec![(0xD7FB, 0xD7FB)]);
        assert_eq!(tables["Co"], vec![(0xE000, 0xE000)]);
    }

    #[test]
    fn run_continues_across_discarded_rows() {
        let data = "\
0041;FAKE A;Lu;0;L;;;;;N;;;;;
0042;FAKE SURROGATE;Cs;0;L;;;;;N;;;;;
0043;FAKE C;Lu;0;L;;;;;N;;;;;
";
        let (rows, _) = read_rows(parser(data)).unwrap();
        let tables = coalesce(rows);
        assert_eq!(tables["Lu"], vec![(0x41, 0x43)]);
    }

    #[test]
    fn malformed_line_skipped_and_counted() {
        let data = "\
0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;
0042;TRUNCATED;Lu;0;L;;;;;N
0043;LATIN CAPITAL LETTER C;Lu;0;L;;;;;N;;;;0063;
";
        let (rows, skipped) = read_rows(parser(data)).unwrap();
        assert_eq!(skipped, 1);
        assert_eq!(rows.len(), 2);
        let tables = coalesce(rows);
        assert_eq!(tables["Lu"], vec![(0x41, 0x43)]);
    }

    #[test]
    fn digits_merge_across_numeric_gap() {
        // Consecutive rows with the same category merge even when their
        // codepoints are far apart.
        let data = "\
0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;
0039;DIGIT NINE;Nd;0;EN;;9;9;9;N;;;;;
0660;ARABIC-INDIC DIGIT ZERO;Nd;0;AN;;0;0;0;N;;;;;
";
        let (rows, _) = read_rows(parser(data)).unwrap();
        let tables = coalesce(rows);
        assert_eq!(tables["Nd"], vec![(0x30, 0x660)]);
    }
}
