use uniprop_parse::{Script, UcdFile, UnicodeData};

use crate::args::ArgMatches;
use crate::error::Result;
use crate::general_category;
use crate::script;

pub fn command(args: ArgMatches<'_>) -> Result<()> {
    let dir = args.ucd_dir()?;
    // Open both inputs up front. A missing file aborts the run before
    // anything is parsed or written.
    let unicode_data = UnicodeData::from_dir(&dir)?;
    let scripts = Script::from_dir(&dir)?;

    let (rows, skipped) = general_category::read_rows(unicode_data)?;
    if skipped > 0 {
        eprintln!("skipped {} unparseable lines in UnicodeData.txt", skipped);
    }
    let categories = general_category::coalesce(rows);
    let scripts = script::read_ranges(scripts)?;

    let mut wtr = args.writer()?;
    wtr.lookup_reexports()?;

    wtr.begin_module("general_category")?;
    wtr.names(categories.keys())?;
    for (name, table) in &categories {
        wtr.ranges(name, table)?;
    }
    wtr.end_module()?;

    wtr.begin_module("script")?;
    wtr.names(scripts.keys())?;
    for (name, table) in &scripts {
        wtr.ranges(name, table)?;
    }
    wtr.end_module()?;

    wtr.finish()?;
    Ok(())
}
