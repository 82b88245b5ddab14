use clap::{App, AppSettings, Arg, SubCommand};

const TEMPLATE: &'static str = "\
{bin} {version}
{author}
{about}

USAGE:
    {usage}

SUBCOMMANDS:
{subcommands}

OPTIONS:
{unified}";

const TEMPLATE_SUB: &'static str = "\
{before-help}
USAGE:
    {usage}

ARGS:
{positionals}

OPTIONS:
{unified}";

const ABOUT: &'static str = "
uniprop-generate is a tool that compiles parts of the Unicode character
database into Rust source files containing static codepoint range tables.

Tables are represented by a sorted sequence of closed codepoint ranges,
which can be searched quickly via binary search. Each table family also
gets a BY_NAME slice mapping property names to their tables, so a consumer
can dispatch on a property name at runtime.
";

const ABOUT_GENERAL_CATEGORY: &'static str = "\
general-category produces one table of Unicode codepoint ranges for each
General_Category value assigned in UnicodeData.txt, except the surrogate
category Cs.
";

const ABOUT_SCRIPT: &'static str = "\
script produces one table of Unicode codepoint ranges for each supported
Script value, with ranges taken from Scripts.txt exactly as written.
";

const ABOUT_CHARCLASS: &'static str = "\
charclass compiles the general category and script tables in one shot,
wrapping each family in its own module and re-exporting the lookup
routines from the uniprop-table crate. The result is a complete character
class module for embedding in a text matching engine.
";

/// Build a clap application.
pub fn app() -> App<'static, 'static> {
    // Flags and arguments shared by every subcommand.
    let ucd_dir = Arg::with_name("ucd-dir")
        .required(true)
        .help("Directory containing the Unicode character database files.");
    let flag_out = Arg::with_name("out")
        .long("out")
        .help(
            "Write to the given file instead of stdout. The file is only \
             replaced after the whole run succeeds.",
        )
        .takes_value(true);
    let flag_chars = Arg::with_name("chars").long("chars").help(
        "Write codepoints as character literals. If a codepoint \
         cannot be written as a character literal, then it is \
         silently dropped.",
    );

    let cmd_general_category = SubCommand::with_name("general-category")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Create the General_Category property tables.")
        .before_help(ABOUT_GENERAL_CATEGORY)
        .arg(ucd_dir.clone())
        .arg(flag_out.clone())
        .arg(flag_chars.clone());
    let cmd_script = SubCommand::with_name("script")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Create the Script property tables.")
        .before_help(ABOUT_SCRIPT)
        .arg(ucd_dir.clone())
        .arg(flag_out.clone())
        .arg(flag_chars.clone());
    let cmd_charclass = SubCommand::with_name("charclass")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .template(TEMPLATE_SUB)
        .about("Create the combined character class module.")
        .before_help(ABOUT_CHARCLASS)
        .arg(ucd_dir.clone())
        .arg(flag_out.clone())
        .arg(flag_chars.clone());

    App::new("uniprop-generate")
        .author(clap::crate_authors!())
        .version(clap::crate_version!())
        .about(ABOUT)
        .template(TEMPLATE)
        .max_term_width(100)
        .setting(AppSettings::UnifiedHelpMessage)
        .subcommand(cmd_general_category)
        .subcommand(cmd_script)
        .subcommand(cmd_charclass)
}

#[cfg(test)]
mod tests {
    #[test]
    fn author_line_is_not_blank() {
        // The help templates render an {author} line.
        assert!(!clap::crate_authors!().is_empty());
    }
}
