use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "macroquery",
    about = "Query Macros.make variable bindings for a case component",
    version
)]
pub struct Cli {
    /// Component whose conditional block of the macro file applies.
    #[arg(value_name = "COMP_NAME")]
    pub comp_name: String,

    /// Case directory containing the generated Macros.make.
    #[arg(long, default_value = ".", value_name = "DIR")]
    pub case: PathBuf,

    /// Extra variable name to report after the standard list.
    /// Can be used multiple times: --var FOO --var BAR
    #[arg(long = "var", value_name = "NAME", action = clap::ArgAction::Append)]
    pub var: Vec<String>,

    /// Emit a JSON array of {name, value} objects instead of text lines.
    #[arg(long)]
    pub json: bool,

    /// Increase diagnostic verbosity (-v info, -vv debug).
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Silence diagnostics entirely.
    #[arg(short = 'q', long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
