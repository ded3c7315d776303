use anyhow::{Context, Result};
use macroquery::cli::Cli;
use macroquery::exec::ShellRunner;
use macroquery::{case::Case, macros, printer};

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.verbose, args.quiet);

    let case = Case::load(&args.case)
        .with_context(|| format!("failed to load case at '{}'", args.case.display()))?;

    let values = macros::extract_from_macros(&case, &args.comp_name, &args.var, &ShellRunner)
        .with_context(|| format!("macro extraction failed for component '{}'", args.comp_name))?;

    let pairs = printer::pair_up(macros::requested_names(&args.var), values);
    if args.json {
        printer::print_json(&pairs)?;
    } else {
        printer::print_plain(&pairs);
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool) {
    let default = if quiet {
        "off"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    // RUST_LOG still wins when set explicitly.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}
