//! Macro dump scanning and extraction.
//!
//! The case's generated `Macros.make` is the only place that resolves the
//! per-component build settings outside of CMake, so we run it through make
//! in print-data-base mode (`-p`) and scrape the variable bindings out of
//! the dump. `COMP_NAME` conditionals in the macro file are honored by the
//! tool itself, which is what makes per-sharedlib customization work.

use anyhow::Result;
use log::debug;

use crate::case::Case;
use crate::exec::CommandRunner;

/// Compiler, flag, and linker variables every extraction reports, in output
/// order. Caller-supplied extras follow these.
pub const STANDARD_VARS: &[&str] = &[
    "SFC",
    "SCC",
    "SCXX",
    "MPIFC",
    "MPICC",
    "MPICXX",
    "CMAKE_Fortran_FLAGS",
    "CMAKE_C_FLAGS",
    "CMAKE_CXX_FLAGS",
    "CPPDEFS",
    "CMAKE_EXE_LINKER_FLAGS",
];

/// Narrow `name -> value` interface over a macro backend.
///
/// Today the only backend is the text dump of a make run; a structured
/// configuration query could stand in without touching the extraction
/// callers.
pub trait MacroSource {
    fn value(&self, name: &str) -> String;
}

/// Captured output of one `make -p` run. Discarded after extraction.
#[derive(Debug, Clone)]
pub struct MacroDump(String);

impl MacroDump {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn text(&self) -> &str {
        &self.0
    }
}

impl MacroSource for MacroDump {
    fn value(&self, name: &str) -> String {
        find_value(&self.0, name)
    }
}

/// Scan `text` for the first line assigning `name` with `:=` and return the
/// trimmed value.
///
/// Returns an empty string when no line matches; an unset variable and a
/// variable set to nothing are indistinguishable here. Later duplicate
/// definitions are ignored, dumps are assumed single-definition.
pub fn find_value(text: &str, name: &str) -> String {
    let look_for = format!("{name} :=");
    for line in text.lines() {
        if line.starts_with(&look_for) {
            return line
                .rsplit(":=")
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();
        }
    }

    String::new()
}

/// Query macro settings for one component.
///
/// Runs the case's `Macros.make` in print-data-base mode with `COMP_NAME`
/// set, then pulls [`STANDARD_VARS`] plus `extra_vars` out of the dump.
/// The result has one entry per requested name, in request order, with
/// empty strings for names the dump does not bind. A failing make run is
/// fatal; there is no retry or partial result.
pub fn extract_from_macros(
    case: &Case,
    comp_name: &str,
    extra_vars: &[String],
    runner: &dyn CommandRunner,
) -> Result<Vec<String>> {
    let make_args = case.standard_makefile_args(true);
    let cmd = format!(
        "{} -f Macros.make COMP_NAME={} {} -p",
        case.gmake(),
        comp_name,
        make_args
    );

    debug!("macro dump command: {cmd}");
    let output = runner.run(&cmd, case.root())?;
    debug!("captured {} bytes of macro dump", output.len());

    let dump = MacroDump::new(output);
    let mut result = Vec::with_capacity(STANDARD_VARS.len() + extra_vars.len());
    for name in requested_names(extra_vars) {
        result.push(dump.value(&name));
    }

    Ok(result)
}

/// The full ordered name list for one extraction: the standard variables
/// followed by the caller's extras, duplicates preserved.
pub fn requested_names(extra_vars: &[String]) -> Vec<String> {
    STANDARD_VARS
        .iter()
        .map(|s| s.to_string())
        .chain(extra_vars.iter().cloned())
        .collect()
}
