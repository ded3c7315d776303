//! Build-macro introspection for case directories.
//!
//! The build orchestrator generates a `Macros.make` per case; this crate
//! runs it through make in print-data-base mode and scrapes requested
//! variable bindings out of the dump. See [`macros::extract_from_macros`]
//! for the main entry point; the binary in `main.rs` is a thin CLI over it.

pub mod case;
pub mod cli;
pub mod exec;
pub mod macros;
pub mod printer;

pub use case::Case;
pub use exec::{CommandRunner, ExecError, ShellRunner};
pub use macros::{extract_from_macros, find_value, MacroDump, MacroSource, STANDARD_VARS};
