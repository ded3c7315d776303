//! Result rendering: plain text, colorized terminal output, JSON.

use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

/// One requested variable with its extracted value. Empty `value` means the
/// dump did not bind the name (or bound it to nothing).
#[derive(Debug, Clone, Serialize)]
pub struct MacroValue {
    pub name: String,
    pub value: String,
}

/// Zip requested names with their extracted values, preserving order.
pub fn pair_up(names: Vec<String>, values: Vec<String>) -> Vec<MacroValue> {
    names
        .into_iter()
        .zip(values)
        .map(|(name, value)| MacroValue { name, value })
        .collect()
}

/// Print one `NAME := value` line per entry, with the name colorized when
/// stdout is a terminal.
pub fn print_plain(pairs: &[MacroValue]) {
    let tty = std::io::stdout().is_terminal();
    for p in pairs {
        if tty {
            println!("{} := {}", p.name.cyan(), p.value);
        } else {
            println!("{} := {}", p.name, p.value);
        }
    }
}

/// Print the result as a JSON array of `{name, value}` objects, in request
/// order.
pub fn print_json(pairs: &[MacroValue]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(pairs)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pairs_preserve_order() {
        let pairs = pair_up(
            vec!["SFC".into(), "SCC".into()],
            vec!["ifort".into(), "icc".into()],
        );
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].name, "SFC");
        assert_eq!(pairs[0].value, "ifort");
        assert_eq!(pairs[1].name, "SCC");
        assert_eq!(pairs[1].value, "icc");
    }

    #[test]
    fn json_shape_is_stable() {
        let pairs = pair_up(vec!["CPPDEFS".into()], vec!["-DFOO -DBAR".into()]);
        let json = serde_json::to_value(&pairs).unwrap();
        assert_eq!(json[0]["name"], "CPPDEFS");
        assert_eq!(json[0]["value"], "-DFOO -DBAR");
    }
}
