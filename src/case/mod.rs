//! Case handle: build settings for one case directory.

use std::{
    collections::HashMap,
    env, fs,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use anyhow::{bail, Result};

/// Build settings the generated macro file conditions on, in the order they
/// appear on the make command line.
const MAKEFILE_ARG_KEYS: &[&str] = &["COMPILER", "MACH", "MPILIB", "DEBUG", "SMP", "OS"];

/// A case directory plus its build settings.
///
/// Settings come from `<caseroot>/case.cfg` (`KEY=VALUE` lines, `#`
/// comments), with matching process-environment variables layered on top.
#[derive(Debug, Clone)]
pub struct Case {
    root: PathBuf,
    settings: HashMap<String, String>,
}

impl Case {
    pub fn load(caseroot: &Path) -> Result<Self> {
        if !caseroot.is_dir() {
            bail!("case directory '{}' does not exist", caseroot.display());
        }

        let mut settings = HashMap::new();

        // A missing config file is fine: the case can be described entirely
        // through the environment.
        let cfg_path = caseroot.join("case.cfg");
        if cfg_path.exists() {
            let file = fs::File::open(&cfg_path)?;
            let reader = BufReader::new(file);
            for line in reader.lines() {
                let line = line?;
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((k, v)) = line.split_once('=') {
                    settings.insert(k.trim().to_string(), v.trim().to_string());
                }
            }
        }

        // Environment takes precedence over the file.
        for (k, v) in env::vars() {
            if is_case_key(&k) {
                settings.insert(k, v);
            }
        }

        Ok(Self {
            root: caseroot.to_path_buf(),
            settings,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.settings.get(key).cloned()
    }

    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key)
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// Override a setting in place. Lets an embedding orchestrator adjust a
    /// loaded case without round-tripping through the config file.
    pub fn set(&mut self, key: &str, value: &str) {
        self.settings.insert(key.to_string(), value.to_string());
    }

    /// The make program to invoke for this case.
    pub fn gmake(&self) -> String {
        self.get("GMAKE").unwrap_or_else(|| "make".to_string())
    }

    /// Render the standard makefile arguments: one `KEY=value` pair per set
    /// build variable, in a fixed order, plus `SHAREDLIB=TRUE` when building
    /// shared libraries. Unset variables are omitted.
    pub fn standard_makefile_args(&self, shared_lib: bool) -> String {
        let mut args: Vec<String> = Vec::new();
        for key in MAKEFILE_ARG_KEYS {
            if let Some(val) = self.get(key) {
                args.push(make_assignment(key, &val));
            }
        }
        if shared_lib {
            args.push("SHAREDLIB=TRUE".to_string());
        }
        args.join(" ")
    }
}

fn is_case_key(k: &str) -> bool {
    MAKEFILE_ARG_KEYS.contains(&k) || k == "GMAKE"
}

fn make_assignment(key: &str, val: &str) -> String {
    if val.contains(char::is_whitespace) {
        format!("{key}=\"{val}\"")
    } else {
        format!("{key}={val}")
    }
}
