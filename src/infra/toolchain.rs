//! Toolchain invocation
//!
//! Expands command templates and runs the external compiler/linker as a
//! blocking subprocess with inherited stdio.

use std::path::Path;
use std::process::Command;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::BuildError;

/// Substitute environment variable references in a command string.
///
/// Both `$NAME` and `${NAME}` forms are recognized; names follow
/// `[A-Za-z_][A-Za-z0-9_]*`. References to unset variables are left
/// verbatim.
pub fn expand_env_vars(input: &str) -> String {
    let re = env_reference_pattern();

    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;

    for cap in re.captures_iter(input) {
        let Some(full_match) = cap.get(0) else {
            continue;
        };
        let Some(name) = cap.get(1).or_else(|| cap.get(2)) else {
            continue;
        };

        // Append text before this match
        output.push_str(&input[last_end..full_match.start()]);

        match std::env::var(name.as_str()) {
            Ok(value) => output.push_str(&value),
            Err(_) => output.push_str(full_match.as_str()),
        }

        last_end = full_match.end();
    }

    // Append remaining text after last match
    output.push_str(&input[last_end..]);

    output
}

fn env_reference_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$(?:\{([A-Za-z_][A-Za-z0-9_]*)\}|([A-Za-z_][A-Za-z0-9_]*))")
            .expect("env reference pattern is valid")
    })
}

/// Run a whitespace-tokenized command, blocking until it exits.
///
/// Stdio is inherited, so the tool's own diagnostics reach the user
/// unmodified. A nonzero exit maps to [`BuildError::Toolchain`] carrying
/// the child's status code.
pub fn run(command: &str, cwd: Option<&Path>) -> Result<(), BuildError> {
    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return Err(BuildError::CommandSpawn {
            command: command.to_string(),
            error: "empty command".to_string(),
        });
    };

    let mut child = Command::new(program);
    child.args(parts);
    if let Some(dir) = cwd {
        child.current_dir(dir);
    }

    let status = child.status().map_err(|e| BuildError::CommandSpawn {
        command: command.to_string(),
        error: e.to_string(),
    })?;

    if !status.success() {
        return Err(BuildError::Toolchain {
            command: command.to_string(),
            code: status.code().unwrap_or(1),
        });
    }

    Ok(())
}
