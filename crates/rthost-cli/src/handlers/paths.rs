//! Paths command handler.
//!
//! Displays the discovered servicing configuration for diagnostics.

use std::fmt::Write as _;

use anyhow::Result;
use rthost_core::{RUNTIME_DIR_ENV, SERVICING_ROOT_ENV, SERVICING_INDEX_FILE};

use crate::bootstrap::CliConfig;

/// Render the configuration as `key = value` lines.
pub fn render(config: &CliConfig) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "servicing_root = {}", config.servicing_root.path.display());
    let _ = writeln!(out, "servicing_source = {:?}", config.servicing_root.source);
    let _ = writeln!(out, "servicing_location = {}", config.location());
    let _ = writeln!(
        out,
        "servicing_index = {}",
        config.servicing_root.path.join(SERVICING_INDEX_FILE).display()
    );
    let _ = writeln!(out, "runtime_dir = {}", config.runtime_dir.path.display());
    let _ = writeln!(out, "runtime_dir_source = {:?}", config.runtime_dir.source);
    let _ = writeln!(out, "runtime = {}", config.runtime);
    let _ = writeln!(out, "env.servicing_root = {SERVICING_ROOT_ENV}");
    let _ = write!(out, "env.runtime_dir = {RUNTIME_DIR_ENV}");
    out
}

/// Execute the paths command.
pub fn execute(config: &CliConfig) -> Result<()> {
    println!("{}", render(config));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::RuntimeArgs;

    #[test]
    fn render_is_key_value() {
        let config = CliConfig::from_args(&RuntimeArgs {
            servicing_root: Some(String::new()),
            runtime_dir: Some("/opt/rthost".to_string()),
            runtime_name: Some("rthost-test".to_string()),
            runtime_version: Some("0.1.0".to_string()),
        })
        .unwrap();

        let output = render(&config);

        assert!(output.contains("servicing_location = explicit"));
        assert!(output.contains("runtime = rthost-test.0.1.0"));
        assert!(output.lines().all(|line| line.contains(" = ")));
    }
}
