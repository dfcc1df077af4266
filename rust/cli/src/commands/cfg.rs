//! # Cfg Command
//!
//! Prints the resolved configuration and where each value came from
//! (default, file, or environment).

use crate::config;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(out: &mut dyn Write, _err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources().map_err(|e| CliError::Config(e.to_string()))?;
    let cfg = &resolved.config;
    let sources = &resolved.sources;

    writeln!(out, "Configuration:")?;
    match cfg.seed {
        Some(seed) => writeln!(out, "  seed = {} ({})", seed, sources.seed.as_str())?,
        None => writeln!(out, "  seed = random ({})", sources.seed.as_str())?,
    }
    writeln!(out, "  emoji = {} ({})", cfg.emoji, sources.emoji.as_str())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_cfg_prints_resolved_values() {
        // SAFETY: serialized test, no concurrent env access
        unsafe {
            std::env::remove_var("MASTERMIND_CONFIG");
            std::env::remove_var("MASTERMIND_SEED");
            std::env::remove_var("MASTERMIND_EMOJI");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_cfg_command(&mut out, &mut err).expect("cfg ok");
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Configuration:"));
        assert!(text.contains("seed = random (default)"));
        assert!(text.contains("emoji = true (default)"));
    }

    #[test]
    #[serial]
    fn test_cfg_shows_env_source() {
        unsafe {
            std::env::remove_var("MASTERMIND_CONFIG");
            std::env::set_var("MASTERMIND_SEED", "31337");
            std::env::remove_var("MASTERMIND_EMOJI");
        }
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_cfg_command(&mut out, &mut err).expect("cfg ok");
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("seed = 31337 (env)"));
        unsafe {
            std::env::remove_var("MASTERMIND_SEED");
        }
    }
}
