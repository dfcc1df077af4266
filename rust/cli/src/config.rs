use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Seed for the round's secret; `None` means a fresh random seed.
    pub seed: Option<u64>,
    /// Render color rows as emoji (false falls back to ASCII symbols).
    pub emoji: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

impl ValueSource {
    pub fn as_str(self) -> &'static str {
        match self {
            ValueSource::Default => "default",
            ValueSource::File => "file",
            ValueSource::Env => "env",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub emoji: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            emoji: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            emoji: true,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Resolves the configuration: defaults, then the TOML file named by
/// `MASTERMIND_CONFIG`, then `MASTERMIND_SEED` / `MASTERMIND_EMOJI` env
/// overrides. Tracks where each value came from for the `cfg` command.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("MASTERMIND_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.emoji {
            cfg.emoji = v;
            sources.emoji = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("MASTERMIND_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid("Invalid seed".into()))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(emoji) = std::env::var("MASTERMIND_EMOJI")
        && !emoji.is_empty()
    {
        cfg.emoji =
            parse_bool(&emoji).ok_or_else(|| ConfigError::Invalid("Invalid emoji".into()))?;
        sources.emoji = ValueSource::Env;
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    emoji: Option<bool>,
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn clear_env() {
        // SAFETY: tests are serialized, no concurrent env access
        unsafe {
            std::env::remove_var("MASTERMIND_CONFIG");
            std::env::remove_var("MASTERMIND_SEED");
            std::env::remove_var("MASTERMIND_EMOJI");
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        let resolved = load_with_sources().expect("load ok");
        assert_eq!(resolved.config, Config::default());
        assert!(matches!(resolved.sources.seed, ValueSource::Default));
        assert!(matches!(resolved.sources.emoji, ValueSource::Default));
    }

    #[test]
    #[serial]
    fn test_env_seed_overrides_default() {
        clear_env();
        unsafe {
            std::env::set_var("MASTERMIND_SEED", "1234");
        }
        let resolved = load_with_sources().expect("load ok");
        assert_eq!(resolved.config.seed, Some(1234));
        assert!(matches!(resolved.sources.seed, ValueSource::Env));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_env_seed_is_rejected() {
        clear_env();
        unsafe {
            std::env::set_var("MASTERMIND_SEED", "not-a-number");
        }
        assert!(load_with_sources().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_file_config_then_env_precedence() {
        clear_env();
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "seed = 7\nemoji = false").expect("write toml");
        unsafe {
            std::env::set_var("MASTERMIND_CONFIG", file.path());
            std::env::set_var("MASTERMIND_SEED", "8");
        }
        let resolved = load_with_sources().expect("load ok");
        // env wins over file for seed, file sets emoji
        assert_eq!(resolved.config.seed, Some(8));
        assert!(!resolved.config.emoji);
        assert!(matches!(resolved.sources.seed, ValueSource::Env));
        assert!(matches!(resolved.sources.emoji, ValueSource::File));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_emoji_env_accepts_bool_spellings() {
        clear_env();
        unsafe {
            std::env::set_var("MASTERMIND_EMOJI", "off");
        }
        let cfg = load().expect("load ok");
        assert!(!cfg.emoji);
        clear_env();
    }
}
