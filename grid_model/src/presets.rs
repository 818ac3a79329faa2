// presets.rs - Puzzles compiled into the binary

use crate::config::{ConfigError, PuzzleConfig};

pub struct Preset {
    pub name: &'static str,
    pub source: &'static str,
}

pub const DEFAULT_PRESET: &str = "vault-of-echoes";

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "vault-of-echoes",
        source: include_str!("../puzzles/vault_of_echoes.toml"),
    },
];

pub fn find(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|preset| preset.name == name)
}

/// Parse the built-in puzzle called `name`.
pub fn load(name: &str) -> Result<PuzzleConfig, ConfigError> {
    let preset = find(name).ok_or_else(|| ConfigError::UnknownPreset(name.to_string()))?;
    PuzzleConfig::from_toml_str(preset.source)
}
