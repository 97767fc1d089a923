//! Configuration of the tmux formatter.
//!
//! The built-in defaults live in `default_config.yml`, compiled into the binary.
//! A user file is decoded *over* those defaults: every key the user sets wins,
//! everything else keeps its default value. Nested mappings are merged key by
//! key, while scalars and lists (the layout) are replaced wholesale.
//!
//! # Public API
//! - [`Config`]: Top-level configuration document
//! - [`TmuxConfig`]: Symbols, styles, layout and options of the tmux output
//! - [`DEFAULT_CONFIG`]: The embedded default configuration, as YAML text

use crate::core::error::{GitmuxError, Result};
use crate::format::layout::LayoutItem;
use crate::format::truncate::TrimDirection;
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;
use std::path::Path;

/// Embedded default configuration, printed by `--printcfg`
pub const DEFAULT_CONFIG: &str = include_str!("default_config.yml");

const DEFAULT_ORIGIN: &str = "built-in defaults";

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tmux: TmuxConfig,
}

/// Configuration of the tmux status string
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TmuxConfig {
    /// Symbols printed before the status components
    pub symbols: Symbols,
    /// tmux style strings printed before symbols and components
    pub styles: Styles,
    /// Display order of the components
    pub layout: Vec<LayoutItem>,
    pub options: Options,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbols {
    /// Shown before the local branch name
    pub branch: String,
    /// Shown before the commit id when HEAD is detached
    #[serde(rename = "hashprefix")]
    pub hash_prefix: String,

    /// Shown before the ahead count
    pub ahead: String,
    /// Shown before the behind count
    pub behind: String,

    pub staged: String,
    pub conflict: String,
    pub modified: String,
    pub untracked: String,
    pub stashed: String,
    /// Shown when the working tree is clean
    pub clean: String,

    pub insertions: String,
    pub deletions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Styles {
    /// Resets all styles, printed before every component
    pub clear: String,

    /// Printed before a special state such as `[rebase]`
    pub state: String,
    pub branch: String,
    pub remote: String,

    pub divergence: String,

    pub staged: String,
    pub conflict: String,
    pub modified: String,
    pub untracked: String,
    pub stashed: String,
    pub clean: String,

    pub insertions: String,
    pub deletions: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Maximum length of branch names, zero or negative means unlimited
    pub branch_max_len: i32,
    #[serde(alias = "branch_trim_direction")]
    pub branch_trim: TrimDirection,
    /// Replaces the truncated part of a branch name
    pub ellipsis: String,
    /// Don't show the clean symbol
    pub hide_clean: bool,
    /// Put a space between behind and ahead counts
    pub divergence_space: bool,
    /// Show ahead before behind
    pub swap_divergence: bool,
    /// Show flag symbols without their count
    pub flags_without_count: bool,
}

impl Config {
    /// Decode the embedded default configuration
    pub fn builtin() -> Result<Self> {
        let value = parse_yaml(DEFAULT_CONFIG, DEFAULT_ORIGIN)?;
        decode(value, DEFAULT_ORIGIN)
    }

    /// Load the configuration, overlaying the file at `path` (if any) on the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Self::builtin();
        };

        log::debug!("Loading config file {}", path.display());
        let content =
            std::fs::read_to_string(path).map_err(|e| GitmuxError::config_read(path, e))?;
        Self::from_yaml(&content, &path.display().to_string())
    }

    /// Decode `yaml` over the built-in defaults. `origin` names the source in errors.
    pub fn from_yaml(yaml: &str, origin: &str) -> Result<Self> {
        let mut value = parse_yaml(DEFAULT_CONFIG, DEFAULT_ORIGIN)?;
        let mut overlay = parse_yaml(yaml, origin)?;
        resolve_aliases(&mut overlay);
        merge(&mut value, overlay);
        decode(value, origin)
    }
}

/// Rename alias keys of a user document to the key the defaults use.
///
/// Merging an alias next to the default key would leave two keys for the
/// same field. An explicit `branch_trim` wins over its alias.
fn resolve_aliases(overlay: &mut Value) {
    let Some(Value::Mapping(options)) = overlay
        .get_mut("tmux")
        .and_then(|tmux| tmux.get_mut("options"))
    else {
        return;
    };

    if let Some(trim) = options.remove("branch_trim_direction") {
        if !options.contains_key("branch_trim") {
            options.insert(Value::from("branch_trim"), trim);
        }
    }
}

fn parse_yaml(yaml: &str, origin: &str) -> Result<Value> {
    serde_yaml_ng::from_str(yaml).map_err(|e| GitmuxError::config_parse(origin, e))
}

fn decode(value: Value, origin: &str) -> Result<Config> {
    serde_yaml_ng::from_value(value).map_err(|e| GitmuxError::config_parse(origin, e))
}

/// Recursively overlay `overlay` onto `base`.
fn merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (_, Value::Null) => {}
        (Value::Mapping(base), Value::Mapping(overlay)) => {
            for (key, value) in overlay {
                match base.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, overlay) => *slot = overlay,
    }
}
