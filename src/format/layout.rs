//! Layout items: the configurable display order of the tmux output.
//!
//! In the configuration file a layout is a list of plain strings. Recognised
//! feature names become dedicated variants, everything else is kept verbatim as
//! a [`LayoutItem::Literal`] separator.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LayoutItem {
    /// Special state (or branch symbol) followed by the current ref
    Branch,
    /// Remote branch followed by divergence
    Remote,
    /// Remote branch alone
    RemoteBranch,
    /// Ahead/behind counts alone
    Divergence,
    /// Working tree flags
    Flags,
    /// Inserted/deleted line counts
    Stats,
    /// Anything else, emitted as is
    Literal(String),
}

impl LayoutItem {
    pub fn as_str(&self) -> &str {
        match self {
            LayoutItem::Branch => "branch",
            LayoutItem::Remote => "remote",
            LayoutItem::RemoteBranch => "remote-branch",
            LayoutItem::Divergence => "divergence",
            LayoutItem::Flags => "flags",
            LayoutItem::Stats => "stats",
            LayoutItem::Literal(text) => text,
        }
    }
}

impl From<&str> for LayoutItem {
    fn from(item: &str) -> Self {
        match item {
            "branch" => LayoutItem::Branch,
            "remote" => LayoutItem::Remote,
            "remote-branch" => LayoutItem::RemoteBranch,
            "divergence" => LayoutItem::Divergence,
            "flags" => LayoutItem::Flags,
            "stats" => LayoutItem::Stats,
            other => LayoutItem::Literal(other.to_string()),
        }
    }
}

impl From<String> for LayoutItem {
    fn from(item: String) -> Self {
        match LayoutItem::from(item.as_str()) {
            LayoutItem::Literal(_) => LayoutItem::Literal(item),
            known => known,
        }
    }
}

impl From<LayoutItem> for String {
    fn from(item: LayoutItem) -> Self {
        match item {
            LayoutItem::Literal(text) => text,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for LayoutItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build a layout from plain strings, as they appear in the config file
pub fn layout_from<I, S>(items: I) -> Vec<LayoutItem>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| LayoutItem::from(item.as_ref()))
        .collect()
}
