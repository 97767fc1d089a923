//! tmux status string formatter.
//!
//! The output is built by walking the configured layout. Each feature item is
//! rendered by a pure function into its own fragment, every fragment starting
//! with the `clear` style so that it never inherits the style of its left
//! neighbour. Fragments with nothing to show are empty and simply vanish from
//! the output; renderers never add separator spaces of their own, spacing is
//! up to the literal items of the layout.
//!
//! Repositories without commits skip the layout and always show the branch
//! name, a `[no commits yet]` marker and the flags.
//!
//! Once everything is rendered, [`RESET_STYLES`] is appended so that text
//! following the gitmux output in the tmux status line is left untouched.

use crate::core::config::TmuxConfig;
use crate::core::error::Result;
use crate::core::status::Status;
use crate::format::layout::LayoutItem;
use crate::format::truncate::truncate;
use crate::format::StatusFormatter;
use std::io::Write;

/// Resets all tmux styles, appended to the output
pub const RESET_STYLES: &str = "#[norange default]";

/// Formats statuses as tmux style strings.
#[derive(Debug, Clone, Copy)]
pub struct TmuxFormatter<'c> {
    config: &'c TmuxConfig,
}

impl<'c> TmuxFormatter<'c> {
    pub fn new(config: &'c TmuxConfig) -> Self {
        Self { config }
    }

    /// Full output for `st`, reset sequence included
    pub fn render(&self, st: &Status) -> String {
        Renderer::new(self.config, st).render()
    }

    /// Output for `st` without the trailing reset sequence
    pub fn format_body(&self, st: &Status) -> String {
        Renderer::new(self.config, st).format()
    }
}

impl StatusFormatter for TmuxFormatter<'_> {
    fn format(&self, w: &mut dyn Write, st: &Status) -> Result<()> {
        w.write_all(self.render(st).as_bytes())?;
        Ok(())
    }
}

/// Renders one status. Lives for a single formatting call.
struct Renderer<'a> {
    cfg: &'a TmuxConfig,
    st: &'a Status,
}

impl<'a> Renderer<'a> {
    fn new(cfg: &'a TmuxConfig, st: &'a Status) -> Self {
        Self { cfg, st }
    }

    fn render(&self) -> String {
        let mut out = self.format();
        out.push_str(RESET_STYLES);
        out
    }

    fn format(&self) -> String {
        if self.st.is_initial {
            return self.initial();
        }

        self.cfg
            .layout
            .iter()
            .map(|item| self.item(item))
            .collect()
    }

    fn item(&self, item: &LayoutItem) -> String {
        match item {
            LayoutItem::Branch => self.branch(),
            LayoutItem::Remote => self.remote(),
            LayoutItem::RemoteBranch => self.remote_branch(),
            LayoutItem::Divergence => self.divergence(),
            LayoutItem::Flags => self.flags(),
            LayoutItem::Stats => self.stats(),
            LayoutItem::Literal(text) => format!("{}{text}", self.cfg.styles.clear),
        }
    }

    fn initial(&self) -> String {
        format!(
            "{}{}{} [no commits yet]{}",
            self.cfg.styles.clear,
            self.cfg.styles.branch,
            self.trunc_branch(&self.st.local_branch),
            self.flags()
        )
    }

    fn trunc_branch(&self, name: &str) -> String {
        let opts = &self.cfg.options;
        truncate(name, &opts.ellipsis, opts.branch_max_len, opts.branch_trim)
    }

    /// Special state, or branch symbol, followed by the current ref.
    fn branch(&self) -> String {
        let styles = &self.cfg.styles;
        let prefix = match self.st.state.label() {
            Some(label) => format!("{}{}{label}", styles.clear, styles.state),
            None => format!("{}{}{}", styles.clear, styles.branch, self.cfg.symbols.branch),
        };

        prefix + &self.current_ref()
    }

    fn current_ref(&self) -> String {
        let styles = &self.cfg.styles;
        if self.st.is_detached {
            // commit ids are never truncated
            return format!(
                "{}{}{}{}",
                styles.clear, styles.branch, self.cfg.symbols.hash_prefix, self.st.head
            );
        }

        format!(
            "{}{}{}",
            styles.clear,
            styles.branch,
            self.trunc_branch(&self.st.local_branch)
        )
    }

    fn remote(&self) -> String {
        let parts: Vec<String> = [self.remote_branch(), self.divergence()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect();
        parts.join(" ")
    }

    fn remote_branch(&self) -> String {
        if self.st.remote_branch.is_empty() {
            return String::new();
        }

        format!(
            "{}{}{}",
            self.cfg.styles.clear,
            self.cfg.styles.remote,
            self.trunc_branch(&self.st.remote_branch)
        )
    }

    fn divergence(&self) -> String {
        let st = self.st;
        if st.behind_count == 0 && st.ahead_count == 0 {
            return String::new();
        }

        let symbols = &self.cfg.symbols;
        let opts = &self.cfg.options;

        let behind =
            (st.behind_count != 0).then(|| format!("{}{}", symbols.behind, st.behind_count));
        let ahead = (st.ahead_count != 0).then(|| format!("{}{}", symbols.ahead, st.ahead_count));

        let parts: Vec<String> = if opts.swap_divergence {
            [ahead, behind]
        } else {
            [behind, ahead]
        }
        .into_iter()
        .flatten()
        .collect();

        let sep = if opts.divergence_space { " " } else { "" };
        format!(
            "{}{}{}",
            self.cfg.styles.clear,
            self.cfg.styles.divergence,
            parts.join(sep)
        )
    }

    /// A single flag. `None` when there is nothing meaningful to show.
    fn flag(&self, style: &str, symbol: &str, count: usize) -> Option<String> {
        if count == 0 {
            return None;
        }

        if self.cfg.options.flags_without_count {
            if symbol.is_empty() {
                return None;
            }
            return Some(format!("{style}{symbol}"));
        }

        Some(format!("{style}{symbol}{count}"))
    }

    fn flags(&self) -> String {
        let st = self.st;
        let styles = &self.cfg.styles;
        let symbols = &self.cfg.symbols;

        let flags: Vec<String> = if st.is_clean {
            let clean = (!self.cfg.options.hide_clean && !symbols.clean.is_empty())
                .then(|| format!("{}{}", styles.clean, symbols.clean));

            [
                self.flag(&styles.stashed, &symbols.stashed, st.num_stashed),
                clean,
            ]
            .into_iter()
            .flatten()
            .collect()
        } else {
            [
                self.flag(&styles.staged, &symbols.staged, st.num_staged),
                self.flag(&styles.conflict, &symbols.conflict, st.num_conflicts),
                self.flag(&styles.modified, &symbols.modified, st.num_modified),
                self.flag(&styles.stashed, &symbols.stashed, st.num_stashed),
                self.flag(&styles.untracked, &symbols.untracked, st.num_untracked),
            ]
            .into_iter()
            .flatten()
            .collect()
        };

        if flags.is_empty() {
            return String::new();
        }
        format!("{}{}", styles.clear, flags.join(" "))
    }

    fn stats(&self) -> String {
        let st = self.st;
        let styles = &self.cfg.styles;
        let symbols = &self.cfg.symbols;

        let stats: Vec<String> = [
            (st.insertions != 0)
                .then(|| format!("{}{}{}", styles.insertions, symbols.insertions, st.insertions)),
            (st.deletions != 0)
                .then(|| format!("{}{}{}", styles.deletions, symbols.deletions, st.deletions)),
        ]
        .into_iter()
        .flatten()
        .collect();

        if stats.is_empty() {
            return String::new();
        }
        format!("{}{}", styles.clear, stats.join(" "))
    }
}
