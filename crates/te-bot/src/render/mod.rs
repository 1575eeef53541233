//! The boundary between roll results and whatever draws them.
//!
//! A [`RollSheet`] carries everything a result image shows: one card per
//! roll, the player's name, and the tuners left. Drawing backends implement
//! [`Renderer`]; the text and JSON renderers here cover terminals and
//! machine consumers.

pub mod icons;
pub mod json;
pub mod text;

use std::path::PathBuf;

use chrono::{DateTime, Local};
use te_core::{RollRecord, RolledStat, Rgb, Settings};
use te_ledger::Quota;
use thiserror::Error;

pub use icons::{DirIconSource, Icon, IconSource, NoIcons};
pub use json::JsonRenderer;
pub use text::{TextFormat, TextRenderer};

/// Stats drawn highlighted even when they did not roll their maximum.
pub const CRIT_STATS: &[&str] = &["暴击", "暴击伤害"];

/// Longest display name shown untruncated, in characters.
const NAME_LIMIT: usize = 8;

/// Errors a renderer can report.
#[derive(Debug, Error)]
pub enum RenderError {
    /// An icon asset could not be found.
    #[error("icon '{0}' not found")]
    MissingIcon(String),

    /// Reading an asset or writing output failed.
    #[error("cannot access {path}: {source}")]
    Io {
        /// The file involved.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Encoding the artifact failed.
    #[error("cannot encode artifact: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Draws a [`RollSheet`] into some artifact: an image, text, JSON.
pub trait Renderer {
    /// What the renderer produces.
    type Artifact;

    /// Render the sheet.
    fn render(&self, sheet: &RollSheet<'_>) -> Result<Self::Artifact, RenderError>;
}

/// One roll as shown on the sheet.
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    /// The roll's number within the day, starting at 1.
    pub number: usize,
    /// The rolled stats.
    pub record: &'a RollRecord,
}

impl Card<'_> {
    /// Card heading.
    pub fn title(&self) -> String {
        format!("第 {} 次梭哈结果", self.number)
    }
}

/// Card grid: near-square, filled row by row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Cards per row.
    pub cols: usize,
    /// Number of rows.
    pub rows: usize,
}

impl Grid {
    /// Grid for `n` cards: `cols = ceil(sqrt(n))`, `rows = ceil(n / cols)`.
    pub fn for_cards(n: usize) -> Self {
        if n == 0 {
            return Self { cols: 0, rows: 0 };
        }
        let mut cols = 1;
        while cols * cols < n {
            cols += 1;
        }
        Self {
            cols,
            rows: n.div_ceil(cols),
        }
    }

    /// Row and column of card `index` (0-based).
    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.cols, index % self.cols)
    }
}

/// How a single stat line is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatStyle {
    /// Drawn in the highlight color.
    pub highlight: bool,
    /// Carries the `★ MAX` tag.
    pub max_tag: bool,
    /// Text color.
    pub color: Rgb,
}

impl StatStyle {
    /// Style for `stat` under the configured colors.
    pub fn of(stat: &RolledStat, settings: &Settings) -> Self {
        let highlight = stat.is_max || CRIT_STATS.contains(&stat.name.as_str());
        Self {
            highlight,
            max_tag: stat.is_max,
            color: if highlight {
                settings.max_value_color
            } else {
                settings.normal_color
            },
        }
    }
}

/// Everything needed to draw one reply.
#[derive(Debug, Clone)]
pub struct RollSheet<'a> {
    /// Rolls to draw, in order.
    pub records: &'a [RollRecord],
    /// Number of the first roll in `records`.
    pub first_number: usize,
    /// Player display name.
    pub user_name: &'a str,
    /// Quota left after this command.
    pub remaining: Quota,
    /// Active settings, for colors.
    pub settings: &'a Settings,
    /// Timestamp printed in the footer.
    pub generated_at: DateTime<Local>,
}

impl<'a> RollSheet<'a> {
    /// Cards in draw order, numbered from `first_number`.
    pub fn cards(&self) -> impl Iterator<Item = Card<'a>> + 'a {
        let first = self.first_number;
        self.records
            .iter()
            .enumerate()
            .map(move |(i, record)| Card {
                number: first + i,
                record,
            })
    }

    /// Grid layout for the cards.
    pub fn grid(&self) -> Grid {
        Grid::for_cards(self.records.len())
    }

    /// Name for the footer, cut to 7 characters plus `...` when too long.
    pub fn display_name(&self) -> String {
        if self.user_name.chars().count() <= NAME_LIMIT {
            self.user_name.to_string()
        } else {
            let head: String = self.user_name.chars().take(NAME_LIMIT - 1).collect();
            format!("{head}...")
        }
    }

    /// Footer quota line.
    pub fn tuner_line(&self) -> String {
        format!("剩余: {}", self.remaining.tuners())
    }

    /// Footer timestamp.
    pub fn timestamp(&self) -> String {
        self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Style for one stat.
    pub fn style(&self, stat: &RolledStat) -> StatStyle {
        StatStyle::of(stat, self.settings)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn stat(name: &str, value: f64, is_percent: bool, is_max: bool) -> RolledStat {
        RolledStat {
            name: name.to_string(),
            icon: name.to_string(),
            value,
            is_percent,
            is_max,
        }
    }

    pub(crate) fn sample_records() -> Vec<RollRecord> {
        vec![
            RollRecord::new(vec![
                stat("暴击", 10.5, true, true),
                stat("攻击", 40.0, false, false),
            ]),
            RollRecord::new(vec![
                stat("共鸣效率", 6.4, true, false),
                stat("暴击伤害", 12.6, true, false),
            ]),
        ]
    }

    pub(crate) fn sheet<'a>(
        records: &'a [RollRecord],
        settings: &'a Settings,
        user_name: &'a str,
    ) -> RollSheet<'a> {
        RollSheet {
            records,
            first_number: 4,
            user_name,
            remaining: Quota::Limited(14),
            settings,
            generated_at: Local::now(),
        }
    }

    #[test]
    fn grid_shapes() {
        assert_eq!(Grid::for_cards(0), Grid { cols: 0, rows: 0 });
        assert_eq!(Grid::for_cards(1), Grid { cols: 1, rows: 1 });
        assert_eq!(Grid::for_cards(2), Grid { cols: 2, rows: 1 });
        assert_eq!(Grid::for_cards(4), Grid { cols: 2, rows: 2 });
        assert_eq!(Grid::for_cards(5), Grid { cols: 3, rows: 2 });
        assert_eq!(Grid::for_cards(10), Grid { cols: 4, rows: 3 });
        assert_eq!(Grid::for_cards(20), Grid { cols: 5, rows: 4 });
    }

    #[test]
    fn grid_positions() {
        let g = Grid::for_cards(5);
        assert_eq!(g.position(0), (0, 0));
        assert_eq!(g.position(2), (0, 2));
        assert_eq!(g.position(3), (1, 0));
    }

    #[test]
    fn cards_continue_numbering() {
        let records = sample_records();
        let settings = Settings::default();
        let s = sheet(&records, &settings, "Player");
        let numbers: Vec<_> = s.cards().map(|c| c.number).collect();
        assert_eq!(numbers, vec![4, 5]);
        assert_eq!(s.cards().next().unwrap().title(), "第 4 次梭哈结果");
    }

    #[test]
    fn long_names_truncated() {
        let records = sample_records();
        let settings = Settings::default();
        assert_eq!(sheet(&records, &settings, "短名").display_name(), "短名");
        assert_eq!(
            sheet(&records, &settings, "八个字的名字正好").display_name(),
            "八个字的名字正好"
        );
        assert_eq!(
            sheet(&records, &settings, "九个字的名字太长了").display_name(),
            "九个字的名字太...",
        );
    }

    #[test]
    fn footer_lines() {
        let records = sample_records();
        let settings = Settings::default();
        let s = sheet(&records, &settings, "Player");
        assert_eq!(s.tuner_line(), "剩余: 700");
        assert_eq!(s.timestamp().len(), "2025-01-01 00:00:00".len());
    }

    #[test]
    fn crit_and_max_are_highlighted() {
        let settings = Settings::default();
        let max = StatStyle::of(&stat("攻击", 50.0, false, true), &settings);
        assert!(max.highlight && max.max_tag);
        assert_eq!(max.color, settings.max_value_color);

        let crit = StatStyle::of(&stat("暴击伤害", 12.6, true, false), &settings);
        assert!(crit.highlight);
        assert!(!crit.max_tag);

        let plain = StatStyle::of(&stat("生命", 320.0, false, false), &settings);
        assert!(!plain.highlight);
        assert_eq!(plain.color, settings.normal_color);
    }
}
