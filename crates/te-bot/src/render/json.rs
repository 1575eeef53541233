//! JSON rendering for machine consumers.

use serde::Serialize;
use te_core::RolledStat;

use super::{RenderError, Renderer, RollSheet};

#[derive(Serialize)]
struct SheetView<'a> {
    user: String,
    generated_at: String,
    remaining_rolls: Option<u32>,
    remaining_tuners: String,
    grid: [usize; 2],
    cards: Vec<CardView<'a>>,
}

#[derive(Serialize)]
struct CardView<'a> {
    number: usize,
    title: String,
    stats: Vec<StatView<'a>>,
}

#[derive(Serialize)]
struct StatView<'a> {
    #[serde(flatten)]
    stat: &'a RolledStat,
    display: String,
    highlight: bool,
    color: String,
}

/// Renders a sheet as pretty-printed JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    type Artifact = String;

    fn render(&self, sheet: &RollSheet<'_>) -> Result<String, RenderError> {
        let grid = sheet.grid();
        let view = SheetView {
            user: sheet.user_name.to_string(),
            generated_at: sheet.generated_at.to_rfc3339(),
            remaining_rolls: sheet.remaining.rolls(),
            remaining_tuners: sheet.remaining.tuners(),
            grid: [grid.cols, grid.rows],
            cards: sheet
                .cards()
                .map(|card| CardView {
                    number: card.number,
                    title: card.title(),
                    stats: card
                        .record
                        .stats()
                        .iter()
                        .map(|stat| {
                            let style = sheet.style(stat);
                            StatView {
                                stat,
                                display: stat.display_value(),
                                highlight: style.highlight,
                                color: style.color.hex(),
                            }
                        })
                        .collect(),
                })
                .collect(),
        };
        Ok(serde_json::to_string_pretty(&view)?)
    }
}
