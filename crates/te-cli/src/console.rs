//! Terminal rendering and renderer selection.

use clap::ValueEnum;
use colored::Colorize;

use te_bot::render::icons::resolve;
use te_bot::render::{
    DirIconSource, Icon, IconSource, JsonRenderer, NoIcons, RenderError, Renderer, RollSheet,
    TextFormat, TextRenderer,
};

/// Output formats selectable with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored cards for a terminal
    Console,
    /// Uncolored text
    Plain,
    /// Markdown tables
    Markdown,
    /// JSON document
    Json,
}

/// Colored card view using the configured stat colors.
pub struct ConsoleRenderer {
    icons: Box<dyn IconSource>,
}

impl Renderer for ConsoleRenderer {
    type Artifact = String;

    fn render(&self, sheet: &RollSheet<'_>) -> Result<String, RenderError> {
        let mut out = String::new();
        let grid = sheet.grid();

        for (i, card) in sheet.cards().enumerate() {
            let (row, col) = grid.position(i);
            out.push_str(&format!(
                "{}  {}\n",
                card.title().bold(),
                format!("[{},{}]", row + 1, col + 1).dimmed()
            ));
            for stat in card.record.stats() {
                let style = sheet.style(stat);
                let [r, g, b] = style.color.0;
                let icon = match resolve(self.icons.as_ref(), &stat.icon) {
                    Icon::File(_) => "◆",
                    Icon::Placeholder => "○",
                };
                let line = format!("{} {}", stat.name, stat.display_value()).truecolor(r, g, b);
                let tag = if style.max_tag {
                    format!("  {}", "★ MAX".red().bold())
                } else {
                    String::new()
                };
                out.push_str(&format!("  {icon} {line}{tag}\n"));
            }
            out.push('\n');
        }

        out.push_str(&format!(
            "{}  {}\n{}\n",
            sheet.display_name().bold(),
            sheet.timestamp().dimmed(),
            sheet.tuner_line()
        ));
        Ok(out)
    }
}

/// The renderer behind `--format`.
pub enum AnyRenderer {
    /// Colored terminal output.
    Console(ConsoleRenderer),
    /// Plain or markdown text.
    Text(TextRenderer),
    /// JSON.
    Json(JsonRenderer),
}

impl AnyRenderer {
    /// Build the renderer for `format`, resolving icons from `icons` when given.
    pub fn new(format: OutputFormat, icons: Option<DirIconSource>) -> Self {
        match (format, icons) {
            (OutputFormat::Console, Some(icons)) => Self::Console(ConsoleRenderer {
                icons: Box::new(icons),
            }),
            (OutputFormat::Console, None) => Self::Console(ConsoleRenderer {
                icons: Box::new(NoIcons),
            }),
            (OutputFormat::Plain, icons) => Self::Text(text(TextFormat::Plain, icons)),
            (OutputFormat::Markdown, icons) => Self::Text(text(TextFormat::Markdown, icons)),
            (OutputFormat::Json, _) => Self::Json(JsonRenderer),
        }
    }
}

fn text(format: TextFormat, icons: Option<DirIconSource>) -> TextRenderer {
    let renderer = TextRenderer::new(format);
    match icons {
        Some(icons) => renderer.with_icons(icons),
        None => renderer,
    }
}

impl Renderer for AnyRenderer {
    type Artifact = String;

    fn render(&self, sheet: &RollSheet<'_>) -> Result<String, RenderError> {
        match self {
            Self::Console(r) => r.render(sheet),
            Self::Text(r) => r.render(sheet),
            Self::Json(r) => r.render(sheet),
        }
    }
}
