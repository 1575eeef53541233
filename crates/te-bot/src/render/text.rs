//! Plain-text and markdown rendering.

use te_core::RolledStat;

use super::icons::{Icon, IconSource, NoIcons, resolve};
use super::{Card, RenderError, Renderer, RollSheet};

/// Output flavour for [`TextRenderer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextFormat {
    /// Plain lines for terminals and chat.
    #[default]
    Plain,
    /// Markdown with one table per card.
    Markdown,
}

/// Renders a sheet as text, one card after another.
pub struct TextRenderer {
    format: TextFormat,
    icons: Box<dyn IconSource>,
}

impl TextRenderer {
    /// A renderer for `format` without icon assets.
    pub fn new(format: TextFormat) -> Self {
        Self {
            format,
            icons: Box::new(NoIcons),
        }
    }

    /// Use `icons` to resolve stat icons.
    pub fn with_icons(mut self, icons: impl IconSource + 'static) -> Self {
        self.icons = Box::new(icons);
        self
    }

    fn plain_card(&self, out: &mut String, sheet: &RollSheet<'_>, card: &Card<'_>) {
        out.push_str(&format!("{}\n", card.title()));
        for stat in card.record.stats() {
            let icon = match resolve(self.icons.as_ref(), &stat.icon) {
                Icon::File(_) => "◆",
                Icon::Placeholder => "○",
            };
            let tag = if sheet.style(stat).max_tag { "  ★ MAX" } else { "" };
            out.push_str(&format!(
                "  {icon} {}  {}{tag}\n",
                stat.name,
                stat.display_value()
            ));
        }
        out.push('\n');
    }

    fn markdown_card(&self, out: &mut String, sheet: &RollSheet<'_>, card: &Card<'_>) {
        out.push_str(&format!("### {}\n\n", card.title()));
        out.push_str("| | 词条 | 数值 |\n|---|---|---|\n");
        for stat in card.record.stats() {
            let icon = match resolve(self.icons.as_ref(), &stat.icon) {
                Icon::File(path) => format!("![{}]({})", stat.icon, path.display()),
                Icon::Placeholder => "○".to_string(),
            };
            out.push_str(&format!(
                "| {icon} | {} | {} |\n",
                markdown_name(sheet, stat),
                stat.display_value()
            ));
        }
        out.push('\n');
    }
}

fn markdown_name(sheet: &RollSheet<'_>, stat: &RolledStat) -> String {
    let style = sheet.style(stat);
    match (style.highlight, style.max_tag) {
        (_, true) => format!("**{}** ★ MAX", stat.name),
        (true, false) => format!("**{}**", stat.name),
        _ => stat.name.clone(),
    }
}

impl Renderer for TextRenderer {
    type Artifact = String;

    fn render(&self, sheet: &RollSheet<'_>) -> Result<String, RenderError> {
        let mut out = String::new();

        match self.format {
            TextFormat::Plain => {
                for card in sheet.cards() {
                    self.plain_card(&mut out, sheet, &card);
                }
                out.push_str(&format!("{}  {}\n", sheet.display_name(), sheet.timestamp()));
                out.push_str(&format!("{}\n", sheet.tuner_line()));
            }
            TextFormat::Markdown => {
                out.push_str("## 声骸梭哈\n\n");
                for card in sheet.cards() {
                    self.markdown_card(&mut out, sheet, &card);
                }
                out.push_str("---\n\n");
                out.push_str(&format!(
                    "**{}** · {} · {}\n",
                    sheet.display_name(),
                    sheet.timestamp(),
                    sheet.tuner_line()
                ));
            }
        }

        Ok(out)
    }
}
