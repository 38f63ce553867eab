use std::io::IsTerminal;

use colored::{Color, Colorize};

use crate::menu::{SurfaceContent, VisualSection};

const MIN_WIDTH: usize = 40;

/// Text rendition of mounted content for the CLI.
#[derive(Debug, Clone)]
pub struct TerminalView {
    pub width: usize,
    pub use_color: bool,
    pub use_icons: bool,
    pub leader: char,
}

impl TerminalView {
    /// Colors only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Self {
        let use_color = std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        Self {
            width: 56,
            use_color,
            use_icons: true,
            leader: '.',
        }
    }

    /// No ANSI codes and no icons; stable output for scripts and tests.
    pub fn plain() -> Self {
        Self {
            width: 56,
            use_color: false,
            use_icons: false,
            leader: '.',
        }
    }

    pub fn render(&self, content: &SurfaceContent) -> String {
        match content {
            SurfaceContent::Empty => String::new(),
            SurfaceContent::Error(notice) => self.paint(&notice.to_string(), Color::Red, true),
            SurfaceContent::Menu(view) => {
                if view.sections.is_empty() {
                    return "(menu has no categories)".to_string();
                }
                view.sections
                    .iter()
                    .map(|section| self.render_section(section))
                    .collect::<Vec<_>>()
                    .join("\n\n")
            }
        }
    }

    pub fn render_section(&self, section: &VisualSection) -> String {
        let title = match (&section.icon, self.use_icons) {
            (Some(icon), true) => format!("{icon} {}", section.category),
            _ => section.category.clone(),
        };
        let header = format!(
            "{} {}  [{}]",
            section.toggle.affordance, title, section.toggle.label
        );
        let mut lines = vec![self.paint(&header, Color::BrightBlue, true)];
        if section.body_visible() {
            if section.rows.is_empty() {
                lines.push("  (no items)".to_string());
            }
            for row in &section.rows {
                lines.push(self.row_line(&row.name, &row.price));
            }
        }
        lines.join("\n")
    }

    fn row_line(&self, name: &str, price: &str) -> String {
        let width = self.width.max(MIN_WIDTH);
        let used = 2 + name.chars().count() + price.chars().count() + 2;
        let fill = width.saturating_sub(used).max(1);
        let leader: String = std::iter::repeat(self.leader).take(fill).collect();
        let price = if self.use_color {
            price.bold().to_string()
        } else {
            price.to_string()
        };
        format!("  {name} {leader} {price}")
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.use_color {
            return text.to_string();
        }
        let colored = text.color(color);
        if bold {
            colored.bold().to_string()
        } else {
            colored.to_string()
        }
    }
}

impl Default for TerminalView {
    fn default() -> Self {
        Self::detect()
    }
}
