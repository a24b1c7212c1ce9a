/// Border glyph sets for boxed panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorderStyle {
    Single,
    Double,
    Ascii,
}

struct Glyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
    tee_left: char,
    tee_right: char,
}

impl BorderStyle {
    /// Plain mode always falls back to ASCII.
    pub fn for_mode(preferred: BorderStyle, plain_mode: bool) -> Self {
        if plain_mode {
            BorderStyle::Ascii
        } else {
            preferred
        }
    }

    fn glyphs(self) -> Glyphs {
        match self {
            BorderStyle::Single => Glyphs {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
                tee_left: '├',
                tee_right: '┤',
            },
            BorderStyle::Double => Glyphs {
                top_left: '╔',
                top_right: '╗',
                bottom_left: '╚',
                bottom_right: '╝',
                horizontal: '═',
                vertical: '║',
                tee_left: '╠',
                tee_right: '╣',
            },
            BorderStyle::Ascii => Glyphs {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
                tee_left: '+',
                tee_right: '+',
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Row {
    Text(String),
    Divider,
}

const MIN_CONTENT_WIDTH: usize = 36;

/// A titled box of text rows, sized to its widest row but never narrower
/// than `MIN_CONTENT_WIDTH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    title: String,
    rows: Vec<Row>,
}

impl Panel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    pub fn line(mut self, text: impl Into<String>) -> Self {
        self.rows.push(Row::Text(text.into()));
        self
    }

    pub fn push_line(&mut self, text: impl Into<String>) {
        self.rows.push(Row::Text(text.into()));
    }

    pub fn push_divider(&mut self) {
        self.rows.push(Row::Divider);
    }

    pub fn render(&self, style: BorderStyle) -> String {
        let glyphs = style.glyphs();
        let content_width = self
            .rows
            .iter()
            .filter_map(|row| match row {
                Row::Text(text) => Some(text.chars().count()),
                Row::Divider => None,
            })
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0)
            .max(MIN_CONTENT_WIDTH);
        // One space of padding on each side of the content.
        let inner = content_width + 2;
        let rule: String = std::iter::repeat(glyphs.horizontal).take(inner).collect();
        let text_row = |text: &str| {
            let pad = content_width - text.chars().count();
            format!(
                "{v} {text}{:pad$} {v}",
                "",
                v = glyphs.vertical,
                pad = pad
            )
        };

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(format!("{}{rule}{}", glyphs.top_left, glyphs.top_right));
        lines.push(text_row(&self.title));
        if !self.rows.is_empty() {
            lines.push(format!("{}{rule}{}", glyphs.tee_left, glyphs.tee_right));
        }
        for row in &self.rows {
            match row {
                Row::Text(text) => lines.push(text_row(text)),
                Row::Divider => {
                    lines.push(format!("{}{rule}{}", glyphs.tee_left, glyphs.tee_right))
                }
            }
        }
        lines.push(format!("{}{rule}{}", glyphs.bottom_left, glyphs.bottom_right));
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(text: &str) -> String {
        format!("| {text:<width$} |", width = MIN_CONTENT_WIDTH)
    }

    #[test]
    fn renders_ascii_box_at_minimum_width() {
        let rendered = Panel::new("MAIN MENU")
            .line("1. Ledger")
            .line("2. Calculator")
            .render(BorderStyle::Ascii);
        let rule = format!("+{}+", "-".repeat(MIN_CONTENT_WIDTH + 2));
        let expected = [
            rule.clone(),
            padded("MAIN MENU"),
            rule.clone(),
            padded("1. Ledger"),
            padded("2. Calculator"),
            rule,
        ]
        .join("\n");
        assert_eq!(rendered, expected);
    }

    #[test]
    fn title_only_panel_has_no_separator() {
        let rendered = Panel::new("HISTORY").render(BorderStyle::Double);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with('╔') && lines[2].starts_with('╚'));
        assert!(lines[1].starts_with("║ HISTORY "));
    }

    #[test]
    fn wide_rows_grow_the_box() {
        let row = "x".repeat(MIN_CONTENT_WIDTH + 4);
        let rendered = Panel::new("WIDE").line(row.clone()).render(BorderStyle::Ascii);
        assert!(rendered.contains(&format!("| {row} |")));
    }

    #[test]
    fn every_line_has_the_same_width() {
        let mut panel = Panel::new("CALC").line("6. Square root   (√)");
        panel.push_divider();
        panel.push_line("9. Sine          (sin)");
        let rendered = panel.render(BorderStyle::Single);
        let widths: Vec<usize> = rendered.lines().map(|line| line.chars().count()).collect();
        assert!(widths.windows(2).all(|pair| pair[0] == pair[1]), "{widths:?}");
    }

    #[test]
    fn plain_mode_forces_ascii() {
        assert_eq!(
            BorderStyle::for_mode(BorderStyle::Double, true),
            BorderStyle::Ascii
        );
        assert_eq!(
            BorderStyle::for_mode(BorderStyle::Double, false),
            BorderStyle::Double
        );
    }
}
