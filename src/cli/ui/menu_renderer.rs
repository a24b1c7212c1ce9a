use crate::cli::output::OutputPreferences;

use super::panel::{BorderStyle, Panel};

#[derive(Clone, Debug)]
pub struct MenuUIItem<K> {
    pub key: K,
    pub label: String,
    pub hint: Option<String>,
}

impl<K> MenuUIItem<K> {
    pub fn new(key: K, label: impl Into<String>) -> Self {
        Self {
            key,
            label: label.into(),
            hint: None,
        }
    }

    /// Short trailing annotation such as an operator symbol.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

#[derive(Clone, Debug)]
enum MenuEntry<K> {
    Section(String),
    Item(MenuUIItem<K>),
}

/// A numbered menu. Items are numbered from 1 in insertion order; section
/// headings are rendered but never numbered.
#[derive(Clone, Debug)]
pub struct MenuUI<K> {
    pub title: String,
    pub context: Vec<String>,
    entries: Vec<MenuEntry<K>>,
}

impl<K: Copy> MenuUI<K> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            context: Vec::new(),
            entries: Vec::new(),
        }
    }

    /// Status line shown between the title and the options.
    pub fn with_context(mut self, line: impl Into<String>) -> Self {
        self.context.push(line.into());
        self
    }

    pub fn section(mut self, heading: impl Into<String>) -> Self {
        self.entries.push(MenuEntry::Section(heading.into()));
        self
    }

    pub fn item(mut self, item: MenuUIItem<K>) -> Self {
        self.entries.push(MenuEntry::Item(item));
        self
    }

    pub fn len(&self) -> usize {
        self.items().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn items(&self) -> impl Iterator<Item = &MenuUIItem<K>> {
        self.entries.iter().filter_map(|entry| match entry {
            MenuEntry::Item(item) => Some(item),
            MenuEntry::Section(_) => None,
        })
    }

    /// Resolves a 1-based menu number to its key.
    pub fn select(&self, number: usize) -> Option<K> {
        number
            .checked_sub(1)
            .and_then(|index| self.items().nth(index))
            .map(|item| item.key)
    }

    pub fn render(&self, prefs: &OutputPreferences) -> String {
        let number_width = self.len().to_string().len();
        let label_width = self
            .items()
            .map(|item| item.label.chars().count())
            .max()
            .unwrap_or(0);

        let mut panel = Panel::new(self.title.to_uppercase());
        for line in &self.context {
            panel.push_line(line.clone());
        }
        if !self.context.is_empty() {
            panel.push_divider();
        }

        let mut number = 0;
        let mut first = true;
        for entry in &self.entries {
            match entry {
                MenuEntry::Section(heading) => {
                    if !first {
                        panel.push_line("");
                    }
                    panel.push_line(heading.to_uppercase());
                }
                MenuEntry::Item(item) => {
                    number += 1;
                    let row = match &item.hint {
                        Some(hint) => format!(
                            "{:>nw$}. {:<lw$}  ({hint})",
                            number,
                            item.label,
                            nw = number_width,
                            lw = label_width
                        ),
                        None => format!("{:>nw$}. {}", number, item.label, nw = number_width),
                    };
                    panel.push_line(row);
                }
            }
            first = false;
        }

        panel.render(BorderStyle::for_mode(BorderStyle::Single, prefs.plain_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Key {
        One,
        Two,
        Three,
    }

    fn plain() -> OutputPreferences {
        OutputPreferences {
            plain_mode: true,
            ..OutputPreferences::default()
        }
    }

    fn sample() -> MenuUI<Key> {
        MenuUI::new("Demo")
            .section("Basic")
            .item(MenuUIItem::new(Key::One, "Addition").with_hint("+"))
            .item(MenuUIItem::new(Key::Two, "Division").with_hint("÷"))
            .section("Other")
            .item(MenuUIItem::new(Key::Three, "Back"))
    }

    #[test]
    fn select_skips_sections() {
        let menu = sample();
        assert_eq!(menu.len(), 3);
        assert_eq!(menu.select(1), Some(Key::One));
        assert_eq!(menu.select(3), Some(Key::Three));
        assert_eq!(menu.select(0), None);
        assert_eq!(menu.select(4), None);
    }

    #[test]
    fn render_numbers_items_and_shows_hints() {
        let rendered = sample().with_context("Balance: $1.00").render(&plain());
        let lines: Vec<&str> = rendered.lines().collect();
        assert!(lines[0].starts_with("+-"));
        assert!(lines[1].starts_with("| DEMO"));
        assert!(lines[2].starts_with("+-"));
        assert!(lines[3].starts_with("| Balance: $1.00"));
        assert!(rendered.contains("| BASIC"));
        assert!(rendered.contains("1. Addition  (+)"));
        assert!(rendered.contains("2. Division  (÷)"));
        assert!(rendered.contains("3. Back "));
        assert!(rendered.contains("| OTHER"));
    }

    #[test]
    fn wide_menus_right_align_numbers() {
        let mut menu = MenuUI::new("Wide");
        for _ in 0..10 {
            menu = menu.item(MenuUIItem::new(Key::One, "x"));
        }
        let rendered = menu.render(&plain());
        assert!(rendered.contains("|  1. x"));
        assert!(rendered.contains("| 10. x"));
    }
}
