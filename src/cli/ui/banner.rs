use crate::cli::output::OutputPreferences;

use super::panel::{BorderStyle, Panel};

pub struct Banner;

impl Banner {
    pub fn text(prefs: &OutputPreferences) -> String {
        Panel::new("AZEx - A to Z Experiment")
            .line("Money spending manager & scientific calculator")
            .render(BorderStyle::for_mode(BorderStyle::Double, prefs.plain_mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_names_the_program() {
        let text = Banner::text(&OutputPreferences::default());
        assert!(text.starts_with('╔'));
        assert!(text.contains("AZEx - A to Z Experiment"));
    }
}
