use ratatui::style::{Color, Modifier, Style};

use crate::api::ReviewCategory;
use crate::core::verdict::VerdictTone;

#[derive(Debug, Clone)]
pub struct Theme {
    // Overall background color to paint the full frame
    pub background_color: Color,

    // Hero area
    pub title_style: Style,
    pub tagline_style: Style,
    pub tagline_cursor_style: Style,

    // Input area
    pub input_border_style: Style,
    pub input_title_style: Style,
    pub input_text_style: Style,
    pub busy_indicator_style: Style,

    // Results area
    pub panel_border_style: Style,
    pub panel_title_style: Style,
    pub score_gauge_style: Style,
    pub bar_fill_style: Style,
    pub bar_label_style: Style,
    pub detail_text_style: Style,
    pub sample_text_style: Style,
    pub hint_style: Style,
    pub error_style: Style,

    // Category accents for the breakdown cards
    pub genuine_accent: Color,
    pub suspicious_accent: Color,
    pub low_quality_accent: Color,

    // Verdict tones
    pub verdict_negative_style: Style,
    pub verdict_caution_style: Style,
    pub verdict_positive_style: Style,
}

impl Theme {
    pub fn dark_default() -> Self {
        Theme {
            background_color: Color::Black,

            title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            tagline_style: Style::default().fg(Color::Gray),
            tagline_cursor_style: Style::default().fg(Color::DarkGray),

            input_border_style: Style::default().fg(Color::Gray),
            input_title_style: Style::default().fg(Color::Gray),
            input_text_style: Style::default().fg(Color::White),
            busy_indicator_style: Style::default().fg(Color::Yellow),

            panel_border_style: Style::default().fg(Color::DarkGray),
            panel_title_style: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            score_gauge_style: Style::default().fg(Color::Red),
            bar_fill_style: Style::default().fg(Color::White),
            bar_label_style: Style::default().fg(Color::Gray),
            detail_text_style: Style::default().fg(Color::White),
            sample_text_style: Style::default().fg(Color::Gray),
            hint_style: Style::default().fg(Color::DarkGray),
            error_style: Style::default().fg(Color::Red),

            genuine_accent: Color::Rgb(0x0a, 0xb6, 0x8b),
            suspicious_accent: Color::Rgb(0xf6, 0x44, 0x68),
            low_quality_accent: Color::Rgb(0xff, 0xe3, 0xb3),

            verdict_negative_style: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            verdict_caution_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            verdict_positive_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn light() -> Self {
        Theme {
            background_color: Color::White,

            title_style: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            tagline_style: Style::default().fg(Color::DarkGray),
            tagline_cursor_style: Style::default().fg(Color::Gray),

            input_border_style: Style::default().fg(Color::Black),
            input_title_style: Style::default().fg(Color::DarkGray),
            input_text_style: Style::default().fg(Color::Black),
            busy_indicator_style: Style::default().fg(Color::Blue),

            panel_border_style: Style::default().fg(Color::Gray),
            panel_title_style: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            score_gauge_style: Style::default().fg(Color::Red),
            bar_fill_style: Style::default().fg(Color::Black),
            bar_label_style: Style::default().fg(Color::DarkGray),
            detail_text_style: Style::default().fg(Color::Black),
            sample_text_style: Style::default().fg(Color::DarkGray),
            hint_style: Style::default().fg(Color::Gray),
            error_style: Style::default().fg(Color::Red),

            genuine_accent: Color::Rgb(0x0a, 0xb6, 0x8b),
            suspicious_accent: Color::Rgb(0xf6, 0x44, 0x68),
            low_quality_accent: Color::Rgb(0xff, 0xe3, 0xb3),

            verdict_negative_style: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            verdict_caution_style: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            verdict_positive_style: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        }
    }

    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => Self::light(),
            // Fallback
            _ => Self::dark_default(),
        }
    }

    pub fn category_accent(&self, category: ReviewCategory) -> Color {
        match category {
            ReviewCategory::Genuine => self.genuine_accent,
            ReviewCategory::Suspicious => self.suspicious_accent,
            ReviewCategory::LowQuality => self.low_quality_accent,
        }
    }

    /// Style for the currently selected breakdown card: the category accent
    /// as background with a readable foreground (the low-quality accent is
    /// pale, so it takes dark text).
    pub fn active_card_style(&self, category: ReviewCategory) -> Style {
        let fg = match category {
            ReviewCategory::LowQuality => Color::Black,
            _ => Color::White,
        };
        Style::default()
            .bg(self.category_accent(category))
            .fg(fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn verdict_style(&self, tone: VerdictTone) -> Style {
        match tone {
            VerdictTone::Negative => self.verdict_negative_style,
            VerdictTone::Caution => self.verdict_caution_style,
            VerdictTone::Positive => self.verdict_positive_style,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_falls_back_to_dark() {
        let theme = Theme::from_name("no-such-theme");
        assert_eq!(theme.background_color, Color::Black);
        let light = Theme::from_name("LIGHT");
        assert_eq!(light.background_color, Color::White);
    }

    #[test]
    fn test_pale_accent_takes_dark_text() {
        let theme = Theme::dark_default();
        let style = theme.active_card_style(ReviewCategory::LowQuality);
        assert_eq!(style.fg, Some(Color::Black));
        let style = theme.active_card_style(ReviewCategory::Genuine);
        assert_eq!(style.fg, Some(Color::White));
    }
}
