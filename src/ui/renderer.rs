use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::api::{AnalysisReport, ReviewCategory};
use crate::core::app::{App, RequestPhase};
use crate::core::constants::INDICATOR_SPACE;
use crate::core::verdict::Verdict;

/// Render one frame as a pure function of the view state.
pub fn ui(f: &mut Frame, app: &App) {
    let background = Block::default().style(Style::default().bg(app.theme.background_color));
    f.render_widget(background, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title + tagline
            Constraint::Length(3), // input box
            Constraint::Min(0),    // results
        ])
        .split(f.area());

    render_hero(f, app, chunks[0]);
    render_input(f, app, chunks[1]);
    render_results(f, app, chunks[2]);
}

fn render_hero(f: &mut Frame, app: &App, area: Rect) {
    let title = Paragraph::new("Review Authenticity Checker")
        .style(app.theme.title_style)
        .alignment(Alignment::Center);
    f.render_widget(title, Rect { height: 1, ..area });

    if area.height < 2 {
        return;
    }
    let mut spans = vec![Span::styled(
        app.tagline.visible().to_string(),
        app.theme.tagline_style,
    )];
    if !app.tagline.is_complete() {
        spans.push(Span::styled("▌", app.theme.tagline_cursor_style));
    }
    let tagline = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(
        tagline,
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let input_title = match app.phase {
        RequestPhase::InFlight => "Analyzing reviews... (Esc to cancel)",
        _ => "Paste a product link (Enter to analyze, Tab to switch category, Ctrl+C to quit)",
    };

    // Single-line field: keep the cursor inside a sliding window of the text.
    let inner_width = area.width.saturating_sub(2 + INDICATOR_SPACE) as usize;
    let chars: Vec<char> = app.input.chars().collect();
    let cursor = app.input_cursor_position.min(chars.len());
    let window_start = cursor.saturating_sub(inner_width.saturating_sub(1).max(1));
    let visible: String = chars
        .iter()
        .skip(window_start)
        .take(inner_width.max(1))
        .collect();

    let input = Paragraph::new(visible)
        .style(app.theme.input_text_style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.input_border_style)
                .title(Span::styled(input_title, app.theme.input_title_style)),
        );
    f.render_widget(input, area);

    if app.is_busy() {
        // Pulse indicator at the right edge of the input box.
        let elapsed = app.pulse_start.elapsed().as_millis() as f32 / 1000.0;
        let pulse_phase = (elapsed * 2.0) % 2.0;
        let pulse_intensity = if pulse_phase < 1.0 {
            pulse_phase
        } else {
            2.0 - pulse_phase
        };
        let symbol = if pulse_intensity < 0.33 {
            "○"
        } else if pulse_intensity < 0.66 {
            "◐"
        } else {
            "●"
        };

        if area.width > 4 && area.height > 2 {
            let indicator = Paragraph::new(symbol).style(app.theme.busy_indicator_style);
            f.render_widget(
                indicator,
                Rect {
                    x: area.x + area.width - 3,
                    y: area.y + 1,
                    width: 1,
                    height: 1,
                },
            );
        }
    } else {
        // Cursor x accounts for display width, not char count.
        let prefix: String = chars
            .iter()
            .skip(window_start)
            .take(cursor - window_start)
            .collect();
        f.set_cursor_position((area.x + 1 + prefix.width() as u16, area.y + 1));
    }
}

fn render_results(f: &mut Frame, app: &App, area: Rect) {
    let mut body = area;

    if let RequestPhase::Failed { reason } = &app.phase {
        if body.height == 0 {
            return;
        }
        let banner = Paragraph::new(format!("✖ {reason}")).style(app.theme.error_style);
        f.render_widget(banner, Rect { height: 1, ..body });
        body = Rect {
            y: body.y + 1,
            height: body.height - 1,
            ..body
        };
    }

    let Some(report) = &app.report else {
        render_empty_state(f, app, body);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // score gauge
            Constraint::Length(7), // rating distribution
            Constraint::Length(5), // breakdown cards
            Constraint::Min(3),    // detail panel
            Constraint::Length(1), // verdict
        ])
        .split(body);

    render_score(f, app, report, rows[0]);
    render_distribution(f, app, report, rows[1]);
    render_cards(f, app, report, rows[2]);
    render_details(f, app, report, rows[3]);
    render_verdict(f, app, report, rows[4]);
}

fn render_empty_state(f: &mut Frame, app: &App, area: Rect) {
    if area.height < 2 {
        return;
    }
    let hint = if app.is_busy() {
        "Analyzing reviews..."
    } else {
        "Paste a product link above to check how genuine its reviews look."
    };
    let paragraph = Paragraph::new(hint)
        .style(app.theme.hint_style)
        .alignment(Alignment::Center);
    f.render_widget(
        paragraph,
        Rect {
            y: area.y + area.height / 2,
            height: 1,
            ..area
        },
    );
}

fn render_score(f: &mut Frame, app: &App, report: &AnalysisReport, area: Rect) {
    let score = report.authenticity_score;
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(app.theme.panel_border_style)
                .title(Span::styled(
                    " Authenticity Score ",
                    app.theme.panel_title_style,
                )),
        )
        .gauge_style(app.theme.score_gauge_style)
        .ratio(score.clamp(0.0, 100.0) / 100.0)
        .label(format_pct(score));
    f.render_widget(gauge, area);
}

fn render_distribution(f: &mut Frame, app: &App, report: &AnalysisReport, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border_style)
        .title(Span::styled(
            " Authentic Rating Distribution ",
            app.theme.panel_title_style,
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let bar_width = inner.width.saturating_sub(10) as usize;
    let mut lines = Vec::new();
    for star in (1..=5).rev() {
        let share = report.star_share(star);
        lines.push(Line::from(vec![
            Span::styled(format!("{star}★ "), app.theme.bar_label_style),
            Span::styled(percent_bar(share, bar_width), app.theme.bar_fill_style),
            Span::styled(format!(" {:>4}", format_pct(share)), app.theme.bar_label_style),
        ]));
    }
    f.render_widget(Paragraph::new(lines), inner);
}

fn render_cards(f: &mut Frame, app: &App, report: &AnalysisReport, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for (category, column) in ReviewCategory::ALL.into_iter().zip(columns.iter()) {
        let active = category == app.active_category;
        let (card_style, border_style) = if active {
            let style = app.theme.active_card_style(category);
            (style, style)
        } else {
            (Style::default(), app.theme.panel_border_style)
        };

        let share = report.breakdown.share(category);
        let card = Paragraph::new(vec![
            Line::from(Span::styled(
                format_pct(share),
                app.theme.panel_title_style.patch(card_style),
            )),
            Line::from(Span::raw("of reviews")),
        ])
        .style(card_style)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(format!(" {} ", category.label())),
        );
        f.render_widget(card, *column);
    }
}

fn render_details(f: &mut Frame, app: &App, report: &AnalysisReport, area: Rect) {
    let category = app.active_category;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.theme.panel_border_style)
        .title(Span::styled(
            format!(" {} ", category.heading()),
            app.theme.panel_title_style,
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut lines = Vec::new();
    for reason in report.reasons_for(category) {
        lines.push(Line::from(Span::styled(
            format!("• {reason}"),
            app.theme.detail_text_style,
        )));
    }
    let samples = report.samples_for(category);
    if !samples.is_empty() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(
            "Example reviews",
            app.theme.panel_title_style,
        )));
        for sample in samples {
            lines.push(Line::from(Span::styled(
                format!("❝ {sample}"),
                app.theme.sample_text_style,
            )));
        }
    }
    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "Nothing reported for this category.",
            app.theme.hint_style,
        )));
    }

    let max_scroll = (lines.len() as u16).saturating_sub(inner.height);
    let scroll = app.detail_scroll.min(max_scroll);
    let details = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .scroll((scroll, 0));
    f.render_widget(details, inner);
}

fn render_verdict(f: &mut Frame, app: &App, report: &AnalysisReport, area: Rect) {
    let verdict = Verdict::from_score(report.authenticity_score);
    let text = match &app.verdict_reveal {
        Some(reveal) => reveal.visible().to_string(),
        None => verdict.banner(),
    };
    let paragraph = Paragraph::new(text)
        .style(app.theme.verdict_style(verdict.tone()))
        .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

/// Fixed-width textual bar, filled proportionally to `pct` (clamped to 0–100).
fn percent_bar(pct: f64, width: usize) -> String {
    let ratio = pct.clamp(0.0, 100.0) / 100.0;
    let filled = (ratio * width as f64).round() as usize;
    let mut bar = String::with_capacity(width * 3);
    bar.extend(std::iter::repeat('█').take(filled));
    bar.extend(std::iter::repeat('░').take(width - filled));
    bar
}

fn format_pct(pct: f64) -> String {
    format!("{:.0}%", pct)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_bar_scales_and_clamps() {
        assert_eq!(percent_bar(0.0, 10), "░░░░░░░░░░");
        assert_eq!(percent_bar(50.0, 10), "█████░░░░░");
        assert_eq!(percent_bar(100.0, 10), "██████████");
        assert_eq!(percent_bar(250.0, 4), "████");
        assert_eq!(percent_bar(-5.0, 4), "░░░░");
    }

    #[test]
    fn test_missing_star_renders_zero_bar_and_label() {
        let report: AnalysisReport =
            serde_json::from_str(r#"{"ratingDistribution": {"5": 50}}"#).unwrap();
        let share = report.star_share(3);
        assert_eq!(percent_bar(share, 8), "░░░░░░░░");
        assert_eq!(format_pct(share), "0%");
    }

    #[test]
    fn test_format_pct_rounds_to_whole_percent() {
        assert_eq!(format_pct(72.4), "72%");
        assert_eq!(format_pct(72.5), "72%");
        assert_eq!(format_pct(0.0), "0%");
    }
}
