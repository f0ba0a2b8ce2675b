use std::time::Instant;

use reqwest::Client;
use tokio_util::sync::CancellationToken;

use crate::api::{AnalysisReport, ReviewCategory};
use crate::core::constants::{
    REQUEST_TIMEOUT, RESULTS_SETTLE_DELAY, TAGLINE, TAGLINE_CHAR_INTERVAL,
};
use crate::core::typewriter::Typewriter;
use crate::core::verdict::Verdict;
use crate::ui::theme::Theme;
use crate::utils::url::prepare_submission;

/// Where the current (or last) analysis request stands.
///
/// A successful report lives in [`App::report`] rather than in a variant here,
/// so a failed re-analysis leaves the previous result on screen.
#[derive(Debug)]
pub enum RequestPhase {
    Idle,
    InFlight,
    Failed { reason: String },
}

/// Settlement of a spawned analysis request, delivered over the event
/// channel together with the id of the request that produced it.
#[derive(Debug)]
pub enum RequestOutcome {
    Report(AnalysisReport),
    Failed(String),
}

/// Everything the event loop needs to spawn one analysis request.
pub struct PendingRequest {
    pub product_url: String,
    pub cancel_token: CancellationToken,
    pub request_id: u64,
}

pub struct AppOptions {
    pub endpoint: String,
    pub theme: Theme,
    pub initial_url: Option<String>,
}

pub struct App {
    pub input: String,
    pub input_cursor_position: usize,
    pub report: Option<AnalysisReport>,
    pub active_category: ReviewCategory,
    pub phase: RequestPhase,
    pub client: Client,
    pub endpoint: String,
    pub theme: Theme,
    pub tagline: Typewriter,
    pub verdict_reveal: Option<Typewriter>,
    pub detail_scroll: u16,
    pub pulse_start: Instant,
    request_cancel_token: Option<CancellationToken>,
    current_request_id: u64,
    results_jump_at: Option<Instant>,
}

impl App {
    pub fn new(options: AppOptions) -> Result<Self, Box<dyn std::error::Error>> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        let input = options.initial_url.unwrap_or_default();
        let input_cursor_position = input.chars().count();

        Ok(App {
            input,
            input_cursor_position,
            report: None,
            active_category: ReviewCategory::Genuine,
            phase: RequestPhase::Idle,
            client,
            endpoint: options.endpoint,
            theme: options.theme,
            tagline: Typewriter::new(TAGLINE, TAGLINE_CHAR_INTERVAL),
            verdict_reveal: None,
            detail_scroll: 0,
            pulse_start: Instant::now(),
            request_cancel_token: None,
            current_request_id: 0,
            results_jump_at: None,
        })
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.phase, RequestPhase::InFlight)
    }

    /// Validate the input and enter the in-flight phase.
    ///
    /// Returns `None` without touching any state when the trimmed input is
    /// empty (validation no-op) or a request is already in flight (concurrent
    /// submissions are ignored, as a hard guard rather than an advisory
    /// control). Otherwise mints a fresh request id and cancellation token
    /// for the event loop to spawn with.
    pub fn begin_submission(&mut self) -> Option<PendingRequest> {
        if self.is_busy() {
            return None;
        }
        let product_url = prepare_submission(&self.input)?;

        self.current_request_id += 1;
        let token = CancellationToken::new();
        self.request_cancel_token = Some(token.clone());
        self.phase = RequestPhase::InFlight;
        self.pulse_start = Instant::now();

        Some(PendingRequest {
            product_url,
            cancel_token: token,
            request_id: self.current_request_id,
        })
    }

    /// Apply a settlement delivered by the event loop. Settlements carrying a
    /// stale request id (cancelled or superseded requests) are discarded, so
    /// a completion handler can never mutate state owned by a later request.
    pub fn handle_request_event(&mut self, request_id: u64, outcome: RequestOutcome, now: Instant) {
        if request_id != self.current_request_id {
            return;
        }
        self.request_cancel_token = None;

        match outcome {
            RequestOutcome::Report(report) => {
                // Replaced wholesale; the active category deliberately persists.
                let banner = Verdict::from_score(report.authenticity_score).banner();
                self.report = Some(report);
                self.phase = RequestPhase::Idle;
                self.verdict_reveal = Some(Typewriter::with_default_rate(banner));
                self.results_jump_at = Some(now + RESULTS_SETTLE_DELAY);
            }
            RequestOutcome::Failed(reason) => {
                self.phase = RequestPhase::Failed { reason };
            }
        }
    }

    /// Cancel the in-flight request, if any, and return to idle. Bumping the
    /// request id makes any settlement the task already sent stale.
    pub fn cancel_current_request(&mut self) {
        if let Some(token) = self.request_cancel_token.take() {
            token.cancel();
        }
        if self.is_busy() {
            self.current_request_id += 1;
            self.phase = RequestPhase::Idle;
        }
    }

    pub fn current_request_id(&self) -> u64 {
        self.current_request_id
    }

    /// Pure state transition: no request, no report mutation.
    pub fn select_category(&mut self, category: ReviewCategory) {
        self.active_category = category;
        self.detail_scroll = 0;
    }

    pub fn cycle_category(&mut self, forward: bool) {
        let next = if forward {
            self.active_category.next()
        } else {
            self.active_category.prev()
        };
        self.select_category(next);
    }

    pub fn scroll_details(&mut self, delta: i16) {
        if delta.is_negative() {
            self.detail_scroll = self.detail_scroll.saturating_sub(delta.unsigned_abs());
        } else {
            self.detail_scroll = self.detail_scroll.saturating_add(delta as u16);
        }
    }

    /// Advance the animators and any scheduled state to `now`. Called once
    /// per event-loop iteration, before drawing.
    pub fn tick(&mut self, now: Instant) {
        self.tagline.poll(now);
        if let Some(reveal) = self.verdict_reveal.as_mut() {
            reveal.poll(now);
        }
        if self.results_jump_at.is_some_and(|at| now >= at) {
            self.results_jump_at = None;
            self.detail_scroll = 0;
        }
    }

    // Input editing. The URL field is a single line; cursor positions are in
    // chars, not bytes.

    pub fn insert_char_at_cursor(&mut self, c: char) {
        let byte_index = self
            .input
            .char_indices()
            .nth(self.input_cursor_position)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len());
        self.input.insert(byte_index, c);
        self.input_cursor_position += 1;
    }

    pub fn insert_str_at_cursor(&mut self, s: &str) {
        let byte_index = self
            .input
            .char_indices()
            .nth(self.input_cursor_position)
            .map(|(idx, _)| idx)
            .unwrap_or(self.input.len());
        self.input.insert_str(byte_index, s);
        self.input_cursor_position += s.chars().count();
    }

    pub fn delete_char_before_cursor(&mut self) -> bool {
        if self.input_cursor_position == 0 {
            return false;
        }
        let char_indices: Vec<_> = self.input.char_indices().collect();
        let remove_index = self.input_cursor_position - 1;
        let byte_start = char_indices[remove_index].0;
        let byte_end = char_indices
            .get(remove_index + 1)
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len());
        self.input.drain(byte_start..byte_end);
        self.input_cursor_position -= 1;
        true
    }

    pub fn move_cursor_left(&mut self) {
        self.input_cursor_position = self.input_cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let max_position = self.input.chars().count();
        if self.input_cursor_position < max_position {
            self.input_cursor_position += 1;
        }
    }

    pub fn move_cursor_to_beginning(&mut self) {
        self.input_cursor_position = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.input_cursor_position = self.input.chars().count();
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
        self.input_cursor_position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::{create_test_app, sample_report};
    use std::time::Duration;

    #[test]
    fn test_empty_input_is_a_validation_noop() {
        let mut app = create_test_app();
        assert!(app.begin_submission().is_none());
        assert!(matches!(app.phase, RequestPhase::Idle));

        app.input = "   ".to_string();
        assert!(app.begin_submission().is_none());
        assert!(matches!(app.phase, RequestPhase::Idle));
        assert_eq!(app.current_request_id(), 0);
    }

    #[test]
    fn test_busy_from_submission_until_settlement() {
        let mut app = create_test_app();
        app.input = "https://shop.example/item/42".to_string();

        let pending = app.begin_submission().expect("submission should start");
        assert!(app.is_busy());

        app.handle_request_event(
            pending.request_id,
            RequestOutcome::Report(sample_report()),
            Instant::now(),
        );
        assert!(!app.is_busy());
        assert!(app.report.is_some());
    }

    #[test]
    fn test_busy_clears_on_failure_and_report_survives() {
        let mut app = create_test_app();
        app.input = "https://shop.example/item/42".to_string();
        let pending = app.begin_submission().unwrap();
        app.handle_request_event(
            pending.request_id,
            RequestOutcome::Report(sample_report()),
            Instant::now(),
        );

        let pending = app.begin_submission().unwrap();
        assert!(app.is_busy());
        app.handle_request_event(
            pending.request_id,
            RequestOutcome::Failed("connection refused".to_string()),
            Instant::now(),
        );
        assert!(!app.is_busy());
        assert!(matches!(app.phase, RequestPhase::Failed { .. }));
        // The previous report stays on screen after a failed re-analysis.
        assert_eq!(app.report, Some(sample_report()));
    }

    #[test]
    fn test_second_submission_while_in_flight_is_ignored() {
        let mut app = create_test_app();
        app.input = "https://shop.example/item/42".to_string();
        let first = app.begin_submission().unwrap();
        assert!(app.begin_submission().is_none());
        assert_eq!(app.current_request_id(), first.request_id);
    }

    #[test]
    fn test_stale_settlements_are_discarded() {
        let mut app = create_test_app();
        app.input = "https://shop.example/item/42".to_string();
        let pending = app.begin_submission().unwrap();
        app.cancel_current_request();
        assert!(!app.is_busy());

        app.handle_request_event(
            pending.request_id,
            RequestOutcome::Report(sample_report()),
            Instant::now(),
        );
        assert!(app.report.is_none());
    }

    #[test]
    fn test_select_category_leaves_report_untouched() {
        let mut app = create_test_app();
        app.input = "https://shop.example/item/42".to_string();
        let pending = app.begin_submission().unwrap();
        app.handle_request_event(
            pending.request_id,
            RequestOutcome::Report(sample_report()),
            Instant::now(),
        );
        let before = app.report.clone();

        app.select_category(ReviewCategory::Suspicious);
        assert_eq!(app.active_category, ReviewCategory::Suspicious);
        assert_eq!(app.report, before);
    }

    #[test]
    fn test_active_category_persists_across_analyses() {
        let mut app = create_test_app();
        app.input = "https://shop.example/item/42".to_string();
        app.select_category(ReviewCategory::LowQuality);

        let pending = app.begin_submission().unwrap();
        app.handle_request_event(
            pending.request_id,
            RequestOutcome::Report(sample_report()),
            Instant::now(),
        );
        assert_eq!(app.active_category, ReviewCategory::LowQuality);
    }

    #[test]
    fn test_round_trip_report_is_stored_unchanged() {
        let mut app = create_test_app();
        app.input = "https://shop.example/item/42".to_string();
        let decoded = sample_report();

        let pending = app.begin_submission().unwrap();
        app.handle_request_event(
            pending.request_id,
            RequestOutcome::Report(decoded.clone()),
            Instant::now(),
        );

        let stored = app.report.as_ref().unwrap();
        assert_eq!(*stored, decoded);
        assert_eq!(stored.star_share(5), decoded.star_share(5));
        for category in ReviewCategory::ALL {
            assert_eq!(stored.reasons_for(category), decoded.reasons_for(category));
            assert_eq!(stored.samples_for(category), decoded.samples_for(category));
            assert_eq!(
                stored.breakdown.share(category),
                decoded.breakdown.share(category)
            );
        }
    }

    #[test]
    fn test_results_jump_resets_detail_scroll_after_settle_delay() {
        let mut app = create_test_app();
        app.input = "https://shop.example/item/42".to_string();
        let pending = app.begin_submission().unwrap();

        let landed = Instant::now();
        app.detail_scroll = 7;
        app.handle_request_event(
            pending.request_id,
            RequestOutcome::Report(sample_report()),
            landed,
        );

        app.tick(landed + Duration::from_millis(50));
        assert_eq!(app.detail_scroll, 7);

        app.tick(landed + RESULTS_SETTLE_DELAY);
        assert_eq!(app.detail_scroll, 0);
    }

    #[test]
    fn test_cursor_editing_stays_on_char_boundaries() {
        let mut app = create_test_app();
        app.insert_str_at_cursor("héllo");
        assert_eq!(app.input_cursor_position, 5);

        app.move_cursor_left();
        app.move_cursor_left();
        app.delete_char_before_cursor();
        assert_eq!(app.input, "hélo");

        app.move_cursor_to_beginning();
        app.insert_char_at_cursor('x');
        assert_eq!(app.input, "xhélo");

        app.clear_input();
        assert_eq!(app.input, "");
        assert_eq!(app.input_cursor_position, 0);
    }
}
