//! Shared constants used across the application

use std::time::Duration;

/// Production analysis endpoint. Overridable via `--endpoint` or the config file.
pub const DEFAULT_ENDPOINT: &str = "https://hackthon-kjwe.onrender.com";

/// Hero caption revealed character by character on startup.
pub const TAGLINE: &str = "Fake reviews look real. We detect the patterns that human misses.";

/// Reveal rate for the hero tagline.
pub const TAGLINE_CHAR_INTERVAL: Duration = Duration::from_millis(40);

/// Fallback reveal rate for animators that do not specify one.
pub const DEFAULT_CHAR_INTERVAL: Duration = Duration::from_millis(50);

/// Pause between a report landing and the detail panel snapping back to the top.
pub const RESULTS_SETTLE_DELAY: Duration = Duration::from_millis(200);

/// Upper bound on a single analysis round trip. Without one, a hung connection
/// would hold the in-flight phase open indefinitely.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Space reserved for the busy indicator + margin in the input area.
/// This must be consistently used in both UI rendering and cursor math.
pub const INDICATOR_SPACE: u16 = 4;
