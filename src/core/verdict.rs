//! Three-tier judgment derived from the authenticity score.

/// Color tone the renderer applies to a verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictTone {
    Negative,
    Caution,
    Positive,
}

/// Step function of the authenticity score. Carries no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    LikelyManipulated,
    MixedReviews,
    MostlyGenuine,
}

impl Verdict {
    /// Band boundaries are inclusive on the upper side: 39 is manipulated,
    /// 40 and 69 are mixed, 70 is genuine.
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            Verdict::LikelyManipulated
        } else if score < 70.0 {
            Verdict::MixedReviews
        } else {
            Verdict::MostlyGenuine
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Verdict::LikelyManipulated => "Likely Manipulated",
            Verdict::MixedReviews => "Mixed Reviews",
            Verdict::MostlyGenuine => "Mostly Genuine",
        }
    }

    pub fn marker(self) -> &'static str {
        match self {
            Verdict::LikelyManipulated => "✖",
            Verdict::MixedReviews => "⚠",
            Verdict::MostlyGenuine => "✔",
        }
    }

    pub fn tone(self) -> VerdictTone {
        match self {
            Verdict::LikelyManipulated => VerdictTone::Negative,
            Verdict::MixedReviews => VerdictTone::Caution,
            Verdict::MostlyGenuine => VerdictTone::Positive,
        }
    }

    /// Full line rendered under the results, e.g. `✔ Mostly Genuine`.
    pub fn banner(self) -> String {
        format!("{} {}", self.marker(), self.label())
    }
}
