use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Body of the one outbound call: `{"url": "<product page>"}`.
#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub url: &'a str,
}

/// The three mutually exclusive classifications the analysis applies to a
/// review set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewCategory {
    Genuine,
    Suspicious,
    LowQuality,
}

impl ReviewCategory {
    pub const ALL: [ReviewCategory; 3] = [
        ReviewCategory::Genuine,
        ReviewCategory::Suspicious,
        ReviewCategory::LowQuality,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReviewCategory::Genuine => "Genuine",
            ReviewCategory::Suspicious => "Suspicious",
            ReviewCategory::LowQuality => "Low Quality",
        }
    }

    /// Heading for the detail panel.
    pub fn heading(self) -> &'static str {
        match self {
            ReviewCategory::Genuine => "Why these reviews look genuine:",
            ReviewCategory::Suspicious => "Why these reviews look suspicious:",
            ReviewCategory::LowQuality => "Why these reviews are low quality:",
        }
    }

    pub fn next(self) -> Self {
        match self {
            ReviewCategory::Genuine => ReviewCategory::Suspicious,
            ReviewCategory::Suspicious => ReviewCategory::LowQuality,
            ReviewCategory::LowQuality => ReviewCategory::Genuine,
        }
    }

    pub fn prev(self) -> Self {
        self.next().next()
    }
}

/// Per-category share percentages from the `breakdown` object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryShares {
    pub genuine: f64,
    pub suspicious: f64,
    pub low_quality: f64,
}

impl CategoryShares {
    pub fn share(&self, category: ReviewCategory) -> f64 {
        match category {
            ReviewCategory::Genuine => self.genuine,
            ReviewCategory::Suspicious => self.suspicious,
            ReviewCategory::LowQuality => self.low_quality,
        }
    }
}

/// Per-category ordered string lists (`reasons`, `sampleReviews`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CategoryLists {
    pub genuine: Vec<String>,
    pub suspicious: Vec<String>,
    pub low_quality: Vec<String>,
}

impl CategoryLists {
    pub fn for_category(&self, category: ReviewCategory) -> &[String] {
        match category {
            ReviewCategory::Genuine => &self.genuine,
            ReviewCategory::Suspicious => &self.suspicious,
            ReviewCategory::LowQuality => &self.low_quality,
        }
    }
}

/// Everything the analysis endpoint returns for one product page.
///
/// Every field decodes with an explicit default so an incomplete response can
/// never fail at render time; the render path only reads the defaulted
/// accessors below.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalysisReport {
    /// 0–100 percentage summarizing how genuine the review set appears.
    pub authenticity_score: f64,
    /// Star rating (1–5) to percentage of reviews at that rating.
    pub rating_distribution: HashMap<u8, f64>,
    pub breakdown: CategoryShares,
    pub reasons: CategoryLists,
    pub sample_reviews: CategoryLists,
}

impl AnalysisReport {
    /// Percentage of reviews at the given star rating, 0 when absent.
    pub fn star_share(&self, star: u8) -> f64 {
        self.rating_distribution.get(&star).copied().unwrap_or(0.0)
    }

    pub fn reasons_for(&self, category: ReviewCategory) -> &[String] {
        self.reasons.for_category(category)
    }

    pub fn samples_for(&self, category: ReviewCategory) -> &[String] {
        self.sample_reviews.for_category(category)
    }
}

pub mod client;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_full_response() {
        let json = r#"{
            "authenticityScore": 72.0,
            "ratingDistribution": {"5": 40, "4": 25, "3": 15, "2": 10, "1": 10},
            "breakdown": {"genuine": 70, "suspicious": 20, "lowQuality": 10},
            "reasons": {
                "genuine": ["Varied vocabulary", "Purchase-verified accounts"],
                "suspicious": ["Burst of five-star reviews in one week"],
                "lowQuality": ["One-word reviews"]
            },
            "sampleReviews": {
                "genuine": ["Took a month to decide, glad I did."],
                "suspicious": ["Best product ever!!!"],
                "lowQuality": ["good"]
            }
        }"#;

        let report: AnalysisReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.authenticity_score, 72.0);
        assert_eq!(report.star_share(5), 40.0);
        assert_eq!(report.breakdown.share(ReviewCategory::Genuine), 70.0);
        assert_eq!(report.reasons_for(ReviewCategory::Suspicious).len(), 1);
        assert_eq!(
            report.samples_for(ReviewCategory::LowQuality),
            ["good".to_string()]
        );
    }

    #[test]
    fn test_missing_star_defaults_to_zero() {
        let json = r#"{
            "authenticityScore": 55,
            "ratingDistribution": {"5": 50, "4": 30, "2": 10, "1": 10}
        }"#;
        let report: AnalysisReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.star_share(3), 0.0);
        assert_eq!(report.star_share(5), 50.0);
    }

    #[test]
    fn test_empty_object_decodes_to_defaults() {
        let report: AnalysisReport = serde_json::from_str("{}").unwrap();
        assert_eq!(report.authenticity_score, 0.0);
        assert!(report.rating_distribution.is_empty());
        for category in ReviewCategory::ALL {
            assert_eq!(report.breakdown.share(category), 0.0);
            assert!(report.reasons_for(category).is_empty());
            assert!(report.samples_for(category).is_empty());
        }
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(AnalyzeRequest {
            url: "https://shop.example/item/42",
        })
        .unwrap();
        assert_eq!(
            body,
            serde_json::json!({"url": "https://shop.example/item/42"})
        );
    }

    #[test]
    fn test_category_cycle_covers_all() {
        let mut seen = Vec::new();
        let mut category = ReviewCategory::Genuine;
        for _ in 0..3 {
            seen.push(category);
            category = category.next();
        }
        assert_eq!(seen, ReviewCategory::ALL);
        assert_eq!(category, ReviewCategory::Genuine);
        assert_eq!(ReviewCategory::Genuine.prev(), ReviewCategory::LowQuality);
    }
}
