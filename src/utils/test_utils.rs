#[cfg(test)]
use crate::api::AnalysisReport;
#[cfg(test)]
use crate::core::app::{App, AppOptions};
#[cfg(test)]
use crate::ui::theme::Theme;

#[cfg(test)]
pub fn create_test_app() -> App {
    App::new(AppOptions {
        endpoint: "https://api.test.com".to_string(),
        theme: Theme::dark_default(),
        initial_url: None,
    })
    .unwrap()
}

#[cfg(test)]
pub fn sample_report() -> AnalysisReport {
    serde_json::from_value(serde_json::json!({
        "authenticityScore": 72.0,
        "ratingDistribution": {"5": 40, "4": 25, "3": 15, "2": 10, "1": 10},
        "breakdown": {"genuine": 70, "suspicious": 20, "lowQuality": 10},
        "reasons": {
            "genuine": [
                "Reviews span a long period with varied vocabulary",
                "Most reviewers have purchase-verified accounts"
            ],
            "suspicious": ["Burst of five-star reviews within one week"],
            "lowQuality": ["Several one-word reviews"]
        },
        "sampleReviews": {
            "genuine": ["Took a month to decide between this and the cheaper model; glad I went with this one."],
            "suspicious": ["Best product ever!!! Life changing!!!"],
            "lowQuality": ["good"]
        }
    }))
    .unwrap()
}
