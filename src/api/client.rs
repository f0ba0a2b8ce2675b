use crate::api::{AnalysisReport, AnalyzeRequest};

/// Issue the single outbound call: POST the product URL to the analysis
/// endpoint and decode the JSON body.
///
/// Every failure path (transport error, non-success status, undecodable body)
/// surfaces as an error; the caller decides how to present it.
pub async fn request_analysis(
    client: &reqwest::Client,
    endpoint: &str,
    product_url: &str,
) -> Result<AnalysisReport, Box<dyn std::error::Error + Send + Sync>> {
    let response = client
        .post(endpoint)
        .header("Content-Type", "application/json")
        .json(&AnalyzeRequest { url: product_url })
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(format!("analysis request failed with status {status}: {error_text}").into());
    }

    let report = response.json::<AnalysisReport>().await?;
    Ok(report)
}
