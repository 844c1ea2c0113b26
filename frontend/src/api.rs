use futures::future::{Either, select};
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Deserialize;
use shared::{AnalysisError, AnalysisMode};

/// Long enough for the backend to ship a full video through its models.
pub const ANALYSIS_TIMEOUT_MS: u32 = 300_000;

/// Uploads the selected video to the endpoint owned by `mode` and returns
/// the raw reply body. Parsing is left to the normalizer, which tolerates
/// anything; only transport-level failures surface as errors here.
pub async fn request_analysis(
    base: &str,
    mode: AnalysisMode,
    file: &GlooFile,
) -> Result<String, AnalysisError> {
    let form_data = web_sys::FormData::new().unwrap();
    form_data.append_with_blob("file", file.as_ref()).unwrap();
    form_data
        .append_with_str("mode", mode.request_field())
        .unwrap();

    let url = format!("{}{}", base, mode.endpoint_path());
    log::info!("Dispatching {} scan to {}", mode.request_field(), url);

    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| AnalysisError::Network(e.to_string()))?;

    let sent = select(
        Box::pin(request.send()),
        Box::pin(TimeoutFuture::new(ANALYSIS_TIMEOUT_MS)),
    )
    .await;

    let response = match sent {
        Either::Left((outcome, _)) => {
            outcome.map_err(|e| AnalysisError::Network(e.to_string()))?
        }
        Either::Right(_) => return Err(AnalysisError::Timeout),
    };

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(AnalysisError::Http { status, body });
    }

    response
        .text()
        .await
        .map_err(|e| AnalysisError::Network(e.to_string()))
}

#[derive(Deserialize, Default)]
struct BackendInfo {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    model: Option<String>,
}

/// Startup health probe against the backend root route. Purely cosmetic:
/// a failed probe drives the header badge, it never blocks submission.
pub async fn probe_backend(base: &str) -> Option<String> {
    let response = Request::get(&format!("{}/", base)).send().await.ok()?;
    if !response.ok() {
        log::warn!("Backend probe returned status {}", response.status());
        return None;
    }
    let info = response.json::<BackendInfo>().await.unwrap_or_default();
    Some(
        info.model
            .or(info.status)
            .unwrap_or_else(|| "online".to_string()),
    )
}
