use gloo_storage::{LocalStorage, Storage};

const STORAGE_KEY: &str = "truthlens.api_url";
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Base URL of the detection backend. Resolution order: `?api=` query
/// override (remembered for later visits), stored override, compile-time
/// `TRUTHLENS_API_URL`, loopback default.
pub fn api_base_url() -> String {
    if let Some(url) = query_override() {
        LocalStorage::set(STORAGE_KEY, &url).ok();
        return url;
    }
    if let Ok(url) = LocalStorage::get::<String>(STORAGE_KEY) {
        return url;
    }
    option_env!("TRUTHLENS_API_URL")
        .unwrap_or(DEFAULT_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

fn query_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let url = params.get("api")?;
    let url = url.trim().trim_end_matches('/');
    (!url.is_empty()).then(|| url.to_string())
}
