//! API Client

use academy_core::ContactForm;

/// Where consultation requests are posted. Set `ACADEMY_FORM_ENDPOINT` at
/// build time to post straight to a hosted form processor instead of the
/// site server's relay.
pub const FORM_ENDPOINT: &str = match option_env!("ACADEMY_FORM_ENDPOINT") {
    Some(endpoint) => endpoint,
    None => "/api/contact",
};

/// Submit a validated contact form as `application/x-www-form-urlencoded`
pub async fn submit_contact(form: &ContactForm) -> Result<(), String> {
    let client = reqwest::Client::new();

    let response = client
        .post(absolute_url(FORM_ENDPOINT)?)
        .header("Accept", "application/json")
        .form(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        Ok(())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"]
            .as_str()
            .unwrap_or("Something went wrong. Please email us instead.")
            .to_string())
    }
}

/// reqwest on WASM needs absolute URLs; resolve site-relative paths
/// against the page origin.
fn absolute_url(endpoint: &str) -> Result<String, String> {
    if endpoint.starts_with('/') {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .ok_or_else(|| "Couldn't determine the page address. Please email us instead.".to_string())?;
        Ok(join_origin(&origin, endpoint))
    } else {
        Ok(endpoint.to_string())
    }
}

fn join_origin(origin: &str, path: &str) -> String {
    format!("{}{path}", origin.trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_origin() {
        assert_eq!(
            join_origin("https://futuremdacademy.org", "/api/contact"),
            "https://futuremdacademy.org/api/contact"
        );
        assert_eq!(join_origin("http://127.0.0.1:3000/", "/api/contact"), "http://127.0.0.1:3000/api/contact");
    }

    #[test]
    fn test_absolute_endpoint_passes_through() {
        assert_eq!(
            absolute_url("https://formspree.io/f/abc").as_deref(),
            Ok("https://formspree.io/f/abc")
        );
    }
}
