//! Browser fetch client for the measurements API.

use crate::js_bridge::js_message;
use maritime_core::config::ApiConfig;
use maritime_core::csrf::{cookie_value, CSRF_HEADER};
use maritime_core::marker::Marker;
use maritime_core::query::{MarkerQuery, SiteQuery};
use maritime_core::site::Site;
use maritime_core::{Error, Result};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, Request, RequestCredentials, RequestInit, Response};

fn transport(value: JsValue) -> Error {
    Error::Transport(js_message(&value))
}

/// CSRF token from `document.cookie`, if the backend has set one.
pub fn csrf_token(cookie_name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let cookies = document.dyn_into::<HtmlDocument>().ok()?.cookie().ok()?;
    cookie_value(&cookies, cookie_name)
}

/// `GET /measurements/sites/` with the date and bbox filters.
pub async fn fetch_sites(config: &ApiConfig, query: &SiteQuery) -> Result<Vec<Site>> {
    let url = config.sites_url(query);
    log::debug!("Fetching sites: {}", url);

    let opts = RequestInit::new();
    opts.set_method("GET");
    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport)?;

    let body = send(request).await?;
    Site::list_from_json(&body)
}

/// `POST /measurements/` with the full filter set as JSON.
pub async fn fetch_markers(config: &ApiConfig, query: &MarkerQuery) -> Result<Vec<Marker>> {
    let body = query.to_json_body()?;
    let url = config.measurements_url();
    log::debug!("Fetching markers: {} {}", url, body);

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_credentials(RequestCredentials::Include);
    opts.set_body(&JsValue::from_str(&body));
    let request = Request::new_with_str_and_init(&url, &opts).map_err(transport)?;

    let headers = request.headers();
    headers.set("Content-Type", "application/json").map_err(transport)?;
    let token = csrf_token(&config.csrf_cookie).unwrap_or_default();
    headers.set(CSRF_HEADER, &token).map_err(transport)?;

    let body = send(request).await?;
    Marker::list_from_json(&body)
}

/// Banner text for a finished fetch: the error message, or `None` so a
/// success clears the previous failure.
pub fn failure_message<T>(result: &Result<T>) -> Option<String> {
    result.as_ref().err().map(|e| e.to_string())
}

/// Run the request and return the body of an OK response as text.
async fn send(request: Request) -> Result<String> {
    let window = web_sys::window().ok_or_else(|| Error::Transport("no window".to_string()))?;

    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(transport)?;
    let response: Response = value.dyn_into().map_err(transport)?;
    if !response.ok() {
        return Err(Error::HttpStatus(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(transport)?)
        .await
        .map_err(transport)?;
    text.as_string()
        .ok_or_else(|| Error::Transport("response body is not text".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message() {
        let failed: Result<Vec<Site>> = Err(Error::HttpStatus(503));
        assert_eq!(failure_message(&failed), Some(Error::HttpStatus(503).to_string()));

        let loaded: Result<Vec<Site>> = Ok(vec![Site { name: "Tara_Ocean".to_string() }]);
        assert_eq!(failure_message(&loaded), None);
    }
}
