//! Native client for the measurements API.

use maritime_core::config::ApiConfig;
use maritime_core::csrf::CSRF_HEADER;
use maritime_core::marker::Marker;
use maritime_core::query::{MarkerQuery, SiteQuery};
use maritime_core::site::Site;
use maritime_core::{Error, Result};
use reqwest::header::{CONTENT_TYPE, COOKIE};
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 60;

pub struct ApiClient {
    config: ApiConfig,
    http: reqwest::Client,
}

fn transport(e: reqwest::Error) -> Error {
    Error::Transport(e.to_string())
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { config, http })
    }

    pub async fn fetch_sites(&self, query: &SiteQuery) -> Result<Vec<Site>> {
        let url = self.config.sites_url(query);
        log::debug!("GET {}", url);
        let response = self.http.get(&url).send().await.map_err(transport)?;
        let body = ok_body(response).await?;
        Site::list_from_json(&body)
    }

    /// POST the filters. With a token, it goes out as both the CSRF
    /// header and cookie, the way the browser would send it.
    pub async fn fetch_markers(&self, query: &MarkerQuery, csrf_token: Option<&str>) -> Result<Vec<Marker>> {
        let url = self.config.measurements_url();
        let body = query.to_json_body()?;
        log::debug!("POST {} {}", url, body);

        let mut request = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header(CSRF_HEADER, csrf_token.unwrap_or_default())
            .body(body);
        if let Some(token) = csrf_token {
            request = request.header(COOKIE, format!("{}={}", self.config.csrf_cookie, token));
        }

        let response = request.send().await.map_err(transport)?;
        let body = ok_body(response).await?;
        Marker::list_from_json(&body)
    }
}

async fn ok_body(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        return Err(Error::HttpStatus(status.as_u16()));
    }
    response.text().await.map_err(transport)
}
