//! Canvas REST client implementation

use crate::canvas::CanvasService;
use crate::error::{Error, Result};
use crate::types::{Assignment, CanvasConfig, Course, Submission, UploadedFile, ONLINE_UPLOAD};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, LINK};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Page size requested for list endpoints
const PER_PAGE: &str = "100";

/// Canvas service using reqwest
pub struct CanvasClient {
    client: Client,
    token: String,
    config: CanvasConfig,
}

/// First step of the Canvas file upload protocol
#[derive(Deserialize)]
struct UploadSlot {
    upload_url: String,
    #[serde(default)]
    upload_params: serde_json::Map<String, serde_json::Value>,
}

impl CanvasClient {
    /// Create a new Canvas client for a base URL such as `https://canvas.ubc.ca/`
    pub fn new(base_url: &str, token: String) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            token,
            config: CanvasConfig { base_url },
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.config.base_url, path)
    }

    fn authed(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let value = self
            .authed(self.client.get(url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(value)
    }

    /// Fetch every page of a list endpoint, following `Link: rel="next"`
    async fn get_paginated<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>> {
        let mut items = Vec::new();
        let mut next = Some(format!("{url}?per_page={PER_PAGE}"));

        while let Some(page_url) = next.take() {
            debug!(url = %page_url, "fetching page");
            let response = self
                .authed(self.client.get(&page_url))
                .send()
                .await?
                .error_for_status()?;

            next = next_page_url(response.headers());
            let mut page: Vec<T> = response.json().await?;
            items.append(&mut page);
        }

        Ok(items)
    }
}

/// Normalize a Canvas base URL: must parse, trailing slashes removed
pub fn normalize_base_url(base_url: &str) -> Result<String> {
    let parsed = url::Url::parse(base_url.trim())?;
    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

/// Extract the `rel="next"` target from a `Link` header
fn next_page_url(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;
    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        let is_next = parts.any(|p| p.trim() == r#"rel="next""#);
        if is_next {
            target
                .strip_prefix('<')
                .and_then(|t| t.strip_suffix('>'))
                .map(ToString::to_string)
        } else {
            None
        }
    })
}

fn param_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
impl CanvasService for CanvasClient {
    async fn get_course(&self, course_id: u64) -> Result<Course> {
        let url = self.api_url(&format!("/courses/{course_id}"));
        debug!(course_id, "fetching course");
        self.get_json(&url).await
    }

    async fn list_assignments(&self, course_id: u64) -> Result<Vec<Assignment>> {
        let url = self.api_url(&format!("/courses/{course_id}/assignments"));
        let assignments: Vec<Assignment> = self.get_paginated(&url).await?;
        debug!(course_id, count = assignments.len(), "listed assignments");
        Ok(assignments)
    }

    async fn upload_submission_file(
        &self,
        course_id: u64,
        assignment_id: u64,
        path: &Path,
    ) -> Result<UploadedFile> {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::Api(format!("not a file: {}", path.display())))?;
        let bytes = tokio::fs::read(path).await?;

        // Step 1: ask Canvas for an upload slot
        let url = self.api_url(&format!(
            "/courses/{course_id}/assignments/{assignment_id}/submissions/self/files"
        ));
        let size = bytes.len().to_string();
        let slot: UploadSlot = self
            .authed(self.client.post(&url))
            .form(&[("name", file_name.as_str()), ("size", size.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(assignment_id, file = %file_name, "received upload slot");

        // Step 2: post the bytes to the upload target, file part last
        let mut form = Form::new();
        for (key, value) in &slot.upload_params {
            form = form.text(key.clone(), param_text(value));
        }
        form = form.part("file", Part::bytes(bytes).file_name(file_name.clone()));

        // Step 3: the upload target answers (possibly via redirect) with the file record
        let uploaded: UploadedFile = self
            .client
            .post(&slot.upload_url)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(assignment_id, file_id = uploaded.id, "uploaded file");

        Ok(uploaded)
    }

    async fn create_submission(
        &self,
        course_id: u64,
        assignment_id: u64,
        file_ids: &[u64],
    ) -> Result<Submission> {
        let url = self.api_url(&format!(
            "/courses/{course_id}/assignments/{assignment_id}/submissions"
        ));

        let mut params = vec![(
            "submission[submission_type]".to_string(),
            ONLINE_UPLOAD.to_string(),
        )];
        params.extend(
            file_ids
                .iter()
                .map(|id| ("submission[file_ids][]".to_string(), id.to_string())),
        );

        let submission: Submission = self
            .authed(self.client.post(&url))
            .form(&params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!(assignment_id, submission_id = ?submission.id, "created submission");

        Ok(submission)
    }

    fn config(&self) -> &CanvasConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://canvas.ubc.ca/").unwrap(),
            "https://canvas.ubc.ca"
        );
        assert_eq!(
            normalize_base_url(" https://canvas.example.edu ").unwrap(),
            "https://canvas.example.edu"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_garbage() {
        assert!(matches!(
            normalize_base_url("not a url"),
            Err(Error::Url(_))
        ));
    }

    #[test]
    fn test_next_page_url() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(
                r#"<https://c.test/api/v1/courses/1/assignments?page=1>; rel="current", <https://c.test/api/v1/courses/1/assignments?page=2>; rel="next", <https://c.test/api/v1/courses/1/assignments?page=3>; rel="last""#,
            ),
        );
        assert_eq!(
            next_page_url(&headers).as_deref(),
            Some("https://c.test/api/v1/courses/1/assignments?page=2")
        );
    }

    #[test]
    fn test_next_page_url_absent_on_last_page() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(r#"<https://c.test/x?page=3>; rel="last""#),
        );
        assert!(next_page_url(&headers).is_none());
        assert!(next_page_url(&HeaderMap::new()).is_none());
    }

    #[test]
    fn test_param_text() {
        assert_eq!(param_text(&serde_json::json!("abc")), "abc");
        assert_eq!(param_text(&serde_json::json!(42)), "42");
    }
}
