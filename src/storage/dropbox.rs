use anyhow::{anyhow, bail, Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use super::{FolderCreate, Storage};

const API_BASE: &str = "https://api.dropboxapi.com/2";
const CONTENT_BASE: &str = "https://content.dropboxapi.com/2";

/// Dropbox binding of [`Storage`] over the HTTP API. Construct once and
/// inject; the inner [`Client`] pools connections across calls.
pub struct DropboxStorage {
    http: Client,
    token: String,
}

impl DropboxStorage {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(Client::new(), token)
    }

    pub fn with_client(http: Client, token: impl Into<String>) -> Self {
        Self {
            http,
            token: token.into(),
        }
    }
}

#[derive(Serialize)]
struct CreateFolderArg<'a> {
    path: &'a str,
    autorename: bool,
}

#[derive(Serialize)]
struct UploadArg<'a> {
    path: &'a str,
    mode: &'a str,
    autorename: bool,
    mute: bool,
}

#[derive(Serialize)]
struct SharedLinkArg<'a> {
    path: &'a str,
}

/// `files/create_folder_v2` reports an existing folder as a 409 whose body
/// nests `path` → `conflict`. Any other 409 shape is a real failure.
fn is_folder_conflict(body: &str) -> bool {
    let v: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) => return false,
    };
    v.pointer("/error/.tag").and_then(Value::as_str) == Some("path")
        && v.pointer("/error/path/.tag").and_then(Value::as_str) == Some("conflict")
}

/// Prefer the API's one-line `error_summary` over the raw body.
fn error_summary(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.get("error_summary")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

#[async_trait]
impl Storage for DropboxStorage {
    async fn create_folder(&self, path: &str) -> Result<FolderCreate> {
        let resp = self
            .http
            .post(format!("{API_BASE}/files/create_folder_v2"))
            .bearer_auth(&self.token)
            .json(&CreateFolderArg {
                path,
                autorename: false,
            })
            .send()
            .await
            .context("files/create_folder_v2 request")?;

        let status = resp.status();
        if status.is_success() {
            debug!(%path, "folder created");
            return Ok(FolderCreate::Created);
        }

        let body = resp.text().await.unwrap_or_default();
        if status == StatusCode::CONFLICT && is_folder_conflict(&body) {
            debug!(%path, "folder already exists");
            return Ok(FolderCreate::AlreadyExists);
        }
        bail!(
            "files/create_folder_v2 {} for {}: {}",
            status,
            path,
            error_summary(&body)
        );
    }

    async fn write_file(&self, path: &str, bytes: Vec<u8>) -> Result<()> {
        let arg = serde_json::to_string(&UploadArg {
            path,
            mode: "overwrite",
            autorename: false,
            mute: false,
        })?;

        let resp = self
            .http
            .post(format!("{CONTENT_BASE}/files/upload"))
            .bearer_auth(&self.token)
            .header("Dropbox-API-Arg", arg)
            .header(header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes)
            .send()
            .await
            .context("files/upload request")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!(
                "files/upload {} for {}: {}",
                status,
                path,
                error_summary(&body)
            );
        }
        debug!(%path, "file written");
        Ok(())
    }

    async fn create_shared_link(&self, path: &str) -> Result<String> {
        let resp = self
            .http
            .post(format!(
                "{API_BASE}/sharing/create_shared_link_with_settings"
            ))
            .bearer_auth(&self.token)
            .json(&SharedLinkArg { path })
            .send()
            .await
            .context("sharing/create_shared_link_with_settings request")?;

        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        if !status.is_success() {
            bail!(
                "sharing/create_shared_link_with_settings {} for {}: {}",
                status,
                path,
                error_summary(&body)
            );
        }

        let v: Value = serde_json::from_str(&body).context("shared link response")?;
        v.get("url")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("shared link response has no url"))
    }
}
