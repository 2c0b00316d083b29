//! GitHub REST implementation of [`Remote`].
//!
//! Identity checks happen before any request is built: a missing owner or
//! repository fails with [`EditorError::NotConfigured`], a write without a
//! token fails with [`EditorError::ReadOnly`].

use crate::core::config::EditorConfig;
use crate::core::error::{EditorError, Result};
use crate::core::file_status::EntryKind;
use crate::core::remote::{CommitAuthor, RefHead, Remote, TreeItem, TreeUpdate};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

const ACCEPT_JSON: &str = "application/vnd.github.v3+json";
const ACCEPT_RAW: &str = "application/vnd.github.v3.raw";

#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_base_url: String,
    owner: String,
    repository: String,
    branch: String,
    token: Option<String>,
}

#[derive(Deserialize)]
struct TreeResponse {
    tree: Vec<TreeNode>,
    #[serde(default)]
    truncated: bool,
}

#[derive(Deserialize)]
struct TreeNode {
    path: String,
    #[serde(rename = "type")]
    kind: String,
    sha: String,
}

#[derive(Deserialize)]
struct ShaResponse {
    sha: String,
}

#[derive(Deserialize)]
struct RefResponse {
    #[serde(rename = "ref")]
    ref_name: String,
    object: ShaResponse,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl GitHubClient {
    pub fn new(config: &EditorConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ghedit/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            owner: config.repository.owner.clone(),
            repository: config.repository.name.clone(),
            branch: config.repository.branch.clone(),
            token: config.token.clone().filter(|t| !t.is_empty()),
        })
    }

    fn repo_url(&self, suffix: &str) -> Result<Url> {
        if self.owner.is_empty() || self.repository.is_empty() {
            return Err(EditorError::NotConfigured);
        }
        let raw = format!(
            "{}/repos/{}/{}/{}",
            self.api_base_url, self.owner, self.repository, suffix
        );
        Url::parse(&raw).map_err(|e| EditorError::config_error(format!("Invalid API URL '{raw}': {e}")))
    }

    fn request(&self, method: Method, url: Url, accept: &str) -> RequestBuilder {
        log::debug!("{method} {url}");
        let builder = self.http.request(method, url).header("Accept", accept);
        match &self.token {
            Some(token) => builder.header("Authorization", format!("token {token}")),
            None => builder,
        }
    }

    fn write_request(&self, method: Method, suffix: &str) -> Result<RequestBuilder> {
        if self.token.is_none() {
            return Err(EditorError::ReadOnly);
        }
        let url = self.repo_url(suffix)?;
        Ok(self.request(method, url, ACCEPT_JSON))
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
        let response = check_status(builder.send().await?).await?;
        Ok(response.json().await?)
    }
}

/// Turn a non-success response into a classified error
async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ApiErrorBody>(&body)
        .map(|b| b.message)
        .unwrap_or(body);
    log::debug!("Request failed with {status}: {message}");
    Err(EditorError::from_remote(status.as_u16(), message))
}

impl Remote for GitHubClient {
    fn can_write(&self) -> bool {
        self.token.is_some()
    }

    async fn fetch_tree(&self) -> Result<Vec<TreeItem>> {
        let mut url = self.repo_url(&format!("git/trees/{}", self.branch))?;
        url.query_pairs_mut().append_pair("recursive", "1");

        let response: TreeResponse =
            Self::send_json(self.request(Method::GET, url, ACCEPT_JSON)).await?;
        if response.truncated {
            log::warn!("Upstream tree listing was truncated; some entries are missing");
        }

        Ok(response
            .tree
            .into_iter()
            .filter_map(|node| {
                EntryKind::from_upstream(&node.kind).map(|kind| TreeItem {
                    path: node.path,
                    kind,
                    hash: node.sha,
                })
            })
            .collect())
    }

    async fn fetch_content(&self, path: &str) -> Result<String> {
        let mut url = self.repo_url("contents")?;
        url.path_segments_mut()
            .map_err(|_| EditorError::config_error("API URL cannot carry a path"))?
            .extend(path.split('/'));
        url.query_pairs_mut().append_pair("ref", &self.branch);

        let response = self.request(Method::GET, url, ACCEPT_RAW).send().await?;
        Ok(check_status(response).await?.text().await?)
    }

    async fn create_blob(&self, content: &str) -> Result<String> {
        let builder = self
            .write_request(Method::POST, "git/blobs")?
            .json(&json!({ "content": content, "encoding": "utf-8" }));
        let blob: ShaResponse = Self::send_json(builder).await?;
        Ok(blob.sha)
    }

    async fn get_ref(&self) -> Result<RefHead> {
        let url = self.repo_url(&format!("git/ref/heads/{}", self.branch))?;
        let response: RefResponse =
            Self::send_json(self.request(Method::GET, url, ACCEPT_JSON)).await?;
        Ok(RefHead {
            head_hash: response.object.sha,
            ref_name: response.ref_name,
        })
    }

    async fn create_tree(&self, base_tree: &str, entries: &[TreeUpdate]) -> Result<String> {
        let builder = self
            .write_request(Method::POST, "git/trees")?
            .json(&json!({ "base_tree": base_tree, "tree": entries }));
        let tree: ShaResponse = Self::send_json(builder).await?;
        Ok(tree.sha)
    }

    async fn create_commit(
        &self,
        message: &str,
        tree_hash: &str,
        parent_hash: &str,
        author: &CommitAuthor,
    ) -> Result<String> {
        let builder = self.write_request(Method::POST, "git/commits")?.json(&json!({
            "message": message,
            "tree": tree_hash,
            "parents": [parent_hash],
            "author": author,
        }));
        let commit: ShaResponse = Self::send_json(builder).await?;
        Ok(commit.sha)
    }

    async fn update_ref(&self, ref_name: &str, commit_hash: &str) -> Result<()> {
        let builder = self
            .write_request(Method::PATCH, &format!("git/{ref_name}"))?
            .json(&json!({ "sha": commit_hash }));
        check_status(builder.send().await?).await?;
        Ok(())
    }
}
