//! The Traceix service client.
//!
//! This module provides [`TraceixClient`], which wraps the service's HTTP
//! API: file upload for AI classification, CAPA and EXIF extraction,
//! job-status polling, hash search, and the public IPFS dataset store.
//!
//! # Requirements
//!
//! - Traceix API key
//! - Network access to the service (default `https://ai.perkinsfund.org`)
//!
//! Every operation is a single `POST` carrying the `x-api-key` and
//! `user-agent` headers, issued exactly once: no retries, no redirects.
//! Responses are returned as opaque [`serde_json::Value`]s; the client does
//! not interpret their schema.

use reqwest::multipart;
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use std::path::Path;
use tokio::fs;

use crate::core::config::ClientConfig;
use crate::core::endpoint::Endpoint;
use crate::core::error::{ClientError, ClientResult};
use crate::core::types::{SearchType, UploadResult};

/// Async client for the Traceix malware-analysis service.
///
/// The client is immutable after construction and holds no shared mutable
/// state, so it can be used freely from concurrent tasks. The API key and
/// user-agent are resolved exactly once, at construction.
///
/// # Examples
///
/// ```rust,no_run
/// use traceix::{ClientConfig, SearchType, TraceixClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = TraceixClient::new(ClientConfig::new("my-api-key"))?;
///
///     let result = client.full_upload("samples/dropper.exe").await?;
///     println!("verdict: {}", result.ai_prediction);
///
///     let hits = client.hash_search("d2c1…", SearchType::Capa).await?;
///     println!("{hits}");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct TraceixClient {
    config: ClientConfig,
    user_agent: String,
    http: reqwest::Client,
}

impl TraceixClient {
    /// Creates a new client from the given configuration.
    ///
    /// Fails with [`ClientError::NoApiKey`] if the configured key is empty,
    /// or [`ClientError::Internal`] if the HTTP client cannot be built.
    /// Construction performs no network I/O.
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        if config.has_empty_key() {
            return Err(ClientError::NoApiKey);
        }

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::internal(format!("failed to create HTTP client: {e}")))?;

        let user_agent = config.user_agent();

        Ok(Self {
            config,
            user_agent,
            http,
        })
    }

    /// Creates a client configured entirely from the environment.
    ///
    /// Shorthand for `TraceixClient::new(ClientConfig::from_env()?)`.
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Starts a `POST` to the given endpoint with the shared headers.
    fn post(&self, endpoint: Endpoint) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.config.base_url, endpoint.path());
        tracing::debug!(path = endpoint.path(), "sending request");
        self.http
            .post(url)
            .header("x-api-key", self.config.api_key.expose_secret())
            .header(reqwest::header::USER_AGENT, &self.user_agent)
    }

    /// Sends a request and parses the JSON response.
    ///
    /// Transport failures and non-success statuses both surface as
    /// [`ClientError::Http`]; there is exactly one attempt.
    async fn execute(&self, request: reqwest::RequestBuilder) -> ClientResult<Value> {
        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    /// Builds the multipart `file` part, streaming from disk.
    ///
    /// The file is handed to the transport as a stream, so uploads are not
    /// buffered in memory; the handle is closed on every exit path when the
    /// stream is dropped.
    async fn file_form(&self, path: &Path) -> ClientResult<multipart::Form> {
        let file = fs::File::open(path)
            .await
            .map_err(|e| ClientError::file_unreadable(path.display().to_string(), e))?;

        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("file")
            .to_owned();

        let part = multipart::Part::stream(reqwest::Body::from(file))
            .file_name(filename)
            .mime_str("application/octet-stream")?;

        Ok(multipart::Form::new().part("file", part))
    }

    /// Uploads a file to the given endpoint as a multipart request.
    async fn upload_to(&self, endpoint: Endpoint, path: &Path) -> ClientResult<Value> {
        let form = self.file_form(path).await?;
        self.execute(self.post(endpoint).multipart(form)).await
    }

    /// Uploads a file for AI classification.
    ///
    /// Fails with [`ClientError::FileUnreadable`] if the path cannot be
    /// opened, before any request is issued.
    pub async fn ai_prediction(&self, path: impl AsRef<Path>) -> ClientResult<Value> {
        self.upload_to(Endpoint::Upload, path.as_ref()).await
    }

    /// Uploads a file for CAPA capability extraction.
    pub async fn capa_extraction(&self, path: impl AsRef<Path>) -> ClientResult<Value> {
        self.upload_to(Endpoint::Capa, path.as_ref()).await
    }

    /// Uploads a file for EXIF metadata extraction.
    pub async fn exif_extraction(&self, path: impl AsRef<Path>) -> ClientResult<Value> {
        self.upload_to(Endpoint::Exif, path.as_ref()).await
    }

    /// Performs a full upload: AI classification, CAPA extraction, and EXIF
    /// extraction of the same file, sequentially and in that order.
    ///
    /// The three calls are independent requests, not one transaction. The
    /// composite is fail-fast: if any sub-request fails, the remaining calls
    /// are not issued and results already obtained are discarded, so the
    /// caller never sees a partial triple.
    pub async fn full_upload(&self, path: impl AsRef<Path>) -> ClientResult<UploadResult> {
        let path = path.as_ref();
        let ai_prediction = self.ai_prediction(path).await?;
        let capa_status = self.capa_extraction(path).await?;
        let exif_status = self.exif_extraction(path).await?;
        Ok(UploadResult {
            ai_prediction,
            capa_status,
            exif_status,
        })
    }

    /// Checks the status of a previously submitted job.
    ///
    /// Fails with [`ClientError::NoUuidProvided`] if `uuid` is empty, before
    /// any request is issued.
    pub async fn check_status(&self, uuid: &str) -> ClientResult<Value> {
        if uuid.is_empty() {
            return Err(ClientError::NoUuidProvided);
        }
        self.execute(self.post(Endpoint::Status).json(&json!({ "uuid": uuid })))
            .await
    }

    /// Searches analysis results by SHA-256 hash.
    ///
    /// `search_type` selects the CAPA or EXIF result store. To accept
    /// user-supplied type strings, parse them with
    /// [`SearchType::from_str`](std::str::FromStr), which rejects anything
    /// but `"capa"` and `"exif"` without touching the network.
    pub async fn hash_search(
        &self,
        file_hash: &str,
        search_type: SearchType,
    ) -> ClientResult<Value> {
        self.execute(
            self.post(search_type.endpoint())
                .json(&json!({ "sha256": file_hash })),
        )
        .await
    }

    /// Lists all public IPFS datasets currently available.
    pub async fn list_all_ipfs_datasets(&self) -> ClientResult<Value> {
        self.execute(self.post(Endpoint::IpfsListAll)).await
    }

    /// Fetches a public IPFS dataset by CID.
    pub async fn get_public_ipfs_dataset(&self, cid: &str) -> ClientResult<Value> {
        self.execute(self.post(Endpoint::IpfsSearch).json(&json!({ "cid": cid })))
            .await
    }

    /// Searches the public IPFS dataset store by file hash.
    pub async fn search_ipfs_dataset_by_hash(&self, file_hash: &str) -> ClientResult<Value> {
        self.execute(
            self.post(Endpoint::IpfsFind)
                .json(&json!({ "sha_hash": file_hash })),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{any, body_json, header, header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> TraceixClient {
        let config = ClientConfig::new("test-key").with_base_url(server.uri());
        TraceixClient::new(config).unwrap()
    }

    fn sample_file(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents).unwrap();
        file
    }

    #[test]
    fn test_new_rejects_empty_key() {
        let err = TraceixClient::new(ClientConfig::new("")).unwrap_err();
        assert!(matches!(err, ClientError::NoApiKey));
    }

    #[tokio::test]
    async fn test_check_status_passes_response_through() {
        let server = MockServer::start().await;
        let body = serde_json::json!({"status": "finished", "verdict": "benign"});

        Mock::given(method("POST"))
            .and(path("/api/v1/traceix/status"))
            .and(body_json(serde_json::json!({"uuid": "abc-123"})))
            .and(header("x-api-key", "test-key"))
            .and(header_exists("user-agent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).check_status("abc-123").await.unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_check_status_empty_uuid_issues_no_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server).check_status("").await.unwrap_err();
        assert!(matches!(err, ClientError::NoUuidProvided));
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_hash_search_selects_endpoint_and_sends_hash_verbatim() {
        let server = MockServer::start().await;
        let hash = "275a021bbfb6489e54d471899f7db9d1663fc695ec2fe2a2c4538aabf651fd0f";

        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/capa/search"))
            .and(body_json(serde_json::json!({"sha256": hash})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"hits": 1})))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/exif/search"))
            .and(body_json(serde_json::json!({"sha256": hash})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"hits": 2})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let capa = client.hash_search(hash, SearchType::Capa).await.unwrap();
        let exif = client.hash_search(hash, SearchType::Exif).await.unwrap();
        assert_eq!(capa["hits"], 1);
        assert_eq!(exif["hits"], 2);
    }

    #[tokio::test]
    async fn test_list_all_ipfs_datasets() {
        let server = MockServer::start().await;
        let body = serde_json::json!([{"cid": "bafy-one"}, {"cid": "bafy-two"}]);

        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/ipfs/listall"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).list_all_ipfs_datasets().await.unwrap();
        assert_eq!(result, body);
    }

    #[tokio::test]
    async fn test_ipfs_dataset_lookup_sends_cid_verbatim() {
        let server = MockServer::start().await;
        let cid = "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi";

        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/ipfs/search"))
            .and(body_json(serde_json::json!({"cid": cid})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"cid": cid})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).get_public_ipfs_dataset(cid).await.unwrap();
        assert_eq!(result["cid"], cid);
    }

    #[tokio::test]
    async fn test_ipfs_find_uses_sha_hash_key() {
        let server = MockServer::start().await;
        let hash = "d2c1a8a2";

        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/ipfs/find"))
            .and(body_json(serde_json::json!({"sha_hash": hash})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"found": false})))
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server)
            .search_ipfs_dataset_by_hash(hash)
            .await
            .unwrap();
        assert_eq!(result["found"], false);
    }

    #[tokio::test]
    async fn test_ai_prediction_uploads_file() {
        let server = MockServer::start().await;
        let file = sample_file(b"MZ\x90\x00 not actually a PE");

        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/upload"))
            .and(header("x-api-key", "test-key"))
            .and(header_exists("user-agent"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"uuid": "job-1"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).ai_prediction(file.path()).await.unwrap();
        assert_eq!(result["uuid"], "job-1");
    }

    #[tokio::test]
    async fn test_upload_missing_file_issues_no_request() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .capa_extraction("/no/such/file.bin")
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::FileUnreadable { .. }));
    }

    #[tokio::test]
    async fn test_non_success_status_is_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/v1/traceix/status"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server).check_status("abc").await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
        assert!(!err.is_validation());
    }

    #[tokio::test]
    async fn test_full_upload_returns_triple_in_order() {
        let server = MockServer::start().await;
        let file = sample_file(b"sample contents");

        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/upload"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"step": "ai"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/capa"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"step": "capa"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/exif"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"step": "exif"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let result = client_for(&server).full_upload(file.path()).await.unwrap();
        assert_eq!(result.ai_prediction["step"], "ai");
        assert_eq!(result.capa_status["step"], "capa");
        assert_eq!(result.exif_status["step"], "exif");
    }

    #[tokio::test]
    async fn test_full_upload_fails_fast_without_partial_results() {
        let server = MockServer::start().await;
        let file = sample_file(b"sample contents");

        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/upload"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"step": "ai"})),
            )
            .expect(1)
            .mount(&server)
            .await;
        // The second step fails; the third must never be issued.
        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/capa"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/exif"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server).full_upload(file.path()).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }

    #[tokio::test]
    async fn test_user_agent_header_carries_sdk_version() {
        let server = MockServer::start().await;
        let expected_ua = ClientConfig::new("test-key")
            .with_telemetry(false)
            .user_agent();

        Mock::given(method("POST"))
            .and(path("/api/traceix/v1/ipfs/listall"))
            .and(header("user-agent", expected_ua))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .expect(1)
            .mount(&server)
            .await;

        let config = ClientConfig::new("test-key")
            .with_base_url(server.uri())
            .with_telemetry(false);
        let client = TraceixClient::new(config).unwrap();
        client.list_all_ipfs_datasets().await.unwrap();
    }
}
