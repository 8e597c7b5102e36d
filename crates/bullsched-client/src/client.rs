// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! BullScheduler API client implementation.

use std::time::Duration;

use bullsched_core::{Credentials, JobRequest};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, instrument, trace};

use crate::error::{Result, SchedulerError};

/// Path of the credential-verification endpoint.
const VERIFY_AUTH_PATH: &str = "/verify-auth";
/// Path of the job-creation endpoint.
const JOB_PATH: &str = "/job";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Abstraction over job submission, implemented by [`BullSchedulerClient`].
///
/// The workflow node is generic over this trait so its batch semantics can
/// be tested without a live server.
#[async_trait::async_trait]
pub trait JobSubmitter: Send + Sync {
	/// Submits one job-creation request and returns the raw service reply.
	async fn submit_job(&self, request: &JobRequest) -> Result<Value>;
}

/// Builder for constructing a [`BullSchedulerClient`].
pub struct BullSchedulerClientBuilder {
	base_url: Option<String>,
	api_key: Option<String>,
	request_timeout: Duration,
}

impl BullSchedulerClientBuilder {
	/// Creates a new builder with default settings.
	pub fn new() -> Self {
		Self {
			base_url: None,
			api_key: None,
			request_timeout: DEFAULT_REQUEST_TIMEOUT,
		}
	}

	/// Sets the base URL of the BullScheduler server.
	///
	/// Example: `https://your-bullscheduler-server.com`
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());
		self
	}

	/// Sets the API key used as the bearer token on every request.
	pub fn api_key(mut self, key: impl Into<String>) -> Self {
		self.api_key = Some(key.into());
		self
	}

	/// Sets the HTTP request timeout.
	pub fn request_timeout(mut self, timeout: Duration) -> Self {
		self.request_timeout = timeout;
		self
	}

	/// Fills base URL and API key from a credentials object.
	pub fn credentials(self, credentials: &Credentials) -> Self {
		self.base_url(credentials.url.clone())
			.api_key(credentials.api_key.clone())
	}

	/// Builds the client.
	pub fn build(self) -> Result<BullSchedulerClient> {
		let base_url = self.base_url.ok_or(SchedulerError::MissingBaseUrl)?;
		let api_key = self.api_key.ok_or(SchedulerError::MissingApiKey)?;

		// Normalize base URL
		let base_url = base_url.trim_end_matches('/').to_string();

		let http_client = bullsched_common_http::builder()
			.timeout(self.request_timeout)
			.build()
			.map_err(SchedulerError::Network)?;

		Ok(BullSchedulerClient {
			http_client,
			base_url,
			api_key,
		})
	}
}

impl Default for BullSchedulerClientBuilder {
	fn default() -> Self {
		Self::new()
	}
}

/// Client for the BullScheduler REST API.
///
/// # Example
///
/// ```ignore
/// use bullsched_client::BullSchedulerClient;
///
/// let client = BullSchedulerClient::builder()
///     .base_url("https://your-bullscheduler-server.com")
///     .api_key("your_api_key")
///     .build()?;
///
/// client.verify_auth().await?;
/// let reply = client.create_job(&request).await?;
/// ```
#[derive(Debug, Clone)]
pub struct BullSchedulerClient {
	http_client: Client,
	base_url: String,
	api_key: String,
}

impl BullSchedulerClient {
	/// Creates a new builder for constructing a client.
	pub fn builder() -> BullSchedulerClientBuilder {
		BullSchedulerClientBuilder::new()
	}

	/// Creates a client directly from a credentials object.
	pub fn from_credentials(credentials: &Credentials) -> Result<Self> {
		Self::builder().credentials(credentials).build()
	}

	/// Verifies the configured credentials with a single authenticated GET.
	///
	/// Any non-error HTTP status counts as success. The result is not
	/// cached and the call is never retried.
	#[instrument(skip(self), fields(base_url = %self.base_url))]
	pub async fn verify_auth(&self) -> Result<()> {
		let url = format!("{}{}", self.base_url, VERIFY_AUTH_PATH);

		debug!(url = %url, "Verifying BullScheduler credentials");

		let response = self
			.http_client
			.get(&url)
			.header("Authorization", format!("Bearer {}", self.api_key))
			.send()
			.await
			.map_err(map_transport_error)?;

		let status = response.status();
		if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
			error!(status = status.as_u16(), "Credential verification rejected");
			return Err(SchedulerError::Unauthorized);
		}

		if !status.is_success() {
			let status = status.as_u16();
			let message = response.text().await.unwrap_or_default();
			error!(status, message = %message, "Credential verification failed");
			return Err(SchedulerError::ApiError { status, message });
		}

		debug!("Credentials verified");
		Ok(())
	}

	/// Creates one job and returns the service's reply verbatim.
	///
	/// The reply body is passed through without schema enforcement: JSON
	/// bodies are decoded as-is, a non-JSON body is carried as a JSON
	/// string, and an empty body becomes `null`.
	#[instrument(skip(self, request), fields(job_name = %request.name))]
	pub async fn create_job(&self, request: &JobRequest) -> Result<Value> {
		let url = format!("{}{}", self.base_url, JOB_PATH);

		debug!(url = %url, job_name = %request.name, "Creating job");
		trace!(delay_ms = ?request.delay_ms, execute_at = ?request.execute_at, "Job timing");

		let response = self
			.http_client
			.post(&url)
			.header("Authorization", format!("Bearer {}", self.api_key))
			.header("Accept", "application/json")
			.json(request)
			.send()
			.await
			.map_err(map_transport_error)?;

		let status = response.status();
		debug!(status = %status, "Received response from BullScheduler");

		if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
			error!(status = status.as_u16(), "Job creation rejected");
			return Err(SchedulerError::Unauthorized);
		}

		if !status.is_success() {
			let status = status.as_u16();
			let message = response.text().await.unwrap_or_default();
			error!(status, message = %message, "Failed to create job");
			return Err(SchedulerError::ApiError { status, message });
		}

		let body = response.text().await.map_err(map_transport_error)?;
		trace!(body = %body, "Response body");

		if body.trim().is_empty() {
			return Ok(Value::Null);
		}

		// No schema is enforced on the reply; a non-JSON body is passed
		// through as a string.
		Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
	}
}

#[async_trait::async_trait]
impl JobSubmitter for BullSchedulerClient {
	async fn submit_job(&self, request: &JobRequest) -> Result<Value> {
		self.create_job(request).await
	}
}

fn map_transport_error(e: reqwest::Error) -> SchedulerError {
	if e.is_timeout() {
		error!("Request timed out");
		return SchedulerError::Timeout;
	}
	error!(error = %e, "Network error during BullScheduler request");
	SchedulerError::Network(e)
}
