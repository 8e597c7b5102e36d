// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! BullScheduler API credentials and their host-facing descriptor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Credentials for one BullScheduler server.
///
/// Supplied by the host's credential store once per execution; never
/// persisted by this code.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
	/// Base URL of the server, without a trailing slash.
	pub url: String,
	/// Bearer token for every outbound call.
	pub api_key: String,
}

impl Credentials {
	/// Creates credentials, normalizing a trailing slash off the base URL.
	pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
		let url = url.into();
		Self {
			url: url.trim_end_matches('/').to_string(),
			api_key: api_key.into(),
		}
	}

	/// Value for the `Authorization` header.
	pub fn bearer_header(&self) -> String {
		format!("Bearer {}", self.api_key)
	}
}

impl fmt::Debug for Credentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Credentials")
			.field("url", &self.url)
			.field("api_key", &"[redacted]")
			.finish()
	}
}

/// One configuration field of the credential descriptor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialField {
	pub name: &'static str,
	pub display_name: &'static str,
	pub required: bool,
	/// Secret fields are masked by the host's credential editor.
	pub secret: bool,
	pub default: &'static str,
}

/// Host-facing declaration of the credential type.
///
/// The authentication contract is fixed: every outbound call carries
/// `Authorization: Bearer <apiKey>`, and connectivity is verified with a
/// single authenticated GET against `test_path` on the configured base URL.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDescriptor {
	pub name: &'static str,
	pub display_name: &'static str,
	pub documentation_url: &'static str,
	/// Path of the connectivity-test request, relative to the base URL.
	pub test_path: &'static str,
	pub fields: Vec<CredentialField>,
}

/// Returns the descriptor for the BullScheduler API credential type.
pub fn credential_descriptor() -> CredentialDescriptor {
	CredentialDescriptor {
		name: "bullSchedulerApi",
		display_name: "BullScheduler API",
		documentation_url: "https://github.com/BrOrlandi/BullScheduler",
		test_path: "/verify-auth",
		fields: vec![
			CredentialField {
				name: "url",
				display_name: "Server URL",
				required: true,
				secret: false,
				default: "https://your-bullscheduler-server.com",
			},
			CredentialField {
				name: "apiKey",
				display_name: "API Key",
				required: true,
				secret: true,
				default: "",
			},
		],
	}
}
