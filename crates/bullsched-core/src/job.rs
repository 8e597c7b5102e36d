// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Job request and output record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a job-creation request, as posted to `POST {base}/job`.
///
/// Exactly one of `delay_ms` / `execute_at` is carried; [`crate::resolve`]
/// enforces the precedence between them. Absent optionals are omitted from
/// the serialized body entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRequest {
	/// Job identifier. Never empty; generated when the caller left it blank.
	pub name: String,
	/// Arbitrary JSON payload delivered to the webhook when the job fires.
	pub data: Value,
	/// Absolute execution time (ISO-8601), mutually exclusive with `delay_ms`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub execute_at: Option<String>,
	/// Relative delay in milliseconds, always > 0 when present.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub delay_ms: Option<u64>,
	/// Per-job override of the service's default delivery target.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub webhook_url: Option<String>,
}

/// One output record per input item, order-preserving.
///
/// Success records carry the raw service reply and the submission timestamp;
/// failure records carry the error message and `scheduled: false`. In both
/// cases `item_index` points back at the input item that produced the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobRecord {
	pub job_name: String,
	pub scheduled: bool,
	/// Raw service reply, passed through verbatim. `None` on failure.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub response: Option<Value>,
	/// Human-readable failure message. `None` on success.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	/// Local wall-clock time of the submission call, not the service's clock.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub scheduled_at: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub execute_at: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub delay_ms: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<Value>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub webhook_url: Option<String>,
	/// Index of the input item this record pairs with.
	pub item_index: usize,
}

impl JobRecord {
	/// Builds the success record for a submitted job.
	pub fn success(
		item_index: usize,
		request: &JobRequest,
		response: Value,
		scheduled_at: DateTime<Utc>,
	) -> Self {
		Self {
			job_name: request.name.clone(),
			scheduled: true,
			response: Some(response),
			error: None,
			scheduled_at: Some(scheduled_at.to_rfc3339()),
			execute_at: request.execute_at.clone(),
			delay_ms: request.delay_ms,
			data: Some(request.data.clone()),
			webhook_url: request.webhook_url.clone(),
			item_index,
		}
	}

	/// Builds the failure record for an item, carrying a best-effort name.
	pub fn failure(item_index: usize, job_name: impl Into<String>, error: impl Into<String>) -> Self {
		Self {
			job_name: job_name.into(),
			scheduled: false,
			response: None,
			error: Some(error.into()),
			scheduled_at: None,
			execute_at: None,
			delay_ms: None,
			data: None,
			webhook_url: None,
			item_index,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_request_omits_absent_optionals() {
		let request = JobRequest {
			name: "nightly".to_string(),
			data: json!({"userId": 123}),
			execute_at: None,
			delay_ms: Some(5000),
			webhook_url: None,
		};

		let body = serde_json::to_value(&request).unwrap();
		assert_eq!(body["name"], "nightly");
		assert_eq!(body["delayMs"], 5000);
		assert!(body.get("executeAt").is_none());
		assert!(body.get("webhookUrl").is_none());
	}

	#[test]
	fn test_request_serializes_camel_case() {
		let request = JobRequest {
			name: "n".to_string(),
			data: json!(null),
			execute_at: Some("2026-01-01T00:00:00Z".to_string()),
			delay_ms: None,
			webhook_url: Some("https://example.com/hook".to_string()),
		};

		let body = serde_json::to_value(&request).unwrap();
		assert_eq!(body["executeAt"], "2026-01-01T00:00:00Z");
		assert_eq!(body["webhookUrl"], "https://example.com/hook");
	}

	#[test]
	fn test_success_record_echoes_request_fields() {
		let request = JobRequest {
			name: "job-abc12345".to_string(),
			data: json!({"action": "send-reminder"}),
			execute_at: None,
			delay_ms: Some(1000),
			webhook_url: Some("https://example.com/hook".to_string()),
		};

		let record = JobRecord::success(2, &request, json!({"id": "j1"}), Utc::now());
		assert_eq!(record.job_name, "job-abc12345");
		assert!(record.scheduled);
		assert_eq!(record.response, Some(json!({"id": "j1"})));
		assert_eq!(record.delay_ms, Some(1000));
		assert_eq!(record.execute_at, None);
		assert_eq!(record.data, Some(json!({"action": "send-reminder"})));
		assert_eq!(record.item_index, 2);
		assert!(record.scheduled_at.is_some());
		assert!(record.error.is_none());
	}

	#[test]
	fn test_failure_record_has_no_response() {
		let record = JobRecord::failure(0, "job-xyz", "boom");
		assert!(!record.scheduled);
		assert_eq!(record.error.as_deref(), Some("boom"));
		assert!(record.response.is_none());
		assert!(record.scheduled_at.is_none());
	}
}
