// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Resolution of raw item parameters into a job-creation request.

use serde::{Deserialize, Serialize};

use crate::error::{JobSpecError, Result};
use crate::job::JobRequest;
use crate::name::NameGenerator;

/// Raw, item-scoped parameters as supplied by the host.
///
/// Field names mirror the node's property names so a host can hand the
/// resolved parameter object over as JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobParams {
	/// Job identifier; blank means "generate one".
	#[serde(default)]
	pub job_name: String,
	/// Absolute execution time (ISO-8601); empty means "not set".
	#[serde(default)]
	pub execute_at: String,
	/// Job payload as a raw JSON string, parsed during resolution.
	#[serde(default)]
	pub data: String,
	#[serde(default)]
	pub advanced_options: AdvancedOptions,
}

/// The node's "Advanced Options" collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedOptions {
	/// Execute after this many milliseconds; takes precedence over
	/// `execute_at` when > 0.
	#[serde(default)]
	pub delay_ms: Option<u64>,
	/// Per-job delivery target override.
	#[serde(default)]
	pub webhook_url: Option<String>,
}

/// Resolves item parameters into the request body for one job.
///
/// Resolution order matches the node's contract:
/// 1. a blank name is replaced by a generated one;
/// 2. the payload string must parse as JSON, regardless of timing settings;
/// 3. a positive `delay_ms` wins over `execute_at`; with neither set the
///    item fails;
/// 4. a webhook override is trimmed and dropped entirely when blank.
pub fn resolve(params: &JobParams, names: &dyn NameGenerator) -> Result<JobRequest> {
	let name = if params.job_name.trim().is_empty() {
		names.generate()
	} else {
		params.job_name.clone()
	};

	let data = serde_json::from_str(&params.data)
		.map_err(|e| JobSpecError::InvalidData(e.to_string()))?;

	let (delay_ms, execute_at) = match params.advanced_options.delay_ms {
		Some(ms) if ms > 0 => (Some(ms), None),
		_ if !params.execute_at.is_empty() => (None, Some(params.execute_at.clone())),
		_ => return Err(JobSpecError::MissingSchedule),
	};

	let webhook_url = params
		.advanced_options
		.webhook_url
		.as_deref()
		.map(str::trim)
		.filter(|url| !url.is_empty())
		.map(str::to_string);

	Ok(JobRequest {
		name,
		data,
		execute_at,
		delay_ms,
		webhook_url,
	})
}


#[cfg(test)]
mod proptests {
	use super::*;
	use crate::name::AlnumNameGenerator;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn prop_positive_delay_always_wins(delay in 1u64..u64::MAX, execute_at in ".*") {
			let p = JobParams {
				job_name: "j".to_string(),
				execute_at,
				data: "{}".to_string(),
				advanced_options: AdvancedOptions {
					delay_ms: Some(delay),
					webhook_url: None,
				},
			};
			let request = resolve(&p, &AlnumNameGenerator).unwrap();
			prop_assert_eq!(request.delay_ms, Some(delay));
			prop_assert_eq!(request.execute_at, None);
		}

		#[test]
		fn prop_generated_names_match_contract(pad in proptest::collection::vec(prop_oneof![Just(' '), Just('\t')], 0..8)) {
			let blank: String = pad.into_iter().collect();
			let p = JobParams {
				job_name: blank,
				execute_at: "2026-01-01T00:00:00Z".to_string(),
				data: "{}".to_string(),
				advanced_options: AdvancedOptions::default(),
			};
			let request = resolve(&p, &AlnumNameGenerator).unwrap();
			prop_assert!(request.name.starts_with("job-"));
			prop_assert_eq!(request.name.len(), "job-".len() + 8);
			prop_assert!(request.name["job-".len()..].chars().all(|c| c.is_ascii_alphanumeric()));
		}
	}
}
