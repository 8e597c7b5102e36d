// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for the BullScheduler API client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors that can occur when talking to the BullScheduler service.
#[derive(Debug, Error)]
pub enum SchedulerError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request timed out.
	#[error("Request timed out")]
	Timeout,

	/// Invalid API key (401/403 from the service).
	#[error("Invalid API key")]
	Unauthorized,

	/// The service returned a non-success status.
	#[error("BullScheduler API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// Builder was not given a base URL.
	#[error("Base URL is required")]
	MissingBaseUrl,

	/// Builder was not given an API key.
	#[error("API key is required")]
	MissingApiKey,
}
