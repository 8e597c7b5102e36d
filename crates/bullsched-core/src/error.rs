// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for job parameter resolution.

use thiserror::Error;

/// Result type for parameter resolution.
pub type Result<T> = std::result::Result<T, JobSpecError>;

/// Errors that can occur while resolving item parameters into a job request.
///
/// Both variants are item-scoped: they fail the current item without saying
/// anything about the rest of the batch.
#[derive(Debug, Error)]
pub enum JobSpecError {
	/// The Data field did not parse as JSON. Carries the parser's message.
	#[error("Invalid JSON in Data field: {0}")]
	InvalidData(String),

	/// Neither an execute-at time nor a positive delay was supplied.
	#[error("Either \"Execute At\" date or \"Delay in Ms\" must be provided")]
	MissingSchedule,
}
