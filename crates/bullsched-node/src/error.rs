// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Error types for node execution.

use bullsched_client::SchedulerError;
use bullsched_core::JobSpecError;
use thiserror::Error;

/// A single item's failure: bad parameters or a failed service call.
#[derive(Debug, Error)]
pub enum ItemError {
	#[error(transparent)]
	Spec(#[from] JobSpecError),

	#[error(transparent)]
	Scheduler(#[from] SchedulerError),
}

/// Batch failure in strict mode: the first failing item aborts execution.
#[derive(Debug, Error)]
#[error("item {item_index}: {source}")]
pub struct ExecuteError {
	/// Index of the input item that failed.
	pub item_index: usize,
	#[source]
	pub source: ItemError,
}
