// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Per-item batch execution of job submissions.

use bullsched_client::JobSubmitter;
use bullsched_core::{resolve, AlnumNameGenerator, JobParams, JobRecord, NameGenerator};
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::error::{ExecuteError, ItemError};

/// What to do when an item fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
	/// First failure aborts the batch; remaining items are not processed.
	Strict,
	/// Failures become error records and processing continues.
	Tolerant,
}

/// Submits one item: resolve its parameters, place one request, build the
/// output record.
///
/// Items that fail resolution never reach the network. `scheduled_at` in the
/// record is local wall-clock time, not the service's clock.
pub async fn submit_item<S: JobSubmitter + ?Sized>(
	submitter: &S,
	item_index: usize,
	item: &JobParams,
	names: &dyn NameGenerator,
) -> Result<JobRecord, ItemError> {
	let request = resolve(item, names)?;

	debug!(
		item_index,
		job_name = %request.name,
		delay_ms = ?request.delay_ms,
		execute_at = ?request.execute_at,
		"Submitting job"
	);

	let response = submitter.submit_job(&request).await?;

	Ok(JobRecord::success(item_index, &request, response, Utc::now()))
}

/// The job-submission node.
///
/// Holds the name generator so a host (or a test) can swap in a
/// deterministic one; everything else is per-execution state passed into
/// [`JobSubmissionNode::execute`].
pub struct JobSubmissionNode {
	names: Box<dyn NameGenerator>,
}

impl JobSubmissionNode {
	/// Creates a node with the default random name generator.
	pub fn new() -> Self {
		Self {
			names: Box::new(AlnumNameGenerator),
		}
	}

	/// Creates a node with a custom name generator.
	pub fn with_name_generator(names: Box<dyn NameGenerator>) -> Self {
		Self { names }
	}

	/// Executes the batch: one request and one output record per item,
	/// strictly sequential and order-preserving.
	///
	/// In [`FailureMode::Tolerant`] a failing item produces an error record
	/// carrying its best-effort job name and `scheduled: false`, and the
	/// next item is processed; in [`FailureMode::Strict`] the first failure
	/// aborts the remaining items.
	pub async fn execute<S: JobSubmitter + ?Sized>(
		&self,
		submitter: &S,
		items: &[JobParams],
		mode: FailureMode,
	) -> Result<Vec<JobRecord>, ExecuteError> {
		let mut records = Vec::with_capacity(items.len());

		for (item_index, item) in items.iter().enumerate() {
			match submit_item(submitter, item_index, item, self.names.as_ref()).await {
				Ok(record) => {
					info!(item_index, job_name = %record.job_name, "Job scheduled");
					records.push(record);
				}
				Err(source) => match mode {
					FailureMode::Strict => {
						return Err(ExecuteError { item_index, source });
					}
					FailureMode::Tolerant => {
						warn!(item_index, error = %source, "Item failed, continuing");
						// Best-effort name: the raw parameter when non-empty,
						// even if it is all whitespace (a whitespace-only name
						// still regenerates for the request itself).
						let job_name = if item.job_name.is_empty() {
							self.names.generate()
						} else {
							item.job_name.clone()
						};
						records.push(JobRecord::failure(item_index, job_name, source.to_string()));
					}
				},
			}
		}

		Ok(records)
	}
}

impl Default for JobSubmissionNode {
	fn default() -> Self {
		Self::new()
	}
}

/// Executes a batch with the default name generator.
pub async fn execute<S: JobSubmitter + ?Sized>(
	submitter: &S,
	items: &[JobParams],
	mode: FailureMode,
) -> Result<Vec<JobRecord>, ExecuteError> {
	JobSubmissionNode::new().execute(submitter, items, mode).await
}
