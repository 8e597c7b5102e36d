// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! BullScheduler job-submission node.
//!
//! Maps each input item of a workflow execution to exactly one job-creation
//! request against a BullScheduler server and one output record, in input
//! order. Per-item failures either abort the batch or, in failure-tolerant
//! mode, become error records while processing continues.

mod descriptor;
mod error;
mod execute;

pub use descriptor::{node_descriptor, NodeDescriptor, NodeProperty, PropertyKind};
pub use error::{ExecuteError, ItemError};
pub use execute::{execute, submit_item, FailureMode, JobSubmissionNode};
