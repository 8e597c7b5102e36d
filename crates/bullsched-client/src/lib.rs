// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! BullScheduler REST API client.
//!
//! This crate provides a typed async client for the two endpoints of the
//! BullScheduler service: credential verification (`GET /verify-auth`) and
//! job creation (`POST /job`). The service owns all timing, persistence,
//! and webhook delivery; this client only places requests.

mod client;
mod error;

pub use client::{BullSchedulerClient, BullSchedulerClientBuilder, JobSubmitter};
pub use error::{Result, SchedulerError};
