// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Shared HTTP utilities for the BullScheduler SDK.
//!
//! This crate provides a pre-configured HTTP client with a consistent
//! User-Agent header, shared by every crate in the workspace that talks to
//! the BullScheduler service.

mod client;

pub use client::{builder, user_agent};
