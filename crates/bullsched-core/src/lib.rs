// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Core types for the BullScheduler SDK.
//!
//! This crate holds the wire and domain types shared by the client and the
//! workflow node: the job-creation request body, per-item output records,
//! credential handling, parameter resolution, and job name generation.
//! It performs no I/O.

mod credentials;
mod error;
mod job;
mod name;
mod params;

pub use credentials::{credential_descriptor, CredentialDescriptor, CredentialField, Credentials};
pub use error::{JobSpecError, Result};
pub use job::{JobRecord, JobRequest};
pub use name::{AlnumNameGenerator, NameGenerator, GENERATED_NAME_LEN, GENERATED_NAME_PREFIX};
pub use params::{resolve, AdvancedOptions, JobParams};
