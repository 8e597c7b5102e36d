// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Host-facing declaration of the node: identity, credential requirement,
//! and the property list the host renders as the node's configuration form.

use serde::Serialize;

/// Kind of a configurable node property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PropertyKind {
	String,
	DateTime,
	/// A string edited as JSON in the host's code editor.
	Json,
	Number,
	/// A named group of optional sub-properties.
	Collection,
}

/// One configurable property of the node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeProperty {
	pub display_name: &'static str,
	pub name: &'static str,
	pub kind: PropertyKind,
	pub required: bool,
	pub default: &'static str,
	#[serde(skip_serializing_if = "str::is_empty")]
	pub placeholder: &'static str,
	pub description: &'static str,
	/// Sub-properties, only populated for `Collection` properties.
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub options: Vec<NodeProperty>,
}

/// Host-facing declaration of the job-submission node.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDescriptor {
	pub display_name: &'static str,
	pub name: &'static str,
	pub group: &'static str,
	pub version: u32,
	pub subtitle: &'static str,
	pub description: &'static str,
	/// Name of the required credential type.
	pub credential: &'static str,
	pub properties: Vec<NodeProperty>,
}

const DEFAULT_DATA: &str = "{\n  \"userId\": 123,\n  \"action\": \"send-reminder\"\n}";

/// Returns the descriptor for the BullScheduler node.
pub fn node_descriptor() -> NodeDescriptor {
	NodeDescriptor {
		display_name: "BullScheduler",
		name: "bullScheduler",
		group: "transform",
		version: 1,
		subtitle: "Schedule jobs",
		description: "Schedule jobs to execute at specific times or after delays with webhook delivery",
		credential: "bullSchedulerApi",
		properties: vec![
			NodeProperty {
				display_name: "Name",
				name: "jobName",
				kind: PropertyKind::String,
				required: false,
				default: "",
				placeholder: "my-job (auto-generated if empty)",
				description: "Job identifier. If empty, a random string will be generated.",
				options: vec![],
			},
			NodeProperty {
				display_name: "Execute At",
				name: "executeAt",
				kind: PropertyKind::DateTime,
				required: false,
				default: "",
				placeholder: "",
				description: "Schedule job to execute at a specific date and time (ISO format)",
				options: vec![],
			},
			NodeProperty {
				display_name: "Data",
				name: "data",
				kind: PropertyKind::Json,
				required: true,
				default: DEFAULT_DATA,
				placeholder: "",
				description: "Job payload data as JSON that will be sent to the webhook when the job executes",
				options: vec![],
			},
			NodeProperty {
				display_name: "Advanced Options",
				name: "advancedOptions",
				kind: PropertyKind::Collection,
				required: false,
				default: "{}",
				placeholder: "Add Option",
				description: "",
				options: vec![
					NodeProperty {
						display_name: "Delay in Ms",
						name: "delayMs",
						kind: PropertyKind::Number,
						required: false,
						default: "0",
						placeholder: "",
						description: "Execute job after delay in milliseconds (alternative to Execute At)",
						options: vec![],
					},
					NodeProperty {
						display_name: "Webhook URL",
						name: "webhookUrl",
						kind: PropertyKind::String,
						required: false,
						default: "",
						placeholder: "https://your-app.com/webhook",
						description: "Override the default webhook URL for this specific job",
						options: vec![],
					},
				],
			},
		],
	}
}
