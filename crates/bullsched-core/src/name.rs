// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! Job name generation for items submitted without a name.

/// Prefix for generated job names.
pub const GENERATED_NAME_PREFIX: &str = "job-";

/// Number of random characters appended after the prefix.
pub const GENERATED_NAME_LEN: usize = 8;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Source of generated job names.
///
/// The production generator is random; tests inject a deterministic one to
/// make request bodies assertable.
pub trait NameGenerator: Send + Sync {
	/// Returns a fresh job name, including the `job-` prefix.
	fn generate(&self) -> String;
}

/// Default generator: `job-` plus 8 characters drawn uniformly from
/// `[A-Za-z0-9]`.
///
/// Uses a non-cryptographic random source; collisions are possible and not
/// checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlnumNameGenerator;

impl NameGenerator for AlnumNameGenerator {
	fn generate(&self) -> String {
		let mut name = String::with_capacity(GENERATED_NAME_PREFIX.len() + GENERATED_NAME_LEN);
		name.push_str(GENERATED_NAME_PREFIX);
		for _ in 0..GENERATED_NAME_LEN {
			name.push(ALPHABET[fastrand::usize(..ALPHABET.len())] as char);
		}
		name
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn is_generated_shape(name: &str) -> bool {
		name.len() == GENERATED_NAME_PREFIX.len() + GENERATED_NAME_LEN
			&& name.starts_with(GENERATED_NAME_PREFIX)
			&& name[GENERATED_NAME_PREFIX.len()..]
				.chars()
				.all(|c| c.is_ascii_alphanumeric())
	}

	#[test]
	fn test_generated_name_shape() {
		let name = AlnumNameGenerator.generate();
		assert!(is_generated_shape(&name), "unexpected name: {name}");
	}

	#[test]
	fn test_generator_is_not_constant() {
		let generator = AlnumNameGenerator;
		let names: Vec<String> = (0..32).map(|_| generator.generate()).collect();
		// 62^8 possibilities; 32 draws colliding on every pair is not credible.
		assert!(names.iter().any(|n| n != &names[0]));
	}

	#[test]
	fn test_many_names_stay_in_alphabet() {
		let generator = AlnumNameGenerator;
		for _ in 0..1000 {
			assert!(is_generated_shape(&generator.generate()));
		}
	}
}
