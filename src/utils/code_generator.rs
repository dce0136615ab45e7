//! Shortcode generation and validation utilities.
//!
//! Generated codes only need to be collision resistant, not unguessable, so
//! they are drawn from the thread-local RNG rather than the OS entropy source.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

use crate::domain::error::StoreError;

/// Length of generated shortcodes.
pub const GENERATED_CODE_LENGTH: usize = 8;

/// Compiled regex for requested shortcode validation.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{4,16}$").expect("shortcode regex is valid"));

/// Source of candidate shortcodes.
///
/// The store retries on collision, so implementations may return codes that
/// are already taken.
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Draws [`GENERATED_CODE_LENGTH`] random ASCII alphanumeric characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        generate_code()
    }
}

/// Generates a random alphanumeric shortcode.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 8);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Validates a caller-requested shortcode.
///
/// # Rules
///
/// - Length: 4-16 characters
/// - Allowed characters: ASCII letters and digits, case preserved
///
/// # Errors
///
/// Returns [`StoreError::InvalidShortcode`] if the code breaks either rule.
pub fn validate_shortcode(code: &str) -> Result<(), StoreError> {
    if SHORTCODE_REGEX.is_match(code) {
        Ok(())
    } else {
        Err(StoreError::InvalidShortcode {
            code: code.to_string(),
        })
    }
}
