//! Storage key generation and file name validation for uploaded photos.

use crate::error::AppError;
use base64::Engine as _;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of random bytes before base64 encoding.
const PREFIX_LENGTH_BYTES: usize = 9;

/// Length of the encoded key prefix.
const PREFIX_LENGTH: usize = 12;

/// Photo formats accepted by the image store.
const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp"];

static FILE_NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._-]{1,128}$").expect("valid file name regex"));

/// Generates a random key prefix.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding, producing a 12-character prefix.
///
/// # Panics
///
/// Panics if the system random number generator fails.
pub fn generate_prefix() -> String {
    let mut buffer = [0u8; PREFIX_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Builds a fresh storage key for a validated file name.
///
/// Two uploads with the same file name get different keys.
pub fn image_key(file_name: &str) -> String {
    format!("{}-{}", generate_prefix(), file_name)
}

/// Validates a client-supplied photo file name.
///
/// # Rules
///
/// - 1-128 characters from `A-Z a-z 0-9 . _ -`
/// - Must not start with a dot
/// - Extension must be one of png, jpg, jpeg, gif, webp (case-insensitive)
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_file_name(file_name: &str) -> Result<(), AppError> {
    if !FILE_NAME_REGEX.is_match(file_name) {
        return Err(AppError::bad_request(
            "File name may only contain letters, digits, '.', '_' and '-' (max 128)",
            json!({ "file_name": file_name }),
        ));
    }

    if file_name.starts_with('.') {
        return Err(AppError::bad_request(
            "File name cannot start with a dot",
            json!({ "file_name": file_name }),
        ));
    }

    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match extension {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(AppError::bad_request(
            "Unsupported image type",
            json!({ "file_name": file_name, "allowed": ALLOWED_EXTENSIONS }),
        )),
    }
}

/// Validates a key as produced by [`image_key`].
///
/// A key is a 12-character URL-safe prefix, a `-`, and a file name that
/// passes [`validate_file_name`]. Anything else cannot name a stored photo.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for a malformed key.
pub fn validate_image_key(key: &str) -> Result<(), AppError> {
    let prefix_ok = key
        .get(..PREFIX_LENGTH)
        .is_some_and(|prefix| {
            prefix
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
        });

    let file_name = match key.as_bytes().get(PREFIX_LENGTH) {
        Some(b'-') if prefix_ok => &key[PREFIX_LENGTH + 1..],
        _ => {
            return Err(AppError::bad_request(
                "Malformed image key",
                json!({ "image": key }),
            ));
        }
    };

    validate_file_name(file_name)
}
