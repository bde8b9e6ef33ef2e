//! Credential source trait.
//!
//! Defines the read-only interface for looking up stored API credentials.

/// Key under which the text generation API credential is stored.
pub const OPENAI_API_KEY_KEY: &str = "openai_api_key";

/// Read-only lookup of stored credentials.
///
/// # Security Note
///
/// Implementations should ensure that:
/// - Credential values are never logged or exposed in error messages
/// - Blank values are reported as absent
pub trait CredentialSource: Send + Sync {
    /// Returns the credential stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Option<String>;
}
