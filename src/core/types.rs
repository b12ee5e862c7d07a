//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A vault key name (e.g., api_token).
pub type SecretKey = String;

/// An encrypted vault value (age-armored ciphertext).
pub type EncryptedValue = String;

/// A repository name, unique within the catalog.
pub type RepoName = String;

/// A git branch name.
pub type BranchName = String;
