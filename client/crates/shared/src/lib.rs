//! Shared Kernel - Domain-crossing minimal core
//!
//! The "smallest core" of vocabulary shared by every portal-client crate:
//! - Common error types and result aliases
//! - Typed record IDs used by the directory and knowledge surfaces
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
