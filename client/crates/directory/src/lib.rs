//! User Directory
//!
//! Typed surface over the user-directory service: employee records,
//! roles and statuses, partial updates, and the search filter. All
//! calls go through the session-aware client, so session renewal never
//! shows up at this layer.

pub mod api;
pub mod dto;
pub mod model;
pub mod role;
pub mod status;

// Re-exports for convenience
pub use api::DirectoryApi;
pub use dto::{EmployeeFilter, EmployeeUpdate, NewEmployee};
pub use model::Employee;
pub use role::UserRole;
pub use status::UserStatus;
