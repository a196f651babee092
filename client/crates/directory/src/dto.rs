//! Directory Payloads
//!
//! Request bodies and the search filter. Unset optional fields are
//! omitted from the JSON entirely; the service treats absent and
//! present-but-null differently for partial updates.

use serde::Serialize;

use crate::role::UserRole;
use crate::status::UserStatus;

/// Payload for registering a new employee record
#[derive(Debug, Clone, Serialize)]
pub struct NewEmployee {
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_link: Option<String>,
    pub post: String,
    pub team: String,
    pub role: UserRole,
    pub status: UserStatus,
}

/// Partial profile update; only set fields reach the wire. Email is
/// fixed at registration and cannot be changed here.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmployeeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

/// Directory search; every criterion is optional, paging is not
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patronymic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    pub limit: u32,
    pub offset: u32,
}

impl EmployeeFilter {
    /// Page size the directory service assumes when none is given
    pub const DEFAULT_LIMIT: u32 = 100;
}

impl Default for EmployeeFilter {
    fn default() -> Self {
        Self {
            name: None,
            surname: None,
            patronymic: None,
            email: None,
            phone: None,
            telegram_link: None,
            post: None,
            team: None,
            role: None,
            status: None,
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}
