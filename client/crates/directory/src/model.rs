//! Employee Record
//!
//! The read model returned by every directory endpoint. Field names
//! match the service's JSON exactly.

use kernel::id::UserId;
use serde::{Deserialize, Serialize};

use crate::role::UserRole;
use crate::status::UserStatus;

/// One employee as the directory service reports them
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: UserId,
    pub name: String,
    pub surname: String,
    pub patronymic: String,
    pub email: String,
    pub phone: String,
    pub telegram_link: Option<String>,
    pub post: String,
    pub team: String,
    pub role: UserRole,
    pub status: UserStatus,
}

impl Employee {
    /// Family name first, the way the portal displays people
    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.surname, self.name, self.patronymic)
    }

    /// Whether this employee may create or edit knowledge articles
    pub fn can_manage_articles(&self) -> bool {
        self.role.can_manage_articles()
    }
}
