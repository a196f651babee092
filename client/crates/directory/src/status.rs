use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability shown next to an employee in the directory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Busy,
    #[default]
    Inactive,
}

impl UserStatus {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserStatus::*;
        match self {
            Active => "active",
            Busy => "busy",
            Inactive => "inactive",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        use UserStatus::*;
        match code {
            "active" => Some(Active),
            "busy" => Some(Busy),
            "inactive" => Some(Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
