use serde::{Deserialize, Serialize};
use std::fmt;

/// Directory role, `"admin"`/`"editor"`/`"user"`/`"guest"` on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Editor,
    User,
    // Guest: unauthenticated or not-yet-registered visitor
    #[default]
    Guest,
}

impl UserRole {
    #[inline]
    pub const fn code(&self) -> &'static str {
        use UserRole::*;
        match self {
            Admin => "admin",
            Editor => "editor",
            User => "user",
            Guest => "guest",
        }
    }

    /// Knowledge-base mutations are limited to these roles
    #[inline]
    pub const fn can_manage_articles(&self) -> bool {
        use UserRole::*;
        matches!(self, Admin | Editor)
    }

    #[inline]
    pub const fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        use UserRole::*;
        match code {
            "admin" => Some(Admin),
            "editor" => Some(Editor),
            "user" => Some(User),
            "guest" => Some(Guest),
            _ => None,
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_from_code() {
        assert_eq!(UserRole::from_code("admin"), Some(UserRole::Admin));
        assert_eq!(UserRole::from_code("editor"), Some(UserRole::Editor));
        assert_eq!(UserRole::from_code("user"), Some(UserRole::User));
        assert_eq!(UserRole::from_code("guest"), Some(UserRole::Guest));
        assert_eq!(UserRole::from_code("superuser"), None);
    }

    #[test]
    fn test_user_role_display() {
        assert_eq!(UserRole::Admin.to_string(), "admin");
        assert_eq!(UserRole::Editor.to_string(), "editor");
        assert_eq!(UserRole::User.to_string(), "user");
        assert_eq!(UserRole::Guest.to_string(), "guest");
    }

    #[test]
    fn test_user_role_checks() {
        assert!(UserRole::Admin.can_manage_articles());
        assert!(UserRole::Editor.can_manage_articles());
        assert!(!UserRole::User.can_manage_articles());
        assert!(!UserRole::Guest.can_manage_articles());
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::Editor.is_admin());
    }

    #[test]
    fn test_user_role_wire_format() {
        let json = serde_json::to_string(&UserRole::Editor).unwrap();
        assert_eq!(json, "\"editor\"");
        let role: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert_eq!(role, UserRole::Admin);
    }
}
