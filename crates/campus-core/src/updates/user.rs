//! User update builder.

use serde::{Deserialize, Serialize};

use crate::entities::User;
use crate::enums::UserRole;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<UserRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_cohort: Option<String>,
}

impl UserUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.email.is_none()
            && self.role.is_none()
            && self.is_admin.is_none()
            && self.master_cohort.is_none()
    }

    pub fn apply(&self, user: &mut User) {
        super::set(&mut user.email, self.email.as_ref());
        super::set(&mut user.role, self.role.as_ref());
        super::set(&mut user.is_admin, self.is_admin.as_ref());
        super::set(&mut user.master_cohort, self.master_cohort.as_ref());
    }
}

pub struct UserUpdateBuilder(UserUpdate);

impl UserUpdateBuilder {
    pub fn new() -> Self {
        Self(UserUpdate::default())
    }

    pub fn email(mut self, val: impl Into<String>) -> Self {
        self.0.email = Some(val.into());
        self
    }

    pub fn role(mut self, val: UserRole) -> Self {
        self.0.role = Some(val);
        self
    }

    pub fn is_admin(mut self, val: bool) -> Self {
        self.0.is_admin = Some(val);
        self
    }

    pub fn master_cohort(mut self, val: impl Into<String>) -> Self {
        self.0.master_cohort = Some(val.into());
        self
    }

    pub fn build(self) -> UserUpdate {
        self.0
    }
}

impl Default for UserUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
