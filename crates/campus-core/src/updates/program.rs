//! Program update builder.

use serde::{Deserialize, Serialize};

use crate::entities::Program;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_common_course: Option<bool>,
}

impl ProgramUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slug.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.has_common_course.is_none()
    }

    pub fn apply(&self, program: &mut Program) {
        super::set(&mut program.slug, self.slug.as_ref());
        super::set(&mut program.title, self.title.as_ref());
        super::set(&mut program.description, self.description.as_ref());
        super::set(&mut program.has_common_course, self.has_common_course.as_ref());
    }
}

pub struct ProgramUpdateBuilder(ProgramUpdate);

impl ProgramUpdateBuilder {
    pub fn new() -> Self {
        Self(ProgramUpdate::default())
    }

    pub fn slug(mut self, val: impl Into<String>) -> Self {
        self.0.slug = Some(val.into());
        self
    }

    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    pub fn description(mut self, val: impl Into<String>) -> Self {
        self.0.description = Some(val.into());
        self
    }

    pub fn has_common_course(mut self, val: bool) -> Self {
        self.0.has_common_course = Some(val);
        self
    }

    pub fn build(self) -> ProgramUpdate {
        self.0
    }
}

impl Default for ProgramUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
