//! Lecture update builder.

use serde::{Deserialize, Serialize};

use crate::entities::Lecture;
use crate::enums::LectureLevel;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LectureUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<LectureLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<u32>,
}

impl LectureUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.program_id.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.category.is_none()
            && self.level.is_none()
            && self.order.is_none()
    }

    pub fn apply(&self, lecture: &mut Lecture) {
        super::set(&mut lecture.program_id, self.program_id.as_ref());
        super::set(&mut lecture.title, self.title.as_ref());
        super::set(&mut lecture.content, self.content.as_ref());
        super::set(&mut lecture.category, self.category.as_ref());
        super::set(&mut lecture.level, self.level.as_ref());
        super::set(&mut lecture.order, self.order.as_ref());
    }
}

pub struct LectureUpdateBuilder(LectureUpdate);

impl LectureUpdateBuilder {
    pub fn new() -> Self {
        Self(LectureUpdate::default())
    }

    pub fn program_id(mut self, val: u64) -> Self {
        self.0.program_id = Some(val);
        self
    }

    pub fn title(mut self, val: impl Into<String>) -> Self {
        self.0.title = Some(val.into());
        self
    }

    pub fn content(mut self, val: impl Into<String>) -> Self {
        self.0.content = Some(val.into());
        self
    }

    pub fn category(mut self, val: impl Into<String>) -> Self {
        self.0.category = Some(val.into());
        self
    }

    pub fn level(mut self, val: LectureLevel) -> Self {
        self.0.level = Some(val);
        self
    }

    pub fn order(mut self, val: u32) -> Self {
        self.0.order = Some(val);
        self
    }

    pub fn build(self) -> LectureUpdate {
        self.0
    }
}

impl Default for LectureUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
