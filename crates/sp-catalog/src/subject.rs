//! Catalog model types: `Subject` and `Chapter`.

use chrono::NaiveDate;

use sp_core::{ChapterId, ColorTag, Priority, SubjectId};

// ── Chapter ───────────────────────────────────────────────────────────────────

/// A unit of material within a subject.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chapter {
    pub id: ChapterId,
    pub name: String,
    pub priority: Priority,
    /// Estimated effort.  Finite and `>= 0`; zero schedules nothing.
    pub estimated_hours: f64,
}

// ── Subject ───────────────────────────────────────────────────────────────────

/// A study topic with an exam date and an ordered list of chapters.
///
/// Subjects are never renamed in place; the catalog only adds and removes
/// them.  Chapters keep insertion order.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    /// `None` is tolerated by the scheduler, which sorts it ahead of every
    /// dated subject.  The catalog itself never creates such a subject.
    pub exam_date: Option<NaiveDate>,
    pub color: ColorTag,
    chapters: Vec<Chapter>,
}

impl Subject {
    pub fn new(
        id: SubjectId,
        name: impl Into<String>,
        exam_date: Option<NaiveDate>,
        color: ColorTag,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            exam_date,
            color,
            chapters: Vec::new(),
        }
    }

    /// Builder-style variant of [`Subject::push_chapter`].
    pub fn with_chapter(mut self, chapter: Chapter) -> Self {
        self.chapters.push(chapter);
        self
    }

    pub fn push_chapter(&mut self, chapter: Chapter) {
        self.chapters.push(chapter);
    }

    /// Chapters in insertion order.
    pub fn chapters(&self) -> &[Chapter] {
        &self.chapters
    }

    pub fn chapter(&self, id: ChapterId) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    /// Remove and return the chapter with `id`, if present.
    pub(crate) fn take_chapter(&mut self, id: ChapterId) -> Option<Chapter> {
        let idx = self.chapters.iter().position(|c| c.id == id)?;
        Some(self.chapters.remove(idx))
    }

    /// Sum of estimated hours over all chapters.
    pub fn total_hours(&self) -> f64 {
        self.chapters.iter().map(|c| c.estimated_hours).sum()
    }
}
