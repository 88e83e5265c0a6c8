use chrono::NaiveDate;

use sp_catalog::{Chapter, Subject};
use sp_core::{ChapterId, ColorTag, SubjectId};

/// One slice of study time toward a chapter on a given day.
///
/// Sessions are plain values; regenerating a plan replaces them wholesale.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StudySession {
    pub date: NaiveDate,
    pub subject_id: SubjectId,
    pub chapter_id: ChapterId,
    pub subject_name: String,
    pub chapter_name: String,
    pub hours: f64,
    pub color: ColorTag,
}

impl StudySession {
    pub(crate) fn new(subject: &Subject, chapter: &Chapter, date: NaiveDate, hours: f64) -> Self {
        Self {
            date,
            subject_id: subject.id,
            chapter_id: chapter.id,
            subject_name: subject.name.clone(),
            chapter_name: chapter.name.clone(),
            hours,
            color: subject.color,
        }
    }

    /// The session date as ISO-8601, e.g. `2024-06-10`.
    pub fn date_iso(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
