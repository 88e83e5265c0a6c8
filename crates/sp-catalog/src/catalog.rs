//! The in-memory `Catalog` of subjects and chapters.
//!
//! # Mutation contract
//!
//! Every mutation is total: invalid input (blank names, missing exam date,
//! unknown ids, out-of-range priority, unusable hours) leaves the catalog
//! untouched and is reported only through a `debug` trace event.  Nothing
//! here returns an error or panics.
//!
//! # Active subject
//!
//! The catalog tracks one "active" subject, the target of
//! [`Catalog::add_chapter_to_active`].  Adding a subject makes it active.
//! Removing the active subject falls back to the first remaining subject in
//! insertion order, or to none when the catalog becomes empty.

use chrono::NaiveDate;
use tracing::debug;

use sp_core::{ChapterId, HOURS_EPSILON, PlannerRng, Priority, SubjectId};

use crate::{Chapter, Subject};

/// Owned, single-actor store of subjects for one planning run.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Subjects in insertion order.
    subjects: Vec<Subject>,
    active: Option<SubjectId>,
    next_subject: SubjectId,
    next_chapter: ChapterId,
    rng: PlannerRng,
}

impl Catalog {
    /// An empty catalog drawing subject colors from `rng`.
    pub fn new(rng: PlannerRng) -> Self {
        Self {
            subjects: Vec::new(),
            active: None,
            next_subject: SubjectId(0),
            next_chapter: ChapterId(0),
            rng,
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::new(PlannerRng::new(seed))
    }

    // ── Subjects ──────────────────────────────────────────────────────────

    /// Create a subject and make it active.
    ///
    /// Returns `None` (and changes nothing) if `name` is blank or
    /// `exam_date` is absent.
    pub fn add_subject(&mut self, name: &str, exam_date: Option<NaiveDate>) -> Option<&Subject> {
        let name = name.trim();
        if name.is_empty() {
            debug!("add_subject ignored: empty name");
            return None;
        }
        let Some(exam_date) = exam_date else {
            debug!(subject = name, "add_subject ignored: no exam date");
            return None;
        };

        let id = self.next_subject;
        self.next_subject = id.next();
        let color = self.rng.pick_color();

        self.subjects.push(Subject::new(id, name, Some(exam_date), color));
        self.active = Some(id);
        debug!(%id, subject = name, %exam_date, %color, "subject added");
        self.subjects.last()
    }

    /// Remove a subject and all of its chapters.  Unknown ids are ignored.
    pub fn remove_subject(&mut self, id: SubjectId) {
        let Some(idx) = self.subjects.iter().position(|s| s.id == id) else {
            debug!(%id, "remove_subject ignored: unknown subject");
            return;
        };
        let removed = self.subjects.remove(idx);
        debug!(%id, chapters = removed.chapters().len(), "subject removed");

        if self.active == Some(id) {
            self.active = self.subjects.first().map(|s| s.id);
        }
    }

    /// Make `id` the active subject.  Unknown ids are ignored.
    pub fn select_subject(&mut self, id: SubjectId) {
        if self.subject(id).is_some() {
            self.active = Some(id);
        } else {
            debug!(%id, "select_subject ignored: unknown subject");
        }
    }

    // ── Chapters ──────────────────────────────────────────────────────────

    /// Append a chapter to subject `subject_id`.
    ///
    /// Returns `None` (and changes nothing) if the name is blank, the subject
    /// is unknown, `priority` is outside `1..=5`, or `estimated_hours` is
    /// negative or not finite.  Estimates at or below [`HOURS_EPSILON`] are
    /// stored as zero.
    pub fn add_chapter(
        &mut self,
        subject_id: SubjectId,
        name: &str,
        priority: u8,
        estimated_hours: f64,
    ) -> Option<&Chapter> {
        let name = name.trim();
        if name.is_empty() {
            debug!(%subject_id, "add_chapter ignored: empty name");
            return None;
        }
        let Some(priority) = Priority::new(priority) else {
            debug!(%subject_id, chapter = name, priority, "add_chapter ignored: priority out of range");
            return None;
        };
        if !estimated_hours.is_finite() || estimated_hours < 0.0 {
            debug!(%subject_id, chapter = name, estimated_hours, "add_chapter ignored: unusable hours");
            return None;
        }
        let Some(idx) = self.subjects.iter().position(|s| s.id == subject_id) else {
            debug!(%subject_id, chapter = name, "add_chapter ignored: unknown subject");
            return None;
        };
        let estimated_hours = if estimated_hours <= HOURS_EPSILON { 0.0 } else { estimated_hours };

        let id = self.next_chapter;
        self.next_chapter = id.next();

        let subject = &mut self.subjects[idx];
        subject.push_chapter(Chapter {
            id,
            name: name.to_owned(),
            priority,
            estimated_hours,
        });
        debug!(%subject_id, %id, chapter = name, %priority, estimated_hours, "chapter added");
        subject.chapters().last()
    }

    /// [`Catalog::add_chapter`] against the active subject.  No-op when no
    /// subject is active.
    pub fn add_chapter_to_active(
        &mut self,
        name: &str,
        priority: u8,
        estimated_hours: f64,
    ) -> Option<&Chapter> {
        let Some(active) = self.active else {
            debug!(chapter = name, "add_chapter ignored: no active subject");
            return None;
        };
        self.add_chapter(active, name, priority, estimated_hours)
    }

    /// Remove one chapter from one subject.  No-op if either is unknown.
    pub fn remove_chapter(&mut self, subject_id: SubjectId, chapter_id: ChapterId) {
        let removed = self
            .subjects
            .iter_mut()
            .find(|s| s.id == subject_id)
            .and_then(|s| s.take_chapter(chapter_id));

        match removed {
            Some(c) => debug!(%subject_id, %chapter_id, chapter = %c.name, "chapter removed"),
            None => debug!(%subject_id, %chapter_id, "remove_chapter ignored: not found"),
        }
    }

    /// Drop every subject.  Id counters keep running so old ids stay dead.
    pub fn clear(&mut self) {
        self.subjects.clear();
        self.active = None;
    }

    // ── Read access ───────────────────────────────────────────────────────

    /// Snapshot of all subjects in insertion order, as consumed by the
    /// scheduler.
    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn subject(&self, id: SubjectId) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn active(&self) -> Option<&Subject> {
        self.active.and_then(|id| self.subject(id))
    }

    pub fn active_id(&self) -> Option<SubjectId> {
        self.active
    }

    pub fn len(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }

    /// Chapters across all subjects.
    pub fn chapter_count(&self) -> usize {
        self.subjects.iter().map(|s| s.chapters().len()).sum()
    }

    /// Estimated hours across all subjects.
    pub fn total_hours(&self) -> f64 {
        self.subjects.iter().map(Subject::total_hours).sum()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::with_seed(0)
    }
}
