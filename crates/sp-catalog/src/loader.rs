//! CSV catalog import.
//!
//! # CSV format
//!
//! One row per chapter.  Rows for the same subject are grouped by subject
//! name; subjects are created in order of first appearance.
//!
//! ```csv
//! subject,exam_date,chapter,priority,hours
//! Math,2024-06-10,Algebra,3,3
//! Math,2024-06-10,Geometry,5,2.5
//! History,2024-06-14,Rome,2,4
//! ```
//!
//! The first row of a subject fixes its exam date; later rows for the same
//! subject only contribute chapters.  Their `exam_date` is still parsed, and a
//! date that differs from the fixed one is logged and otherwise ignored.  An empty `exam_date` is accepted by the
//! parser, but [`Catalog::add_subject`] ignores such a subject and every
//! chapter row that names it.
//!
//! Malformed values (a date that isn't `YYYY-MM-DD`, a non-numeric priority or
//! hour count) abort the load with [`CatalogError::Parse`].  Well-formed but
//! invalid values go through the normal catalog operations and degrade to
//! no-ops, exactly as they would from an interactive caller.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::debug;

use sp_core::{PlannerRng, SubjectId};

use crate::{Catalog, CatalogError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct CatalogRecord {
    subject:   String,
    exam_date: String,
    chapter:   String,
    priority:  u8,
    hours:     f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Build a catalog from a CSV file.
pub fn load_catalog_csv(path: &Path, rng: PlannerRng) -> Result<Catalog, CatalogError> {
    let file = std::fs::File::open(path).map_err(CatalogError::Io)?;
    load_catalog_reader(file, rng)
}

/// Like [`load_catalog_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedding a catalog in a
/// binary.
pub fn load_catalog_reader<R: Read>(reader: R, rng: PlannerRng) -> Result<Catalog, CatalogError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut catalog = Catalog::new(rng);
    // `None` marks a subject name the catalog refused.
    let mut by_name: HashMap<String, Option<SubjectId>> = HashMap::new();

    for (line, result) in csv_reader.deserialize::<CatalogRecord>().enumerate() {
        let row = result.map_err(|e| CatalogError::Parse(e.to_string()))?;
        let subject_name = row.subject.trim().to_owned();

        let exam_date = parse_exam_date(&row.exam_date).map_err(|e| {
            // +2: one for the header, one for 1-based numbering.
            CatalogError::Parse(format!("row {}: {e}", line + 2))
        })?;

        let subject_id = match by_name.get(&subject_name) {
            Some(&id) => {
                let fixed = id.and_then(|id| catalog.subject(id)).and_then(|s| s.exam_date);
                if id.is_some() && fixed != exam_date {
                    debug!(
                        subject = %subject_name,
                        row = line + 2,
                        ?exam_date,
                        ?fixed,
                        "exam_date differs from the subject's first row; keeping the first"
                    );
                }
                id
            }
            None => {
                let id = catalog.add_subject(&subject_name, exam_date).map(|s| s.id);
                by_name.insert(subject_name, id);
                id
            }
        };

        if let Some(id) = subject_id {
            catalog.add_chapter(id, &row.chapter, row.priority, row.hours);
        }
    }

    Ok(catalog)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_exam_date(s: &str) -> Result<Option<NaiveDate>, String> {
    let s = s.trim();
    if s.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| format!("invalid exam_date {s:?}: expected YYYY-MM-DD"))
}
