//! semester — end-to-end demo of the study planner.
//!
//! Loads an embedded catalog of four subjects, applies a couple of
//! interactive-style edits, generates a plan, prints it, and writes
//! CSV + JSON copies to `output/semester/`.
//!
//! Usage: `semester [config.json]`
//!
//! ```json
//! { "daily_hours": 3.5, "seed": 7, "start_date": "2024-06-01" }
//! ```
//!
//! Missing fields fall back to the defaults (2 h/day, seed 42, today).
//! Set `RUST_LOG=debug` to see every catalog mutation and ignored input.

use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sp_catalog::load_catalog_reader;
use sp_core::{PlannerConfig, PlannerRng};
use sp_output::{CsvPlanWriter, JsonPlanWriter, write_plan};
use sp_schedule::StudyPlan;

const OUTPUT_DIR: &str = "output/semester";

// ── Catalog CSV ───────────────────────────────────────────────────────────────

const CATALOG_CSV: &str = "\
subject,exam_date,chapter,priority,hours\n\
Linear Algebra,2024-06-12,Vector spaces,4,3\n\
Linear Algebra,2024-06-12,Eigenvalues,5,4.5\n\
Linear Algebra,2024-06-12,Inner products,2,2\n\
Organic Chemistry,2024-06-09,Alkanes,3,2\n\
Organic Chemistry,2024-06-09,Reaction mechanisms,5,5\n\
European History,2024-06-20,Reformation,2,3\n\
European History,2024-06-20,French Revolution,4,4\n\
Statistics,2024-06-15,Distributions,3,2.5\n\
Statistics,2024-06-15,Hypothesis tests,5,3.25\n\
";

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&str>) -> Result<PlannerConfig> {
    let config = match path {
        Some(p) => {
            let text = std::fs::read_to_string(p).with_context(|| format!("reading {p}"))?;
            serde_json::from_str(&text).with_context(|| format!("parsing {p}"))?
        }
        None => PlannerConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let arg = std::env::args().nth(1);
    let config = load_config(arg.as_deref())?;
    info!(daily_hours = config.daily_hours, seed = config.seed, "configuration loaded");

    // 1. Build the catalog.
    let mut catalog = load_catalog_reader(Cursor::new(CATALOG_CSV), PlannerRng::new(config.seed))?;
    println!(
        "Catalog: {} subjects, {} chapters, {:.2} h estimated",
        catalog.len(),
        catalog.chapter_count(),
        catalog.total_hours()
    );

    // 2. A few edits, the way a user would make them.  The blank chapter name
    //    is ignored.
    if let Some(stats) = catalog.subjects().iter().find(|s| s.name == "Statistics").map(|s| s.id) {
        catalog.select_subject(stats);
        catalog.add_chapter_to_active("Regression", 4, 2.0);
        catalog.add_chapter_to_active("", 5, 1.0);
    }
    let first_history_chapter = catalog
        .subjects()
        .iter()
        .find(|s| s.name == "European History")
        .and_then(|s| s.chapters().first().map(|c| (s.id, c.id)));
    if let Some((subject, chapter)) = first_history_chapter {
        catalog.remove_chapter(subject, chapter);
    }

    // 3. Generate.
    let plan = StudyPlan::generate(catalog.subjects(), &config)?;
    println!(
        "Plan: {} sessions over {} days from {} ({} h/day)",
        plan.len(),
        plan.day_count(),
        plan.start(),
        plan.daily_hours()
    );
    println!();

    // 4. Table.
    println!("{:<12} {:<20} {:<22} {:>6}  {:<8}", "Date", "Subject", "Chapter", "Hours", "Color");
    println!("{}", "-".repeat(74));
    for s in plan.sessions() {
        println!(
            "{:<12} {:<20} {:<22} {:>6.2}  {:<8}",
            s.date_iso(),
            s.subject_name,
            s.chapter_name,
            s.hours,
            s.color
        );
    }
    println!();

    let late = plan.late_sessions(catalog.subjects());
    if !late.is_empty() {
        println!("{} session(s) fall on or after their exam date:", late.len());
        for s in late {
            println!("  {} {} / {}", s.date_iso(), s.subject_name, s.chapter_name);
        }
        println!();
    }

    // 5. Export.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let dir = Path::new(OUTPUT_DIR);
    let mut csv = CsvPlanWriter::new(dir)?;
    write_plan(&mut csv, &plan)?;
    let mut json = JsonPlanWriter::new(dir);
    write_plan(&mut json, &plan)?;
    println!("Wrote study_sessions.csv, daily_totals.csv, study_plan.json to {OUTPUT_DIR}/");

    Ok(())
}
