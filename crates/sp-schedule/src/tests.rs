//! Unit tests for sp-schedule.

use chrono::{Days, NaiveDate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sp_catalog::{Catalog, Chapter, Subject};
use sp_core::{ChapterId, ColorTag, PlannerRng, Priority, SubjectId};

use crate::{StudySession, generate_plan};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2024, 6, 1)
}

fn day(n: u64) -> NaiveDate {
    today().checked_add_days(Days::new(n)).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn plan(catalog: &Catalog, daily_hours: f64) -> Vec<StudySession> {
    generate_plan(catalog.subjects(), daily_hours, today()).unwrap()
}

fn chapter(id: u32, name: &str, priority: u8, hours: f64) -> Chapter {
    Chapter {
        id: ChapterId(id),
        name: name.to_owned(),
        priority: Priority::new(priority).unwrap(),
        estimated_hours: hours,
    }
}

fn chapter_names(sessions: &[StudySession]) -> Vec<&str> {
    sessions.iter().map(|s| s.chapter_name.as_str()).collect()
}

/// A random catalog: 1–5 subjects with 0–6 chapters each, fractional hours.
fn random_catalog(seed: u64) -> Catalog {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut catalog = Catalog::new(PlannerRng::new(seed));
    let subjects = rng.gen_range(1..=5);
    for s in 0..subjects {
        let exam = day(rng.gen_range(0..30u64));
        let id = catalog.add_subject(&format!("S{s}"), Some(exam)).unwrap().id;
        for c in 0..rng.gen_range(0..=6) {
            let priority = rng.gen_range(1..=5u8);
            // Quarter-hour steps plus the occasional awkward fraction.
            let hours = if rng.gen_range(0..4) == 0 {
                rng.gen_range(0.0..7.3)
            } else {
                f64::from(rng.gen_range(0..=24u32)) * 0.25
            };
            catalog.add_chapter(id, &format!("S{s}C{c}"), priority, hours);
        }
    }
    catalog
}

// ── Reference examples ────────────────────────────────────────────────────────

#[cfg(test)]
mod examples {
    use super::*;

    #[test]
    fn chapter_spills_into_next_day() {
        let mut c = Catalog::with_seed(1);
        let math = c.add_subject("Math", Some(today())).unwrap().id;
        c.add_chapter(math, "Algebra", 3, 3.0);

        let sessions = plan(&c, 2.0);
        assert_eq!(sessions.len(), 2);
        assert_eq!((sessions[0].date, sessions[0].hours), (today(), 2.0));
        assert_eq!((sessions[1].date, sessions[1].hours), (day(1), 1.0));
        assert!(sessions.iter().all(|s| s.subject_name == "Math"));
    }

    #[test]
    fn higher_priority_first_on_shared_day() {
        let mut c = Catalog::with_seed(1);
        let s = c.add_subject("Bio", Some(day(5))).unwrap().id;
        c.add_chapter(s, "Low", 1, 1.0);
        c.add_chapter(s, "High", 5, 1.0);

        let sessions = plan(&c, 2.0);
        assert_eq!(chapter_names(&sessions), ["High", "Low"]);
        assert!(sessions.iter().all(|s| s.date == today()));
    }

    #[test]
    fn non_positive_budget_fails_fast() {
        let mut c = Catalog::with_seed(1);
        let s = c.add_subject("Bio", Some(day(5))).unwrap().id;
        c.add_chapter(s, "Cells", 3, 1.0);

        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = generate_plan(c.subjects(), bad, today());
            assert!(matches!(err, Err(crate::ScheduleError::InvalidBudget(_))), "accepted {bad}");
        }
    }

    #[test]
    fn today_variant_schedules_everything() {
        let mut c = Catalog::with_seed(1);
        let math = c.add_subject("Math", Some(today())).unwrap().id;
        c.add_chapter(math, "Algebra", 3, 3.0);

        let sessions = crate::generate_plan_today(c.subjects(), 2.0).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!((sessions[1].date - sessions[0].date).num_days(), 1);
        assert!(crate::generate_plan_today(c.subjects(), -1.0).is_err());
    }

    #[test]
    fn invalid_budget_rejected_even_for_empty_catalog() {
        assert!(generate_plan(&[], 0.0, today()).is_err());
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn earlier_exam_beats_higher_priority() {
        let mut c = Catalog::with_seed(1);
        let late = c.add_subject("Late", Some(day(20))).unwrap().id;
        c.add_chapter(late, "Urgent but later", 5, 1.0);
        let soon = c.add_subject("Soon", Some(day(3))).unwrap().id;
        c.add_chapter(soon, "Relaxed but sooner", 1, 1.0);

        assert_eq!(chapter_names(&plan(&c, 4.0)), ["Relaxed but sooner", "Urgent but later"]);
    }

    #[test]
    fn equal_keys_keep_insertion_order() {
        let mut c = Catalog::with_seed(1);
        let a = c.add_subject("A", Some(day(7))).unwrap().id;
        c.add_chapter(a, "A1", 3, 1.0);
        c.add_chapter(a, "A2", 3, 1.0);
        let b = c.add_subject("B", Some(day(7))).unwrap().id;
        c.add_chapter(b, "B1", 3, 1.0);
        c.add_chapter(a, "A3", 3, 1.0);

        assert_eq!(chapter_names(&plan(&c, 10.0)), ["A1", "A2", "A3", "B1"]);
    }

    #[test]
    fn missing_exam_date_sorts_first() {
        let dated = Subject::new(SubjectId(0), "Dated", Some(day(1)), ColorTag::Blue)
            .with_chapter(chapter(0, "Dated chapter", 5, 1.0));
        let undated = Subject::new(SubjectId(1), "Undated", None, ColorTag::Red)
            .with_chapter(chapter(1, "Undated chapter", 1, 1.0));

        let sessions = generate_plan(&[dated, undated], 2.0, today()).unwrap();
        assert_eq!(chapter_names(&sessions), ["Undated chapter", "Dated chapter"]);
        assert_eq!(sessions[0].color, ColorTag::Red);
    }
}

// ── Packing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod packing {
    use super::*;

    #[test]
    fn empty_inputs_give_empty_plan() {
        assert!(generate_plan(&[], 2.0, today()).unwrap().is_empty());

        let mut c = Catalog::with_seed(1);
        c.add_subject("Empty", Some(day(3)));
        assert!(plan(&c, 2.0).is_empty());
    }

    #[test]
    fn zero_hour_chapter_has_no_sessions() {
        let mut c = Catalog::with_seed(1);
        let s = c.add_subject("Geo", Some(day(3))).unwrap().id;
        c.add_chapter(s, "Skim", 5, 0.0);
        c.add_chapter(s, "Maps", 3, 1.0);

        let sessions = plan(&c, 2.0);
        assert_eq!(chapter_names(&sessions), ["Maps"]);
    }

    #[test]
    fn dust_estimate_matches_its_empty_schedule() {
        let mut c = Catalog::with_seed(1);
        let s = c.add_subject("Geo", Some(day(3))).unwrap().id;
        let glance = c.add_chapter(s, "Glance", 5, 5e-10).unwrap().id;
        c.add_chapter(s, "Maps", 3, 1.0);

        let sessions = plan(&c, 2.0);
        let scheduled: f64 = sessions.iter().filter(|x| x.chapter_id == glance).map(|x| x.hours).sum();
        let estimate = c.subject(s).unwrap().chapter(glance).unwrap().estimated_hours;
        assert_eq!(scheduled, estimate);
        assert_eq!(chapter_names(&sessions), ["Maps"]);
    }

    #[test]
    fn day_holds_slices_of_several_chapters() {
        let mut c = Catalog::with_seed(1);
        let s = c.add_subject("Chem", Some(day(9))).unwrap().id;
        c.add_chapter(s, "Atoms", 5, 1.5);
        c.add_chapter(s, "Bonds", 4, 3.0);
        c.add_chapter(s, "Acids", 3, 0.5);

        let got: Vec<(NaiveDate, String, f64)> = plan(&c, 2.0)
            .into_iter()
            .map(|s| (s.date, s.chapter_name, s.hours))
            .collect();

        let expected = vec![
            (today(), "Atoms".to_owned(), 1.5),
            (today(), "Bonds".to_owned(), 0.5),
            (day(1), "Bonds".to_owned(), 2.0),
            (day(2), "Bonds".to_owned(), 0.5),
            (day(2), "Acids".to_owned(), 0.5),
        ];
        assert_eq!(got, expected);
    }

    #[test]
    fn long_chapter_spans_many_days() {
        let mut c = Catalog::with_seed(1);
        let s = c.add_subject("Law", Some(day(30))).unwrap().id;
        c.add_chapter(s, "Everything", 5, 10.0);

        let sessions = plan(&c, 3.0);
        let hours: Vec<f64> = sessions.iter().map(|s| s.hours).collect();
        assert_eq!(hours, [3.0, 3.0, 3.0, 1.0]);
        assert_eq!(sessions.last().unwrap().date, day(3));
    }

    #[test]
    fn fractional_hours_leave_no_dust_sessions() {
        let mut c = Catalog::with_seed(1);
        let s = c.add_subject("Stats", Some(day(4))).unwrap().id;
        c.add_chapter(s, "A", 5, 0.1);
        c.add_chapter(s, "B", 4, 0.2);
        c.add_chapter(s, "C", 3, 0.7);
        c.add_chapter(s, "D", 2, 0.3);

        let sessions = plan(&c, 1.0);
        // 0.1 + 0.2 + 0.7 fills day one; D starts a fresh day in one piece.
        assert_eq!(chapter_names(&sessions), ["A", "B", "C", "D"]);
        assert!(sessions[..3].iter().all(|s| s.date == today()));
        assert_eq!(sessions[3].date, day(1));
        assert!(approx(sessions[3].hours, 0.3));
    }

    #[test]
    fn fractional_inputs_are_not_rounded() {
        let mut c = Catalog::with_seed(1);
        let s = c.add_subject("Music", Some(day(4))).unwrap().id;
        c.add_chapter(s, "Scales", 3, 1.3);

        let sessions = plan(&c, 0.75);
        let hours: Vec<f64> = sessions.iter().map(|s| s.hours).collect();
        assert_eq!(hours.len(), 2);
        assert_eq!(hours[0], 0.75);
        assert!(approx(hours[1], 0.55));
    }

    #[test]
    fn sessions_carry_subject_color_and_iso_date() {
        let mut c = Catalog::with_seed(3);
        let subject = c.add_subject("Art", Some(day(2))).unwrap();
        let (id, color) = (subject.id, subject.color);
        c.add_chapter(id, "Light", 2, 1.0);

        let sessions = plan(&c, 2.0);
        assert_eq!(sessions[0].color, color);
        assert_eq!(sessions[0].subject_id, id);
        assert_eq!(sessions[0].date_iso(), "2024-06-01");
    }
}

// ── Properties over random catalogs ───────────────────────────────────────────

#[cfg(test)]
mod properties {
    use std::collections::{HashMap, HashSet};

    use super::*;

    const SEEDS: std::ops::Range<u64> = 0..200;
    const BUDGETS: [f64; 4] = [0.5, 1.0, 2.5, 6.0];

    #[test]
    fn every_chapter_fully_covered() {
        for seed in SEEDS {
            let catalog = random_catalog(seed);
            for budget in BUDGETS {
                let sessions = plan(&catalog, budget);
                let mut per_chapter: HashMap<ChapterId, f64> = HashMap::new();
                for s in &sessions {
                    *per_chapter.entry(s.chapter_id).or_default() += s.hours;
                }
                for subject in catalog.subjects() {
                    for ch in subject.chapters() {
                        let got = per_chapter.get(&ch.id).copied().unwrap_or(0.0);
                        assert!(
                            approx(got, ch.estimated_hours),
                            "seed {seed} budget {budget}: {} got {got}, want {}",
                            ch.name,
                            ch.estimated_hours
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn no_session_exceeds_budget_and_days_are_tight() {
        for seed in SEEDS {
            let catalog = random_catalog(seed);
            for budget in BUDGETS {
                let sessions = plan(&catalog, budget);
                let mut per_day: Vec<(NaiveDate, f64)> = Vec::new();
                for s in &sessions {
                    assert!(s.hours > 0.0 && s.hours <= budget + 1e-9);
                    match per_day.last_mut() {
                        Some((d, h)) if *d == s.date => *h += s.hours,
                        _ => per_day.push((s.date, s.hours)),
                    }
                }
                // Every day but the last is filled to the budget.
                if let Some((_, full_days)) = per_day.split_last() {
                    for (d, h) in full_days {
                        assert!(approx(*h, budget), "seed {seed}: {d} has {h} of {budget}");
                    }
                }
            }
        }
    }

    #[test]
    fn dates_are_contiguous_and_non_decreasing() {
        for seed in SEEDS {
            let sessions = plan(&random_catalog(seed), 1.0);
            if let Some(first) = sessions.first() {
                assert_eq!(first.date, today());
            }
            for pair in sessions.windows(2) {
                let gap = (pair[1].date - pair[0].date).num_days();
                assert!(gap == 0 || gap == 1, "seed {seed}: gap {gap}");
            }
        }
    }

    #[test]
    fn at_most_one_slice_per_chapter_per_day() {
        for seed in SEEDS {
            let sessions = plan(&random_catalog(seed), 2.5);
            let mut seen = HashSet::new();
            for s in &sessions {
                assert!(seen.insert((s.date, s.chapter_id)), "seed {seed}: split {}", s.chapter_name);
            }
        }
    }

    #[test]
    fn same_input_same_plan() {
        for seed in 0..20 {
            let a = plan(&random_catalog(seed), 2.0);
            let b = plan(&random_catalog(seed), 2.0);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn removing_a_chapter_drops_only_its_sessions() {
        for seed in SEEDS {
            let mut catalog = random_catalog(seed);
            let Some((subject, victim)) = catalog
                .subjects()
                .iter()
                .find_map(|s| s.chapters().first().map(|c| (s.id, c.id)))
            else {
                continue;
            };

            let before = plan(&catalog, 2.0);
            catalog.remove_chapter(subject, victim);
            let after = plan(&catalog, 2.0);

            assert!(after.iter().all(|s| s.chapter_id != victim));

            let order = |sessions: &[StudySession]| -> Vec<ChapterId> {
                let mut ids: Vec<ChapterId> = sessions.iter().map(|s| s.chapter_id).collect();
                ids.dedup();
                ids
            };
            let mut expected = order(&before);
            expected.retain(|&id| id != victim);
            assert_eq!(order(&after), expected, "seed {seed}");
        }
    }
}

// ── DayCursor ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod cursor {
    use super::*;
    use crate::DayCursor;

    #[test]
    fn take_is_capped_by_day() {
        let c = DayCursor::start(today(), 2.0);
        let (slice, rest) = c.take(5.0);
        assert_eq!(slice, 2.0);
        assert!(rest.is_exhausted());
        assert_eq!(rest.date, today());
        // The source cursor is untouched.
        assert_eq!(c.hours_left, 2.0);
    }

    #[test]
    fn take_less_than_day() {
        let (slice, rest) = DayCursor::start(today(), 2.0).take(0.5);
        assert_eq!(slice, 0.5);
        assert_eq!(rest.hours_left, 1.5);
    }

    #[test]
    fn next_day_resets_budget() {
        let (_, spent) = DayCursor::start(today(), 2.0).take(2.0);
        let next = spent.next_day(2.0).unwrap();
        assert_eq!(next, DayCursor::start(day(1), 2.0));
    }

    #[test]
    fn next_day_overflow_is_an_error() {
        let c = DayCursor::start(NaiveDate::MAX, 1.0);
        assert!(matches!(c.next_day(1.0), Err(crate::ScheduleError::DateOverflow(_))));
    }
}

// ── StudyPlan ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod study_plan {
    use sp_core::PlannerConfig;

    use super::*;
    use crate::StudyPlan;

    fn config(daily_hours: f64) -> PlannerConfig {
        PlannerConfig { daily_hours, seed: 0, start_date: Some(today()) }
    }

    fn catalog() -> Catalog {
        let mut c = Catalog::with_seed(5);
        let math = c.add_subject("Math", Some(day(1))).unwrap().id;
        c.add_chapter(math, "Algebra", 5, 3.0);
        let bio = c.add_subject("Bio", Some(day(10))).unwrap().id;
        c.add_chapter(bio, "Cells", 2, 2.0);
        c
    }

    #[test]
    fn summaries() {
        let c = catalog();
        let p = StudyPlan::generate(c.subjects(), &config(2.0)).unwrap();
        assert_eq!(p.start(), today());
        assert_eq!(p.len(), 4);
        assert!(approx(p.total_hours(), 5.0));
        assert_eq!(p.day_count(), 3);
        assert_eq!(p.last_date(), Some(day(2)));

        let days = p.hours_by_date();
        assert_eq!(days.iter().map(|d| d.sessions).collect::<Vec<_>>(), [1, 2, 1]);
        assert!(approx(days[1].hours, 2.0));
    }

    #[test]
    fn hours_for_chapter() {
        let c = catalog();
        let algebra = c.subjects()[0].chapters()[0].id;
        let p = StudyPlan::generate(c.subjects(), &config(2.0)).unwrap();
        assert!(approx(p.hours_for_chapter(algebra), 3.0));
        assert_eq!(p.sessions_for_chapter(algebra).count(), 2);
        assert_eq!(p.hours_for_chapter(ChapterId(999)), 0.0);
    }

    #[test]
    fn late_sessions_are_reported() {
        let c = catalog();
        let p = StudyPlan::generate(c.subjects(), &config(2.0)).unwrap();
        // Algebra's second hour lands on the Math exam day.
        let late = p.late_sessions(c.subjects());
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].chapter_name, "Algebra");
        assert_eq!(late[0].date, day(1));

        let roomy = StudyPlan::generate(c.subjects(), &config(8.0)).unwrap();
        assert!(roomy.late_sessions(c.subjects()).is_empty());
    }

    #[test]
    fn invalid_config_budget_is_rejected() {
        let c = catalog();
        assert!(StudyPlan::generate(c.subjects(), &config(0.0)).is_err());
    }

    #[test]
    fn empty_catalog_gives_empty_plan() {
        let p = StudyPlan::generate(&[], &config(2.0)).unwrap();
        assert!(p.is_empty());
        assert_eq!(p.last_date(), None);
        assert_eq!(p.day_count(), 0);
    }
}
