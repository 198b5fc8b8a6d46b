// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the read-only history projections.

use crate::tests::helpers::{date, persistence, raw_insert_assignment, seed_promoter, seed_store};

#[test]
fn test_promoter_timeline_is_ordered_by_start_date() {
    let mut persistence = persistence();
    seed_promoter(&mut persistence, 101);
    seed_store(&mut persistence, 1);
    seed_store(&mut persistence, 2);
    seed_store(&mut persistence, 3);

    persistence
        .create_assignment(101, 1, date(2024, 1, 1), "first", 9)
        .unwrap();
    persistence
        .create_assignment(101, 2, date(2024, 2, 1), "second", 9)
        .unwrap();
    persistence
        .create_assignment(101, 3, date(2024, 3, 1), "third", 9)
        .unwrap();

    let timeline = persistence.assignments_for_promoter(101).unwrap();

    assert_eq!(timeline.len(), 3);
    assert_eq!(timeline[0].store_id, 1);
    assert_eq!(timeline[1].store_id, 2);
    assert_eq!(timeline[2].store_id, 3);

    // The timeline is a sequence of non-overlapping intervals with
    // exactly one open tail.
    assert_eq!(timeline[0].end_date, Some(date(2024, 1, 31)));
    assert_eq!(timeline[1].end_date, Some(date(2024, 2, 29)));
    assert_eq!(timeline[2].end_date, None);
}

#[test]
fn test_promoter_timeline_is_empty_for_unknown_promoter() {
    let mut persistence = persistence();

    let timeline = persistence.assignments_for_promoter(404).unwrap();

    assert!(timeline.is_empty());
}

#[test]
fn test_store_timeline_spans_multiple_promoters() {
    let mut persistence = persistence();
    seed_promoter(&mut persistence, 101);
    seed_promoter(&mut persistence, 202);
    seed_store(&mut persistence, 1);

    let first = persistence
        .create_assignment(101, 1, date(2024, 1, 1), "first tenant", 9)
        .unwrap();
    persistence
        .transfer_assignment(
            first.created.assignment_id.unwrap(),
            202,
            1,
            date(2024, 2, 1),
            "handover",
            9,
        )
        .unwrap();

    let timeline = persistence.assignments_for_store(1).unwrap();

    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline[0].promoter_id, 101);
    assert_eq!(timeline[1].promoter_id, 202);
}

#[test]
fn test_current_assignment_returns_open_row() {
    let mut persistence = persistence();
    seed_promoter(&mut persistence, 101);
    seed_store(&mut persistence, 1);
    seed_store(&mut persistence, 2);

    assert!(
        persistence
            .current_assignment_for_promoter(101)
            .unwrap()
            .is_none()
    );

    persistence
        .create_assignment(101, 1, date(2024, 1, 1), "first", 9)
        .unwrap();
    let second = persistence
        .create_assignment(101, 2, date(2024, 2, 1), "second", 9)
        .unwrap();

    let current = persistence
        .current_assignment_for_promoter(101)
        .unwrap()
        .unwrap();
    assert_eq!(current.assignment_id, second.created.assignment_id);
}

#[test]
fn test_current_assignment_with_legacy_plurality_prefers_latest_start() {
    let mut persistence = persistence();
    seed_promoter(&mut persistence, 101);
    seed_store(&mut persistence, 1);
    seed_store(&mut persistence, 2);

    raw_insert_assignment(
        &mut persistence,
        101,
        1,
        "2023-11-01",
        None,
        "2023-11-01 08:00:00",
    );
    let later = raw_insert_assignment(
        &mut persistence,
        101,
        2,
        "2023-12-01",
        None,
        "2023-12-01 08:00:00",
    );

    // Read paths tolerate plural open rows and surface the most recent.
    let current = persistence
        .current_assignment_for_promoter(101)
        .unwrap()
        .unwrap();
    assert_eq!(current.assignment_id, Some(later));

    let open = persistence.open_assignments_for_promoter(101).unwrap();
    assert_eq!(open.len(), 2);
}

#[test]
fn test_store_roster_lists_open_assignments_only() {
    let mut persistence = persistence();
    seed_promoter(&mut persistence, 101);
    seed_promoter(&mut persistence, 202);
    seed_store(&mut persistence, 1);

    let first = persistence
        .create_assignment(101, 1, date(2024, 1, 1), "first tenant", 9)
        .unwrap();
    persistence
        .transfer_assignment(
            first.created.assignment_id.unwrap(),
            202,
            1,
            date(2024, 2, 1),
            "handover",
            9,
        )
        .unwrap();

    let roster = persistence.open_assignments_for_store(1).unwrap();

    assert_eq!(roster.len(), 1);
    assert_eq!(roster[0].promoter_id, 202);
}
