use admission::workflows::admission::{
    AdmissionEngine, AdmissionPlan, AllocationError, ApplicantRecord, DepartmentCatalog,
    DepartmentSpec, ExamScores, Subject,
};
use std::collections::HashSet;

fn record(name: &str, scores: ExamScores, preferences: &[&str]) -> ApplicantRecord {
    ApplicantRecord {
        name: name.to_string(),
        scores,
        preferences: preferences.iter().map(|name| name.to_string()).collect(),
    }
}

fn physics_and_math(physics: f64, math: f64) -> ExamScores {
    ExamScores {
        physics,
        math,
        ..ExamScores::default()
    }
}

fn single_subject_plan(capacity: usize) -> AdmissionPlan {
    let catalog = DepartmentCatalog::new(vec![
        DepartmentSpec::new("Physics", &[Subject::Physics]),
        DepartmentSpec::new("Mathematics", &[Subject::Math]),
    ])
    .expect("valid catalog");
    AdmissionPlan::new(catalog, capacity)
}

#[test]
fn higher_score_takes_the_only_seat_and_runner_up_moves_to_second_choice() {
    let plan = AdmissionPlan::standard(1);
    let records = vec![
        record(
            "Applicant A",
            physics_and_math(90.0, 90.0),
            &["Physics", "Mathematics"],
        ),
        record("Applicant B", physics_and_math(95.0, 95.0), &["Physics"]),
    ];

    let outcome = AdmissionEngine::new(&plan, records)
        .expect("engine builds")
        .run();

    assert_eq!(outcome.admitted_names("Physics"), ["Applicant B"]);
    assert_eq!(outcome.admitted_names("Mathematics"), ["Applicant A"]);
    let mathematics = outcome.department("Mathematics").expect("roster");
    assert_eq!(mathematics.admitted[0].round, 1);
    assert!(outcome.unassigned.is_empty());
}

#[test]
fn equal_scores_are_listed_by_name() {
    let plan = AdmissionPlan::standard(5);
    let records = vec![
        record("Bob Lee", physics_and_math(80.0, 70.0), &["Physics"]),
        record("Anna Lee", physics_and_math(70.0, 80.0), &["Physics"]),
    ];

    let outcome = AdmissionEngine::new(&plan, records)
        .expect("engine builds")
        .run();

    assert_eq!(outcome.admitted_names("Physics"), ["Anna Lee", "Bob Lee"]);
}

#[test]
fn special_exam_lifts_the_composite_score() {
    let plan = AdmissionPlan::standard(1);
    let scores = ExamScores {
        physics: 60.0,
        math: 70.0,
        special: 85.0,
        ..ExamScores::default()
    };

    let outcome = AdmissionEngine::new(&plan, vec![record("Sam Boost", scores, &["Physics"])])
        .expect("engine builds")
        .run();

    let physics = outcome.department("Physics").expect("roster");
    assert_eq!(physics.admitted[0].score, 85.0);
    assert_eq!(physics.admitted[0].score_label(), "85.0");
}

#[test]
fn earlier_preference_round_beats_higher_score() {
    let plan = single_subject_plan(1);
    let records = vec![
        record("Top Math", physics_and_math(0.0, 99.0), &["Mathematics"]),
        record(
            "High Scorer",
            physics_and_math(95.0, 90.0),
            &["Mathematics", "Physics"],
        ),
        record("Low Scorer", physics_and_math(70.0, 0.0), &["Physics"]),
    ];

    let outcome = AdmissionEngine::new(&plan, records)
        .expect("engine builds")
        .run();

    assert_eq!(outcome.admitted_names("Physics"), ["Low Scorer"]);
    assert_eq!(outcome.admitted_names("Mathematics"), ["Top Math"]);
    assert_eq!(outcome.unassigned, ["High Scorer"]);
}

#[test]
fn zero_capacity_leaves_everyone_unassigned() {
    let plan = AdmissionPlan::standard(0);
    let records = vec![
        record("Ann One", physics_and_math(99.0, 99.0), &["Physics"]),
        record("Ben Two", physics_and_math(50.0, 50.0), &["Mathematics"]),
    ];

    let outcome = AdmissionEngine::new(&plan, records)
        .expect("engine builds")
        .run();

    assert!(outcome
        .departments
        .iter()
        .all(|roster| roster.admitted.is_empty()));
    assert_eq!(outcome.unassigned, ["Ann One", "Ben Two"]);
    assert_eq!(outcome.totals.admitted_per_round, vec![0, 0, 0]);
}

#[test]
fn more_rounds_than_preferences_is_not_an_error() {
    let plan = single_subject_plan(1).with_rounds(5);
    let records = vec![
        record("First Pick", physics_and_math(90.0, 0.0), &["Physics"]),
        record("Second Pick", physics_and_math(80.0, 0.0), &["Physics"]),
    ];

    let outcome = AdmissionEngine::new(&plan, records)
        .expect("engine builds")
        .run();

    assert_eq!(outcome.admitted_names("Physics"), ["First Pick"]);
    assert_eq!(outcome.unassigned, ["Second Pick"]);
    assert_eq!(outcome.totals.admitted_per_round.len(), 5);
}

#[test]
fn preferences_beyond_the_last_round_are_never_used() {
    let plan = single_subject_plan(1).with_rounds(1);
    let records = vec![
        record("Taken Seat", physics_and_math(90.0, 0.0), &["Physics"]),
        record(
            "Late Option",
            physics_and_math(10.0, 10.0),
            &["Physics", "Mathematics"],
        ),
    ];

    let outcome = AdmissionEngine::new(&plan, records)
        .expect("engine builds")
        .run();

    assert!(outcome.admitted_names("Mathematics").is_empty());
    assert_eq!(outcome.unassigned, ["Late Option"]);
}

#[test]
fn unknown_department_aborts_the_run() {
    let plan = AdmissionPlan::standard(3);
    let records = vec![record("Lost Soul", ExamScores::default(), &["Philosophy"])];

    match AdmissionEngine::new(&plan, records) {
        Err(AllocationError::UnknownDepartment { department, .. }) => {
            assert_eq!(department, "Philosophy")
        }
        Ok(_) => panic!("expected unknown department error"),
    }
}

#[test]
fn capacity_uniqueness_and_round_invariants_hold() {
    let plan = AdmissionPlan::standard(2);
    let catalog_names = ["Physics", "Chemistry", "Mathematics", "Engineering", "Biotech"];
    let mut records = Vec::new();
    for index in 0..40 {
        let base = (index * 37 % 50) as f64;
        let scores = ExamScores {
            physics: 50.0 + base,
            chemistry: 100.0 - base,
            math: 40.0 + (index * 13 % 60) as f64,
            computer_science: 30.0 + (index * 7 % 70) as f64,
            special: (index * 11 % 100) as f64,
        };
        let preferences: Vec<&str> = (0..3)
            .map(|offset| catalog_names[(index + offset * 2) % catalog_names.len()])
            .collect();
        records.push(record(&format!("Applicant {index:02}"), scores, &preferences));
    }

    let outcome = AdmissionEngine::new(&plan, records.clone())
        .expect("engine builds")
        .run();

    let mut seen = HashSet::new();
    for roster in &outcome.departments {
        assert!(roster.admitted.len() <= roster.capacity);
        for entry in &roster.admitted {
            assert!(seen.insert(entry.name.clone()), "{} admitted twice", entry.name);
            let source = records
                .iter()
                .find(|record| record.name == entry.name)
                .expect("admitted applicant exists");
            assert_eq!(source.preferences[entry.round], roster.name);
        }
        let scores: Vec<f64> = roster.admitted.iter().map(|entry| entry.score).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    assert_eq!(seen.len() + outcome.unassigned.len(), 40);
    assert_eq!(outcome.totals.admitted, seen.len());
    assert_eq!(
        outcome.totals.admitted_per_round.iter().sum::<usize>(),
        seen.len()
    );
}

#[test]
fn identical_input_gives_identical_outcome() {
    let plan = AdmissionPlan::standard(1);
    let records = vec![
        record("Zed Same", physics_and_math(80.0, 80.0), &["Physics"]),
        record("Amy Same", physics_and_math(80.0, 80.0), &["Physics"]),
        record("Kim Same", physics_and_math(80.0, 80.0), &["Physics"]),
    ];

    let first = AdmissionEngine::new(&plan, records.clone())
        .expect("engine builds")
        .run();
    let second = AdmissionEngine::new(&plan, records.into_iter().rev().collect())
        .expect("engine builds")
        .run();

    assert_eq!(first.admitted_names("Physics"), ["Amy Same"]);
    assert_eq!(first, second);
}
