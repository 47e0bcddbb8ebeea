use aim_trends::data::loader::{build_dataset, SourceFile};
use aim_trends::state::AppState;
use aim_trends::{extract, fit_line};

fn stats(score: &str) -> String {
    format!("Kill #,Timestamp,Bot\n1,12:00:01.000,Target\n\nKills:,1\nScore:,{score}\nScenario:,X\n")
}

#[test]
fn extractor_contract() {
    let obs = extract("Foo - bar.csv", &stats("123.456")).unwrap();
    assert_eq!(obs.group, "Foo ");
    assert_eq!(obs.value, 123.5);

    assert!(extract("Foo.csv", &stats("123.456")).is_none());
    assert!(extract("Foo - bar.csv", "Kills:,1\n").is_none());
}

#[test]
fn regression_contract() {
    assert_eq!(
        fit_line(&[0.0, 1.0, 2.0, 3.0], &[1.0, 2.0, 3.0, 4.0]),
        vec![1.0, 2.0, 3.0, 4.0]
    );
    assert!(fit_line(&[], &[]).is_empty());
    assert!(fit_line(&[1.0, 2.0], &[1.0]).is_empty());
    assert_eq!(fit_line(&[0.0, 1.0, 2.0], &[5.0, 9.0, 4.0]).len(), 3);
}

#[test]
fn gridshot_batch_end_to_end() {
    let files = vec![
        SourceFile::new("Gridshot - 1.csv", stats("90.0")),
        SourceFile::new("Gridshot - 2.csv", stats("95.0")),
    ];
    let (dataset, report) = build_dataset(files, 20);
    assert_eq!(report.accepted, 2);

    let group = dataset.get("Gridshot ").unwrap();
    assert_eq!(group.scores(), vec![90.0, 95.0]);
    let fitted: Vec<f64> = group.fit_points().iter().map(|p| p.fitted_value).collect();
    assert_eq!(fitted, vec![90.0, 95.0]);
}

#[test]
fn only_the_latest_twenty_files_count() {
    let files: Vec<SourceFile> = (1..=25)
        .map(|i| SourceFile::new(format!("Scenario {i} - run.csv"), stats("50.0")))
        .collect();
    let (dataset, report) = build_dataset(files, 20);

    assert_eq!(report.dropped_by_cutoff, 5);
    let names: Vec<&str> = dataset.groups().iter().map(|g| g.name.as_str()).collect();
    let expected: Vec<String> = (6..=25).map(|i| format!("Scenario {i} ")).collect();
    assert_eq!(names, expected);
}

#[test]
fn second_batch_replaces_the_first() {
    let mut state = AppState::default();

    let (d1, r1) = build_dataset(
        vec![
            SourceFile::new("Gridshot - 1.csv", stats("90.0")),
            SourceFile::new("Tracking - 1.csv", stats("40.0")),
        ],
        20,
    );
    state.apply_batch(d1, r1);

    let (d2, r2) = build_dataset(vec![SourceFile::new("Tracking - 2.csv", stats("44.0"))], 20);
    state.apply_batch(d2, r2);

    let dataset = state.dataset().unwrap();
    assert!(dataset.get("Gridshot ").is_none());
    assert_eq!(dataset.get("Tracking ").unwrap().scores(), vec![44.0]);
}
