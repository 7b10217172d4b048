use std::fs;

use libsfr::{process_file, Error, FrequencyReporter, ReportOptions};

#[test]
fn writes_report_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "a a b\n").unwrap();

    let processed = process_file(&input, ReportOptions::default()).unwrap();
    assert_eq!(processed.output, dir.path().join("notes_Output.csv"));
    assert_eq!(processed.stats.total_words(), 3);

    let report = fs::read_to_string(&processed.output).unwrap();
    assert_eq!(
        report,
        "\"Stem\", \"Frequency\", \"Rank\", \"Probability\"\n\
         \"a\", 2, 1, 0.666667\n\
         \"b\", 1, 2, 0.333333\n\
         \n\
         \"Total World Count\", \"Unique World Count\"\n\
         1, 1\n\
         2, 2\n"
    );
}

#[test]
fn empty_document_still_gets_a_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    fs::write(&input, " \n\t\n").unwrap();

    let processed = process_file(&input, ReportOptions::default()).unwrap();
    let report = fs::read_to_string(processed.output).unwrap();
    assert_eq!(report.lines().count(), 3);
    assert!(!report.contains("NaN"));
}

#[test]
fn missing_input_is_an_error_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.txt");

    let err = process_file(&input, ReportOptions::default()).unwrap_err();
    assert!(matches!(err, Error::ReadInput { ref path, .. } if *path == input));
    assert!(!dir.path().join("missing_Output.csv").exists());
}

#[test]
fn reporter_keeps_going_after_a_failure() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    fs::write(&good, "x y x").unwrap();

    let reporter = FrequencyReporter::new(vec![dir.path().join("nope.txt"), good.clone()]);
    let results = reporter.run();
    assert_eq!(results.len(), 2);
    assert!(results[0].is_err());
    let processed = results[1].as_ref().unwrap();
    assert_eq!(processed.input, good);
    assert_eq!(processed.stats.unique_positions(), &[1, 2]);
}

#[test]
fn directories_expand_to_text_files() {
    let dir = tempfile::tempdir().unwrap();
    let corpus = dir.path().join("corpus");
    fs::create_dir(&corpus).unwrap();
    fs::write(corpus.join("one.txt"), "alpha beta").unwrap();
    fs::write(corpus.join("two.txt"), "beta beta").unwrap();
    fs::write(corpus.join("readme.md"), "ignored").unwrap();
    let loose = dir.path().join("loose.txt");
    fs::write(&loose, "gamma").unwrap();

    let reporter = FrequencyReporter::from_paths([corpus.clone(), loose.clone()])
        .with_options(ReportOptions { top: 1 });
    assert_eq!(
        reporter.files(),
        &[corpus.join("one.txt"), corpus.join("two.txt"), loose]
    );

    assert_eq!(
        FrequencyReporter::from_directory(&corpus).files(),
        &[corpus.join("one.txt"), corpus.join("two.txt")]
    );

    let results = reporter.run();
    assert!(results.iter().all(|r| r.is_ok()));
    let report = fs::read_to_string(corpus.join("one_Output.csv")).unwrap();
    let (ranked, _) = report.split_once("\n\n").unwrap();
    assert_eq!(ranked.lines().count(), 2);
    assert!(ranked.ends_with("\"alpha\", 1, 1, 0.5"));
}

#[test]
fn frequency_ties_are_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ties.txt");
    fs::write(&input, "delta charlie bravo alpha delta charlie bravo alpha").unwrap();

    let processed = process_file(&input, ReportOptions::default()).unwrap();
    let report = fs::read_to_string(processed.output).unwrap();
    let stems = report
        .lines()
        .skip(1)
        .take(4)
        .map(|line| line.split(", ").next().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(stems, ["\"alpha\"", "\"bravo\"", "\"charlie\"", "\"delta\""]);
}
