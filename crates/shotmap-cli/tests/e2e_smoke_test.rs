use std::{fs, path::PathBuf};

use tempfile::tempdir;

use shotmap::ShotMapError;
use shotmap_cli::{Args, run};

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Collects all .json files from a directory
fn collect_json_files(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("json")
            })
            .collect()
    } else {
        Vec::new()
    };

    // Sort for consistent test output
    files.sort();
    files
}

fn args(events: PathBuf, lineups: Option<PathBuf>, output: PathBuf) -> Args {
    Args {
        events: events.to_string_lossy().to_string(),
        lineups: lineups.map(|path| path.to_string_lossy().to_string()),
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
        no_labels: false,
        compare: None,
        compare_lineups: None,
        compare_provider: None,
    }
}

#[test]
fn e2e_smoke_test_valid_matches() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut matches: Vec<PathBuf> = fs::read_dir(fixtures())
        .expect("fixtures directory")
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.join("events.json").is_file())
        .collect();
    matches.sort();

    assert!(!matches.is_empty(), "No match fixtures found");

    let mut failed = Vec::new();

    for match_dir in &matches {
        let lineups = match_dir.join("lineups.json");
        let output_path = temp_dir.path().join(format!(
            "{}.svg",
            match_dir.file_name().unwrap().to_string_lossy()
        ));

        let args = args(
            match_dir.join("events.json"),
            lineups.is_file().then_some(lineups),
            output_path.clone(),
        );

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("output written");
                assert!(svg.starts_with("<svg"), "{}", match_dir.display());
            }
            Err(e) => failed.push((match_dir.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nMatches that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} match(es) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_error_inputs() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let error_inputs = collect_json_files(fixtures().join("errors"));
    assert!(
        !error_inputs.is_empty(),
        "No error inputs found in fixtures/errors/"
    );

    let mut unexpectedly_succeeded = Vec::new();

    for events_path in &error_inputs {
        let output_path = temp_dir.path().join(format!(
            "error_{}.svg",
            events_path.file_stem().unwrap().to_string_lossy()
        ));

        let args = args(events_path.clone(), None, output_path.clone());
        match run(&args) {
            Ok(()) => unexpectedly_succeeded.push(events_path.clone()),
            Err(ShotMapError::Data { .. } | ShotMapError::InvalidData(_)) => {
                assert!(!output_path.exists(), "{}", events_path.display());
            }
            Err(other) => panic!("{}: unexpected error {other}", events_path.display()),
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError inputs that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error input(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_no_labels_flag() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("plain.svg");
    let match_dir = fixtures().join("barcelona_alaves");

    let mut args = args(
        match_dir.join("events.json"),
        Some(match_dir.join("lineups.json")),
        output_path.clone(),
    );
    args.no_labels = true;

    run(&args).expect("render without labels");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(!svg.contains("data-layer=\"text\""));
    assert!(svg.contains("data-layer=\"marker\""));
}

#[test]
fn e2e_explicit_config() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("shotmap.toml");
    fs::write(
        &config_path,
        "[plot]\nprovider = \"Open data\"\n\n[style]\nbackground_color = \"#f4f4f4\"\n",
    )
    .unwrap();

    let output_path = temp_dir.path().join("styled.svg");
    let mut args = args(
        fixtures().join("shots_only").join("events.json"),
        None,
        output_path.clone(),
    );
    args.config = Some(config_path.to_string_lossy().to_string());

    run(&args).expect("render with config");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("Open data expected goals (xG) for shots"));
    assert!(svg.contains("data-layer=\"background\""));
}

#[test]
fn e2e_missing_events_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args(
        temp_dir.path().join("missing.json"),
        None,
        temp_dir.path().join("out.svg"),
    );

    assert!(matches!(run(&args), Err(ShotMapError::Io(_))));
}

#[test]
fn e2e_comparison_map() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("comparison.svg");
    let match_dir = fixtures().join("barcelona_alaves");

    let mut args = args(
        match_dir.join("events.json"),
        Some(match_dir.join("lineups.json")),
        output_path.clone(),
    );
    args.compare = Some(
        fixtures()
            .join("shots_only")
            .join("events.json")
            .to_string_lossy()
            .to_string(),
    );
    args.compare_provider = Some("Second source".to_string());

    run(&args).expect("render comparison");

    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("\nExpected goals (xG) for shots\n"));
    assert!(svg.contains("\nStatsbomb\n"));
    assert!(svg.contains("\nSecond source\n"));
}

#[test]
fn e2e_comparison_with_broken_second_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("comparison.svg");
    let match_dir = fixtures().join("barcelona_alaves");

    let mut args = args(match_dir.join("events.json"), None, output_path.clone());
    args.compare = Some(
        fixtures()
            .join("errors")
            .join("malformed.json")
            .to_string_lossy()
            .to_string(),
    );

    assert!(matches!(run(&args), Err(ShotMapError::Data { .. })));
    assert!(!output_path.exists());
}
