use std::fs;
use std::rc::Rc;

use thermal_analyzer::commands::dispatch;
use thermal_analyzer::error::AnalyzerError;
use thermal_analyzer::logging::Logger;
use thermal_analyzer::toolkit::Toolkit;
use thermal_analyzer::toolkit::dataset::read_manifest;
use thermal_analyzer::toolkit::figures::FIGURE_INDEX;
use thermal_analyzer::toolkit::solver::{ModelSource, SOLUTION_FILE, read_solution};

#[path = "common/mod.rs"]
mod common;

fn run_with(log: Rc<Logger>, argv: &[&str]) -> Result<(), AnalyzerError> {
    let args = common::parse(argv);
    let mut toolkit = Toolkit::reference(Rc::clone(&log));
    dispatch(&args, &mut toolkit, &log)
}

fn run(argv: &[&str]) -> Result<(), AnalyzerError> {
    run_with(common::quiet_logger(), argv)
}

#[test]
fn preprocess_simulate_visualize() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let layout = root.join("wafer.gds");
    fs::write(&layout, b"GDSII layout bytes").unwrap();

    let data_dir = root.join("data");
    let sol_dir = root.join("sol");
    let fig_dir = root.join("figs");
    let dataset = data_dir.join("wafer.dataset.json");
    let solution = sol_dir.join(SOLUTION_FILE);

    run(&[
        "preprocessGDS",
        "-g",
        layout.to_str().unwrap(),
        "-o",
        data_dir.to_str().unwrap(),
    ])
    .unwrap();
    let manifest = read_manifest(&dataset).unwrap();
    assert_eq!(manifest.source_bytes, 18);

    run(&[
        "simulate",
        "-g",
        dataset.to_str().unwrap(),
        "-r",
        "5",
        "-tm",
        "1.0",
        "-ts",
        "0.25",
        "-tp",
        "0.5",
        "-o",
        sol_dir.to_str().unwrap(),
    ])
    .unwrap();
    let written = read_solution(&solution).unwrap();
    assert_eq!(written.model.resolution, 5);
    assert_eq!(
        written.model.source,
        ModelSource::Dataset {
            path: dataset.clone(),
            crc32: manifest.crc32
        }
    );
    assert_eq!(written.time_points, vec![0.0, 0.25, 0.5, 0.75, 1.0]);

    run(&[
        "visualize",
        "-e",
        dataset.to_str().unwrap(),
        "-r",
        "5",
        "-lvw",
        "-lvt",
        "-t",
        "0.5",
        "-s",
        solution.to_str().unwrap(),
        "-o",
        fig_dir.to_str().unwrap(),
    ])
    .unwrap();
    let index: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(fig_dir.join(FIGURE_INDEX)).unwrap()).unwrap();
    let kinds: Vec<_> = index.as_object().unwrap().keys().cloned().collect();
    assert_eq!(kinds, vec!["emissivity", "length_vs_width", "length_vs_time"]);
}

#[test]
fn preprocessing_twice_gives_the_same_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let layout = dir.path().join("chip.gds");
    fs::write(&layout, b"cells").unwrap();
    let out = dir.path().join("out");
    let argv = [
        "preprocessGDS",
        "-g",
        layout.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ];

    run(&argv).unwrap();
    let first = fs::read(out.join("chip.dataset.json")).unwrap();
    run(&argv).unwrap();
    let second = fs::read(out.join("chip.dataset.json")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn json_preprocessing_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("out");

    let err = run(&["preprocessGDS", "-j", "file.json", "-o", out.to_str().unwrap()]).unwrap_err();

    assert!(matches!(err, AnalyzerError::NotImplemented(_)));
    assert!(!out.exists());
}

#[test]
fn missing_dataset_fails_the_simulation() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = dir.path().join("absent.dataset.json");
    let sol_dir = dir.path().join("sol");

    let err = run(&[
        "simulate",
        "-g",
        dataset.to_str().unwrap(),
        "-r",
        "5",
        "-tm",
        "1",
        "-ts",
        "0.1",
        "-tp",
        "0.5",
        "-o",
        sol_dir.to_str().unwrap(),
    ])
    .unwrap_err();

    assert!(matches!(err, AnalyzerError::InMode { mode: "simulate", .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(!sol_dir.exists());
}

#[test]
fn negative_time_step_is_reported_by_the_solver() {
    let dir = tempfile::tempdir().unwrap();
    let err = run(&[
        "simulate",
        "-t",
        "3",
        "-r",
        "5",
        "-tm",
        "1",
        "-ts",
        "-0.1",
        "-tp",
        "0.5",
        "-o",
        dir.path().to_str().unwrap(),
    ])
    .unwrap_err();

    assert!(err.to_string().contains("time_step must be positive"));
}

#[test]
fn log_file_records_info_while_console_defaults_to_status() {
    let dir = tempfile::tempdir().unwrap();
    let log_path = dir.path().join("run.log");
    let log = Rc::new(Logger::new(None, Some(log_path.as_path())).unwrap());

    let out = dir.path().to_str().unwrap();
    run_with(
        Rc::clone(&log),
        &[
            "simulate", "-t", "1", "-r", "2", "-tm", "1", "-ts", "0.5", "-tp", "0.1", "-o", out,
        ],
    )
    .unwrap();
    drop(log);

    let contents = fs::read_to_string(&log_path).unwrap();
    assert!(contents.contains("[TAZ][STATUS][Building test case 1 at 2 um]"));
    assert!(contents.contains("[TAZ][INFO][Solving 3 time points"));
    assert!(!contents.contains("[DEBUG]"));
}

#[test]
fn oversized_time_grid_is_rejected_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let sol_dir = dir.path().join("sol");

    let err = run(&[
        "simulate",
        "-t",
        "1",
        "-r",
        "5",
        "-tm",
        "1e300",
        "-ts",
        "1e-10",
        "-tp",
        "0.5",
        "-o",
        sol_dir.to_str().unwrap(),
    ])
    .unwrap_err();

    assert!(matches!(err, AnalyzerError::InMode { mode: "simulate", .. }));
    assert_eq!(err.exit_code(), 1);
    assert!(err.to_string().contains("time points"));
    assert!(!sol_dir.exists());
}
