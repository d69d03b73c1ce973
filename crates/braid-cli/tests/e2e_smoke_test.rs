use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::tempdir;

use braid::{BraidError, samples::Sample};
use braid_cli::{Args, run};

/// Demo documents live at the workspace root, not in the crate
fn demos_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
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

fn args_for(input: Option<&Path>, output: &Path) -> Args {
    Args {
        input: input.map(|path| path.to_string_lossy().to_string()),
        sample: None,
        brick: false,
        lenient: false,
        output: output.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
        summary: false,
    }
}

fn output_path(dir: &Path, input: &Path) -> PathBuf {
    dir.join(format!(
        "{}.svg",
        input.file_stem().unwrap().to_string_lossy()
    ))
}

#[test]
fn e2e_smoke_test_valid_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = collect_json_files(demos_dir());

    assert!(!demos.is_empty(), "No demos found in demos/");

    let mut failed = Vec::new();

    for demo in &demos {
        let output = output_path(temp_dir.path(), demo);
        let args = args_for(Some(demo), &output);

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output).expect("SVG written");
                assert!(svg.starts_with("<svg"), "{} is not an SVG", output.display());
            }
            Err(e) => failed.push((demo.clone(), e)),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed.len());
    }
}

#[test]
fn e2e_smoke_test_brick_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = collect_json_files(demos_dir().join("brick"));

    assert!(!demos.is_empty(), "No brick demos found in demos/brick/");

    for demo in &demos {
        let output = output_path(temp_dir.path(), demo);
        let args = Args {
            brick: true,
            ..args_for(Some(demo), &output)
        };

        if let Err(e) = run(&args) {
            panic!("{} failed: {e}", demo.display());
        }

        let svg = fs::read_to_string(&output).expect("SVG written");
        assert!(svg.contains("class=\"ring-arc\""));
    }
}

#[test]
fn e2e_smoke_test_error_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demos = collect_json_files(demos_dir().join("errors"));

    assert!(!demos.is_empty(), "No error demos found in demos/errors/");

    let mut unexpectedly_succeeded = Vec::new();

    for demo in &demos {
        let output = temp_dir.path().join(format!(
            "error_{}.svg",
            demo.file_stem().unwrap().to_string_lossy()
        ));
        let args = args_for(Some(demo), &output);

        match run(&args) {
            Ok(()) => unexpectedly_succeeded.push(demo.clone()),
            Err(err) => {
                assert!(
                    matches!(err, BraidError::Parse { .. }),
                    "{} should fail to parse, got {err}",
                    demo.display()
                );
                assert!(!output.exists(), "no SVG should be written on failure");
            }
        }
    }

    if !unexpectedly_succeeded.is_empty() {
        eprintln!("\nError demos that unexpectedly succeeded:");
        for path in &unexpectedly_succeeded {
            eprintln!("  - {}", path.display());
        }
        panic!(
            "{} error demo(s) succeeded unexpectedly",
            unexpectedly_succeeded.len()
        );
    }
}

#[test]
fn e2e_lenient_renders_invalid_references() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let demo = demos_dir().join("errors").join("unknown_target.json");
    let output = temp_dir.path().join("lenient.svg");

    let args = Args {
        lenient: true,
        ..args_for(Some(&demo), &output)
    };

    run(&args).expect("lenient mode should render");
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("1 NODES · 0 EDGES"));
}

#[test]
fn e2e_samples_render() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    for name in Sample::NAMES {
        let output = temp_dir.path().join(format!("{name}.svg"));
        let args = Args {
            sample: Some(name.parse().unwrap()),
            summary: true,
            ..args_for(None, &output)
        };

        run(&args).unwrap_or_else(|e| panic!("sample {name} failed: {e}"));
        assert!(output.exists());
    }
}

#[test]
fn e2e_missing_source_is_rejected() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let args = args_for(None, &temp_dir.path().join("none.svg"));

    assert!(matches!(run(&args), Err(BraidError::Config(_))));
}

#[test]
fn e2e_missing_input_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("missing.json");
    let args = args_for(Some(&missing), &temp_dir.path().join("out.svg"));

    assert!(matches!(run(&args), Err(BraidError::Io(_))));
}

#[test]
fn e2e_config_file_is_applied() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config = temp_dir.path().join("config.toml");
    fs::write(
        &config,
        "[style]\nbackground = \"#ffffff\"\nfont_family = \"Inter\"\n",
    )
    .unwrap();
    let output = temp_dir.path().join("styled.svg");

    let args = Args {
        sample: Some(Sample::Sequential),
        config: Some(config.to_string_lossy().to_string()),
        ..args_for(None, &output)
    };

    run(&args).expect("configured render");
    let svg = fs::read_to_string(&output).unwrap();
    assert!(svg.contains("font-family=\"Inter\""));
}
