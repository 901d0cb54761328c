use std::{fs, path::PathBuf};

use tempfile::tempdir;

use scrawl_cli::{Args, run};

/// Collects all .txt drawings from a directory
fn collect_drawings(dir: PathBuf) -> Vec<PathBuf> {
    let mut files = if let Ok(entries) = fs::read_dir(&dir) {
        entries
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| {
                path.is_file() && path.extension().and_then(|s| s.to_str()) == Some("txt")
            })
            .collect()
    } else {
        Vec::new()
    };

    files.sort();
    files
}

fn demos_path() -> PathBuf {
    // Demos are at workspace root, relative to workspace not the crate
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("demos")
}

#[test]
fn e2e_smoke_test_demos() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let demos = collect_drawings(demos_path());
    assert!(!demos.is_empty(), "No drawings found in demos/");

    let mut failed = Vec::new();

    for demo_path in &demos {
        let output_filename = format!("{}.svg", demo_path.file_stem().unwrap().to_string_lossy());
        let output_path = temp_dir.path().join(output_filename);

        let args = Args {
            input: demo_path.to_string_lossy().to_string(),
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        match run(&args) {
            Ok(()) => {
                let svg = fs::read_to_string(&output_path).expect("Output should be written");
                if !svg.contains("</svg>") {
                    failed.push((demo_path.clone(), "incomplete SVG".to_string()));
                }
            }
            Err(e) => failed.push((demo_path.clone(), e.to_string())),
        }
    }

    if !failed.is_empty() {
        eprintln!("\nDemos that failed:");
        for (path, err) in &failed {
            eprintln!("  - {}: {}", path.display(), err);
        }
        panic!("{} demo(s) failed unexpectedly", failed.len());
    }

    println!("All {} demos passed", demos.len());
}

#[test]
fn e2e_missing_input_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = Args {
        input: temp_dir.path().join("absent.txt").to_string_lossy().to_string(),
        output: temp_dir.path().join("out.svg").to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
}

#[test]
fn e2e_explicit_config_is_used() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[style]\nbackground_color = \"#eeeeee\"\n").unwrap();
    let input_path = temp_dir.path().join("box.txt");
    fs::write(&input_path, "+--+\n|  |\n+--+\n").unwrap();
    let output_path = temp_dir.path().join("box.svg");

    let args = Args {
        input: input_path.to_string_lossy().to_string(),
        output: output_path.to_string_lossy().to_string(),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    run(&args).expect("Run should succeed");
    let svg = fs::read_to_string(&output_path).unwrap();
    assert!(svg.contains("#eeeeee"));
}
