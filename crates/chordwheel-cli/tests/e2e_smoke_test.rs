use std::fs;

use tempfile::tempdir;

use chordwheel::color::Color;
use chordwheel_cli::{Args, run};

/// Sample texts covering tokenizer and layout edge cases
fn sample_texts() -> Vec<(&'static str, &'static str)> {
    vec![
        ("pangram", "the quick brown fox jumps over the lazy dog"),
        ("refrain", "round and round and round the wheel goes"),
        ("single", "solo"),
        ("blank", ""),
        ("punctuation", "stop. stop! stop? go"),
        ("repeated", "a a a a a a a a a a a a"),
    ]
}

#[test]
fn e2e_smoke_test_sample_texts() {
    // Create a temporary directory for test inputs and outputs
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let mut failed_samples = Vec::new();

    for (name, text) in sample_texts() {
        let input_path = temp_dir.path().join(format!("{name}.txt"));
        fs::write(&input_path, text).expect("Failed to write sample input");

        let output_path = temp_dir.path().join(format!("{name}.svg"));

        let args = Args {
            input: Some(input_path.to_string_lossy().to_string()),
            text: None,
            output: output_path.to_string_lossy().to_string(),
            config: None,
            log_level: "off".to_string(),
        };

        if let Err(e) = run(&args) {
            failed_samples.push((name, e));
            continue;
        }

        let markup = fs::read_to_string(&output_path).expect("Failed to read output SVG");
        assert!(
            markup.starts_with("<svg"),
            "{name} did not produce an SVG document"
        );
    }

    if !failed_samples.is_empty() {
        eprintln!("\nSample texts that failed:");
        for (name, err) in &failed_samples {
            eprintln!("  - {name}: {err}");
        }
        panic!("{} sample text(s) failed unexpectedly", failed_samples.len());
    }
}

#[test]
fn e2e_inline_text_renders_without_input_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output_path = temp_dir.path().join("inline.svg");

    let args = Args {
        input: None,
        text: Some("cat dog cat".to_string()),
        output: output_path.to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    run(&args).expect("Inline text should render");

    let markup = fs::read_to_string(&output_path).expect("Failed to read output SVG");
    assert!(markup.starts_with("<svg"));
    assert!(markup.ends_with("</svg>"));
    assert!(markup.contains("<textPath"));
}

#[test]
fn e2e_missing_input_file_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = Args {
        input: Some(
            temp_dir
                .path()
                .join("does-not-exist.txt")
                .to_string_lossy()
                .to_string(),
        ),
        text: None,
        output: temp_dir.path().join("out.svg").to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
}

#[test]
fn e2e_rejects_missing_source() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = Args {
        input: None,
        text: None,
        output: temp_dir.path().join("out.svg").to_string_lossy().to_string(),
        config: None,
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
}

#[test]
fn e2e_missing_explicit_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");

    let args = Args {
        input: None,
        text: Some("cat dog".to_string()),
        output: temp_dir.path().join("out.svg").to_string_lossy().to_string(),
        config: Some(
            temp_dir
                .path()
                .join("no-such-config.toml")
                .to_string_lossy()
                .to_string(),
        ),
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
}

#[test]
fn e2e_invalid_config_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "this is not toml [").expect("Failed to write config");

    let args = Args {
        input: None,
        text: Some("cat dog".to_string()),
        output: temp_dir.path().join("out.svg").to_string_lossy().to_string(),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
}

#[test]
fn e2e_config_values_reach_the_svg() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r##"
[style]
rim_color = "#123456"
chord_width = 7.5
"##,
    )
    .expect("Failed to write config");

    let output_path = temp_dir.path().join("styled.svg");
    let args = Args {
        input: None,
        text: Some("echo echo".to_string()),
        output: output_path.to_string_lossy().to_string(),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    run(&args).expect("Styled render should succeed");

    let markup = fs::read_to_string(&output_path).expect("Failed to read output SVG");
    assert!(markup.contains(r#"stroke-width="7.5""#));

    let rim_color = Color::new("#123456").expect("valid test color");
    assert!(markup.contains(&rim_color.to_string()));
}

#[test]
fn e2e_invalid_config_color_fails() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let config_path = temp_dir.path().join("config.toml");
    fs::write(
        &config_path,
        r#"
[style]
rim_color = "not-a-color"
"#,
    )
    .expect("Failed to write config");

    let args = Args {
        input: None,
        text: Some("cat dog".to_string()),
        output: temp_dir.path().join("out.svg").to_string_lossy().to_string(),
        config: Some(config_path.to_string_lossy().to_string()),
        log_level: "off".to_string(),
    };

    assert!(run(&args).is_err());
}
