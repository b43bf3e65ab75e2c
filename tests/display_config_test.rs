use neuro_atlas::utils::validation::Validate;
use neuro_atlas::DisplayConfig;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_load_display_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[display]\nanimation_ms = 250\ncolor = false\nbar_width = 50\nchart_glyph = \"#\""
    )
    .unwrap();

    let config = DisplayConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.animation_ms(), 250);
    assert!(!config.color());
    assert_eq!(config.bar_width(), 50);
    assert_eq!(config.chart_glyph(), "#");
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = DisplayConfig::from_file("/nonexistent/display.toml").unwrap_err();
    assert!(matches!(err, neuro_atlas::AtlasError::IoError(_)));
}

#[test]
fn test_out_of_range_animation_rejected_after_load() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "[display]\nanimation_ms = 5000").unwrap();

    let config = DisplayConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = NamedTempFile::new().unwrap();
    let config = DisplayConfig::from_file(file.path()).unwrap();
    assert!(config.validate().is_ok());
    assert_eq!(config.animation_ms(), 300);
    assert_eq!(config.bar_width(), 40);
}
