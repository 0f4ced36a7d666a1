//! Tests for TOML configuration loading.

use gridplay::{GameConfig, SnakeSpeed};
use gridplay_tictactoe::Side;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_full_file_loads() {
    let file = write_config(
        r#"
[tictactoe]
board_size = 4
run_length = 3
first_side = "O"
policy_side = "X"
seed = 42

[snake]
grid_size = 20
speed = "fastest"
food_points = 5
seed = 7
"#,
    );

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.tictactoe().board_size(), 4);
    assert_eq!(*config.tictactoe().first_side(), Side::O);
    assert_eq!(*config.tictactoe().seed(), Some(42));
    assert_eq!(*config.snake().speed(), SnakeSpeed::Fastest);
    assert_eq!(config.snake().speed().interval(), Duration::from_millis(100));
    assert_eq!(*config.snake().food_points(), 5);
}

#[test]
fn test_missing_fields_take_defaults() {
    let file = write_config("[snake]\ngrid_size = 8\n");

    let config = GameConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.snake().grid_size(), 8);
    assert_eq!(*config.snake().speed(), SnakeSpeed::Normal);
    assert_eq!(*config.snake().food_points(), 10);
    assert_eq!(config.tictactoe(), GameConfig::default().tictactoe());
}

#[test]
fn test_empty_file_is_default() {
    let file = write_config("");
    assert_eq!(GameConfig::from_file(file.path()).unwrap(), GameConfig::default());
}

#[test]
fn test_inconsistent_values_rejected() {
    let file = write_config("[tictactoe]\nboard_size = 3\nrun_length = 4\n");
    let err = GameConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("run_length"));

    let file = write_config("[snake]\ngrid_size = 1\n");
    assert!(GameConfig::from_file(file.path()).is_err());
}

#[test]
fn test_unknown_speed_rejected() {
    let err = GameConfig::from_toml_str("[snake]\nspeed = \"ludicrous\"\n").unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_missing_file_reports_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GameConfig::from_file(dir.path().join("absent.toml")).unwrap_err();
    assert!(err.message.starts_with("Failed to read config file"));
}
