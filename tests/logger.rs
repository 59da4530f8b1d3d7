use std::fs;
use todolist::config::LoggingConfig;
use todolist::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(!logger.is_file_logging());

    logger.log("Test message".to_string());
    let logs = logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].contains("Test message"));
}

#[test]
fn test_logs_are_newest_first_and_clearable() {
    let logger = Logger::new();
    logger.log("first".to_string());
    logger.log("second".to_string());

    let logs = logger.get_logs();
    assert!(logs[0].ends_with("second"));
    assert!(logs[1].ends_with("first"));
    assert!(logs[0].starts_with('['));

    // Clones share the same buffer
    let clone = logger.clone();
    clone.clear();
    assert!(logger.get_logs().is_empty());
}

#[test]
fn test_file_logging_writes_records() {
    let dir = std::env::temp_dir().join("todolist_test_logger");
    let _ = fs::remove_dir_all(&dir);
    let path = dir.join("nested").join("todolist.log");

    let logger = Logger::with_log_file(&path, log::LevelFilter::Info).unwrap();
    assert!(logger.is_file_logging());
    assert_eq!(Logger::installed_log_file(), Some(path.as_path()));

    logger.log("Test message with file".to_string());
    log::debug!("below the configured level");

    let file_content = fs::read_to_string(&path).unwrap();
    assert!(file_content.contains("Test message with file"));
    assert!(file_content.contains("[INFO]"));
    assert!(!file_content.contains("below the configured level"));

    // Same path again is fine, another path is refused
    assert!(Logger::with_log_file(&path, log::LevelFilter::Info).is_ok());
    let other = dir.join("other.log");
    assert!(Logger::with_log_file(&other, log::LevelFilter::Info).is_err());
    assert!(!other.exists());
    assert_eq!(Logger::installed_log_file(), Some(path.as_path()));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_default_log_file_location() {
    let path = Logger::get_log_file_path().unwrap();
    assert!(path.ends_with("todolist/todolist.log"));
}
