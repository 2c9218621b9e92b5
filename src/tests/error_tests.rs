// Copyright (c) 2025 Lehua Authors
//
// Licensed under the MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)

//! Tests for the error module.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::data_structures::lehua_trie::{LehuaTrie, UncheckedKey};
use crate::error::{
    has_error_reporter, report_error, set_error_reporter, ConfigError, DictionaryError,
    ErrorContext, ErrorReporter, LehuaError, LehuaResult, TracingErrorReporter,
};

/// Test that error context can be created and displayed properly.
#[test]
fn test_error_context_display() {
    let error = LehuaError::Custom("test error".to_string());
    let context = ErrorContext::new(error, "test_component")
        .with_details("additional details")
        .with_trace("frame 0");

    let display_string = format!("{context}");
    assert!(display_string.contains("test error"));
    assert!(display_string.contains("test_component"));
    assert!(display_string.contains("additional details"));
    assert_eq!(context.trace.as_deref(), Some("frame 0"));
}

/// Test that component errors convert into the crate error.
#[test]
fn test_from_conversions() {
    fn trie_failure() -> LehuaResult<()> {
        let trie: LehuaTrie<char, ()> = LehuaTrie::new();
        let key = UncheckedKey::new(vec![Some('a'), Some('b'), Some('c'), None]);
        trie.get(&key)?;
        Ok(())
    }
    fn config_failure() -> LehuaResult<()> {
        let missing = PathBuf::from("missing.toml");
        ConfigLoader::new(Some(&missing), "TEST_ERROR").load()?;
        Ok(())
    }

    let error = trie_failure().unwrap_err();
    assert!(matches!(error, LehuaError::Trie(_)));
    assert!(error.to_string().contains("position 3"));

    let error = config_failure().unwrap_err();
    assert!(matches!(error, LehuaError::Config(ConfigError::FileNotFound(_))));
    assert!(error.to_string().contains("missing.toml"));
}

/// Test that nested errors keep their source message.
#[test]
fn test_nested_errors() {
    let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let error = LehuaError::from(DictionaryError::Io {
        path: PathBuf::from("words.csv"),
        source: io_error,
    });

    let error_string = format!("{error}");
    assert!(error_string.contains("words.csv"));
    assert!(error_string.contains("file not found"));
}

/// Mock error reporter for testing.
#[derive(Debug, Default)]
struct MockErrorReporter {
    reported_count: AtomicUsize,
}

impl MockErrorReporter {
    fn reported_count(&self) -> usize {
        self.reported_count.load(Ordering::SeqCst)
    }
}

impl ErrorReporter for MockErrorReporter {
    fn report(&self, _context: ErrorContext) {
        self.reported_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Test that the global error reporter receives reports.
///
/// This is the only test that installs a global reporter.
#[test]
fn test_global_error_reporter() {
    let reporter = Arc::new(MockErrorReporter::default());
    set_error_reporter(reporter.clone());
    assert!(has_error_reporter());

    let error = LehuaError::Custom("test error".to_string());
    report_error(ErrorContext::new(error, "test_component"));

    assert_eq!(reporter.reported_count(), 1);
}

/// Test that the default tracing error reporter can be used directly.
#[test]
fn test_tracing_error_reporter() {
    let reporter = TracingErrorReporter::new();
    let error = LehuaError::Custom("test error".to_string());

    // Just make sure this doesn't panic
    reporter.report(ErrorContext::new(error, "test_component"));
}
