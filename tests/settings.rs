// Runs as its own binary so it can own the global logger.

use std::sync::Mutex;

use craft_wasm::Settings;
use log::{LevelFilter, Log, Metadata, Record};

struct Recorder(Mutex<Vec<String>>);

impl Log for Recorder {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.0.lock().unwrap().push(format!("{} {}", record.level(), record.args()));
        }
    }

    fn flush(&self) {}
}

static RECORDER: Recorder = Recorder(Mutex::new(Vec::new()));

#[test]
fn unknown_query_keys_are_logged_before_the_requested_level_applies() {
    log::set_logger(&RECORDER).unwrap();
    // Nothing is enabled before the page loads its settings.
    log::set_max_level(LevelFilter::Off);

    let settings = Settings::load("?utm_source=newsletter&log=error").unwrap();
    assert_eq!(settings.log_level, LevelFilter::Error);
    assert_eq!(log::max_level(), LevelFilter::Error);

    let lines = RECORDER.0.lock().unwrap();
    assert!(
        lines.iter().any(|line| line.starts_with("WARN") && line.contains("utm_source")),
        "{lines:?}"
    );
}
