#![cfg(target_os = "linux")]

use scope_console::global::{global_kind, is_worker_context};
use scope_console::GlobalKind;
use std::fs;

// Kernel thread names are truncated to 15 bytes.
const OBSERVER_THREAD: &str = "scope-console-o";

fn thread_names() -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir("/proc/self/task")
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .filter_map(|entry| fs::read_to_string(entry.path().join("comm")).ok())
                .map(|name| name.trim().to_string())
                .collect()
        })
        .unwrap_or_default();
    names.sort();
    names
}

#[test]
fn test_context_detection_spawns_no_threads() {
    let before = thread_names();

    assert!(!is_worker_context());
    assert_eq!(global_kind(), GlobalKind::WorkerSelf);

    let after = thread_names();
    assert!(
        !after.iter().any(|name| name == OBSERVER_THREAD),
        "context detection started the observer thread: before={before:?} after={after:?}"
    );
}
