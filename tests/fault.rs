use std::env;
use std::process::Command;

use simlog::{Category, Configuration, OutputStream, Routing};

const CHILD_ENV: &str = "SIMLOG_FAULT_CHILD";

/// Runs only inside the re-executed test binary.
#[test]
fn fault_child() {
    if env::var_os(CHILD_ENV).is_none() {
        return;
    }

    let category = Category::new("com.example.simlog", "fault");
    simlog::use_configuration(
        Configuration::default()
            .with_routing(Routing::Terminal)
            .with_colors(false)
            .with_standard_error(OutputStream::stderr()),
    );
    simlog::fault!(&category, "invariant", "broken");
}

#[test]
fn fault_logs_call_site_and_aborts() {
    let exe = env::current_exe().unwrap();
    let output = Command::new(exe)
        .args(["fault_child", "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fault.rs:"), "stderr was: {stderr}");
    assert!(stderr.contains("] invariant broken\n"), "stderr was: {stderr}");
}
