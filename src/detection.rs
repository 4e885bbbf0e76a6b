// src/detection.rs
//
// Single responsibility: choosing between terminal and system log.

//! Runtime environment detection
//!
//! Decides whether a message is printed to the terminal or sent to the
//! system log. Under a debugger (Xcode, lldb, gdb) the system log is what the
//! IDE console shows, so terminal passthrough is only used when nothing is
//! tracing the process and stdout is an interactive terminal.

use std::io::IsTerminal;

use once_cell::sync::Lazy;

use crate::config::Routing;

static DEBUGGER_ATTACHED: Lazy<bool> = Lazy::new(probe_debugger);

/// Output target for a single message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Passthrough to the configured standard output/error streams.
    Terminal,
    /// The category's system-log sink.
    System,
}

impl Route {
    /// Pure routing decision.
    #[must_use]
    pub fn resolve(routing: Routing, debugger_attached: bool, stdout_is_terminal: bool) -> Self {
        match routing {
            Routing::Terminal => Route::Terminal,
            Routing::System => Route::System,
            Routing::Auto if !debugger_attached && stdout_is_terminal => Route::Terminal,
            Routing::Auto => Route::System,
        }
    }

    /// Resolve against the live process environment.
    #[must_use]
    pub fn detect(routing: Routing) -> Self {
        match routing {
            Routing::Auto => Self::resolve(routing, is_debugger_attached(), is_stdout_terminal()),
            forced => Self::resolve(forced, false, false),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Route::Terminal)
    }
}

/// Whether a debugger is tracing this process. Probed once, then cached.
#[must_use]
pub fn is_debugger_attached() -> bool {
    *DEBUGGER_ATTACHED
}

/// Whether the process' standard output is a terminal. Checked on every call.
#[must_use]
pub fn is_stdout_terminal() -> bool {
    std::io::stdout().is_terminal()
}

#[cfg(target_os = "macos")]
fn probe_debugger() -> bool {
    // sys/proc.h
    const P_TRACED: libc::c_int = 0x0000_0800;

    let mut info: libc::kinfo_proc = unsafe { std::mem::zeroed() };
    let mut size = std::mem::size_of::<libc::kinfo_proc>();
    let mut mib = [
        libc::CTL_KERN,
        libc::KERN_PROC,
        libc::KERN_PROC_PID,
        unsafe { libc::getpid() },
    ];
    let rc = unsafe {
        libc::sysctl(
            mib.as_mut_ptr(),
            mib.len() as libc::c_uint,
            (&mut info as *mut libc::kinfo_proc).cast::<libc::c_void>(),
            &mut size,
            std::ptr::null_mut(),
            0,
        )
    };
    if rc != 0 {
        return false;
    }
    (info.kp_proc.p_flag & P_TRACED) != 0
}

#[cfg(target_os = "linux")]
fn probe_debugger() -> bool {
    std::fs::read_to_string("/proc/self/status")
        .map(|status| tracer_pid(&status).is_some_and(|pid| pid != 0))
        .unwrap_or(false)
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn probe_debugger() -> bool {
    false
}

/// Extracts `TracerPid` from the contents of `/proc/<pid>/status`.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn tracer_pid(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("TracerPid:"))
        .and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(false, true, Route::Terminal)]
    #[case(true, true, Route::System)]
    #[case(false, false, Route::System)]
    #[case(true, false, Route::System)]
    fn test_resolve_auto(#[case] debugger: bool, #[case] tty: bool, #[case] expected: Route) {
        assert_eq!(Route::resolve(Routing::Auto, debugger, tty), expected);
    }

    #[test]
    fn test_resolve_forced() {
        assert_eq!(Route::resolve(Routing::Terminal, true, false), Route::Terminal);
        assert_eq!(Route::resolve(Routing::System, false, true), Route::System);
    }

    #[test]
    fn test_detect_forced_ignores_environment() {
        assert!(Route::detect(Routing::Terminal).is_terminal());
        assert!(!Route::detect(Routing::System).is_terminal());
    }

    #[test]
    fn test_tracer_pid() {
        let status = "Name:\tcargo\nState:\tR (running)\nTracerPid:\t4242\nUid:\t0\n";
        assert_eq!(tracer_pid(status), Some(4242));
        assert_eq!(tracer_pid("TracerPid:\t0\n"), Some(0));
        assert_eq!(tracer_pid("Name:\tcargo\n"), None);
    }

    #[test]
    fn test_debugger_probe_is_stable() {
        assert_eq!(is_debugger_attached(), is_debugger_attached());
    }
}
