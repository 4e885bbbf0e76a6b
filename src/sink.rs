// src/sink.rs
//
// Single responsibility: handing a finished line to the operating system's
// logger for one category.

use crate::level::Level;

#[cfg(target_os = "macos")]
mod platform {
    use oslog::OsLog;

    use crate::level::Level;

    pub struct Handle {
        log: OsLog,
    }

    impl Handle {
        pub fn new(subsystem: &str, category: &str) -> Self {
            Self {
                log: OsLog::new(subsystem, category),
            }
        }

        pub fn send(&self, level: Level, message: &str) {
            let level = match level {
                Level::Debug => oslog::Level::Debug,
                Level::Info => oslog::Level::Info,
                Level::Error => oslog::Level::Error,
                Level::Fault => oslog::Level::Fault,
            };
            self.log.with_level(level, message);
        }
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
mod platform {
    use std::ffi::CString;

    use crate::level::Level;

    pub struct Handle {
        label: String,
    }

    impl Handle {
        pub fn new(subsystem: &str, category: &str) -> Self {
            Self {
                label: format!("{subsystem}/{category}"),
            }
        }

        pub fn send(&self, level: Level, message: &str) {
            let priority = match level {
                Level::Debug => libc::LOG_DEBUG,
                Level::Info => libc::LOG_INFO,
                Level::Error => libc::LOG_ERR,
                Level::Fault => libc::LOG_CRIT,
            };
            let line = format!("{}: {}", self.label, message).replace('\0', "");
            let Ok(line) = CString::new(line) else {
                return;
            };
            // The message goes through "%s" so user text is never read as a format.
            unsafe {
                libc::syslog(
                    priority,
                    b"%s\0".as_ptr().cast::<libc::c_char>(),
                    line.as_ptr(),
                );
            }
        }
    }
}

#[cfg(not(unix))]
mod platform {
    use std::io::Write;

    use crate::level::Level;

    pub struct Handle {
        label: String,
    }

    impl Handle {
        pub fn new(subsystem: &str, category: &str) -> Self {
            Self {
                label: format!("{subsystem}/{category}"),
            }
        }

        pub fn send(&self, level: Level, message: &str) {
            let _ = writeln!(std::io::stderr(), "{} {}: {}", level, self.label, message);
        }
    }
}

/// The system-log handle owned by a [`Category`](crate::Category).
pub struct SystemSink {
    handle: platform::Handle,
}

impl SystemSink {
    pub fn new(subsystem: &str, category: &str) -> Self {
        Self {
            handle: platform::Handle::new(subsystem, category),
        }
    }

    pub fn send(&self, level: Level, message: &str) {
        self.handle.send(level, message);
    }
}

impl std::fmt::Debug for SystemSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_does_not_panic_on_nul() {
        let sink = SystemSink::new("com.example.simlog", "tests");
        sink.send(Level::Debug, "embedded \0 nul");
    }
}
