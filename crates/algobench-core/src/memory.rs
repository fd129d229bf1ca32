//! Best-effort process memory sampling.
//!
//! Reads the resident set size of the current process through `sysinfo`.
//! This is not an allocation counter: the allocator may hold on to freed
//! pages, and other threads in the process move the figure too. A delta can
//! therefore be zero or negative for a computation that did allocate.

use sysinfo::{Pid, ProcessesToUpdate, System};

/// Samples the resident memory of the current process.
pub struct MemoryProbe {
    system: System,
    pid: Pid,
}

impl MemoryProbe {
    /// Create a probe, or `None` if the platform cannot identify this process.
    #[must_use]
    pub fn new() -> Option<Self> {
        let pid = sysinfo::get_current_pid().ok()?;
        Some(Self {
            system: System::new(),
            pid,
        })
    }

    /// Current resident memory in bytes, if the platform reports it.
    pub fn resident_bytes(&mut self) -> Option<u64> {
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);
        self.system.process(self.pid).map(sysinfo::Process::memory)
    }
}

/// Signed difference `after - before`, saturating at the `i64` range.
#[must_use]
pub fn memory_delta(before: u64, after: u64) -> i64 {
    if after >= before {
        i64::try_from(after - before).unwrap_or(i64::MAX)
    } else {
        i64::try_from(before - after).map_or(i64::MIN, |d| -d)
    }
}
