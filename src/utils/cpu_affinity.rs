//! Thread pinning for timing runs.
//!
//! On Linux the thread's affinity mask is saved, narrowed to the core it is
//! currently running on, and restored when the guard drops. Elsewhere pinning
//! is a no-op and the guard reports itself as unpinned.

#[cfg(target_os = "linux")]
mod platform {
    use std::mem;

    /// Current affinity mask of the calling thread
    pub fn get_affinity() -> Option<libc::cpu_set_t> {
        unsafe {
            let mut set: libc::cpu_set_t = mem::zeroed();
            (libc::sched_getaffinity(0, mem::size_of::<libc::cpu_set_t>(), &mut set) == 0)
                .then_some(set)
        }
    }

    pub fn set_affinity(set: &libc::cpu_set_t) -> bool {
        unsafe { libc::sched_setaffinity(0, mem::size_of::<libc::cpu_set_t>(), set) == 0 }
    }

    pub fn single_core(core_id: usize) -> libc::cpu_set_t {
        unsafe {
            let mut set: libc::cpu_set_t = mem::zeroed();
            libc::CPU_ZERO(&mut set);
            libc::CPU_SET(core_id, &mut set);
            set
        }
    }

    pub fn current_cpu() -> Option<usize> {
        let cpu = unsafe { libc::sched_getcpu() };
        usize::try_from(cpu).ok()
    }

    pub fn core_count() -> Option<usize> {
        let n = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };
        usize::try_from(n).ok().filter(|&n| n > 0)
    }

    pub type Saved = libc::cpu_set_t;
}

#[cfg(not(target_os = "linux"))]
mod platform {
    pub type Saved = ();

    pub fn get_affinity() -> Option<Saved> {
        None
    }

    pub fn set_affinity(_set: &Saved) -> bool {
        false
    }

    pub fn single_core(_core_id: usize) -> Saved {}

    pub fn current_cpu() -> Option<usize> {
        None
    }

    pub fn core_count() -> Option<usize> {
        std::thread::available_parallelism().ok().map(|n| n.get())
    }
}

/// Number of online CPU cores
pub fn core_count() -> Option<usize> {
    platform::core_count()
}

/// RAII guard for CPU pinning - pins on creation, restores on drop.
///
/// ```ignore
/// {
///     let _pin = CpuPinGuard::new(); // Thread pinned
///     // ... timing measurements ...
/// } // Original affinity restored here
/// ```
pub struct CpuPinGuard {
    pinned_core: Option<usize>,
    saved: Option<platform::Saved>,
}

impl CpuPinGuard {
    /// Pin to the core the thread is currently running on, falling back to core 0.
    pub fn new() -> Self {
        let core = platform::current_cpu().unwrap_or(0);
        Self::with_core(core)
    }

    /// Pin to a specific core.
    pub fn with_core(core_id: usize) -> Self {
        let Some(saved) = platform::get_affinity() else {
            return Self {
                pinned_core: None,
                saved: None,
            };
        };

        let pinned = platform::set_affinity(&platform::single_core(core_id));
        Self {
            pinned_core: pinned.then_some(core_id),
            saved: Some(saved),
        }
    }

    /// Get the core ID this thread is pinned to, if any.
    pub fn core_id(&self) -> Option<usize> {
        self.pinned_core
    }

    /// Check if the thread was successfully pinned.
    pub fn is_pinned(&self) -> bool {
        self.pinned_core.is_some()
    }
}

impl Drop for CpuPinGuard {
    fn drop(&mut self) {
        if let (Some(_), Some(saved)) = (self.pinned_core, self.saved.as_ref()) {
            if !platform::set_affinity(saved) {
                log::warn!("failed to restore thread CPU affinity");
            }
        }
    }
}

impl Default for CpuPinGuard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_count() {
        assert!(core_count().is_some_and(|n| n >= 1));
    }

    #[test]
    fn test_pin_guard() {
        let guard = CpuPinGuard::new();
        if guard.is_pinned() {
            assert!(guard.core_id().is_some());
        }
        drop(guard);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_affinity_restored_on_drop() {
        let before = platform::get_affinity().map(|s| unsafe { libc::CPU_COUNT(&s) });
        {
            let _guard = CpuPinGuard::with_core(0);
        }
        let after = platform::get_affinity().map(|s| unsafe { libc::CPU_COUNT(&s) });
        assert_eq!(before, after);
    }
}
