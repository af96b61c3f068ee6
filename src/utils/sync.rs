use std::sync::{Mutex, MutexGuard};

/// Lock, recovering the guard if a previous holder panicked. Every critical
/// section in this crate leaves its data consistent, so the poison flag
/// carries no information.
pub fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    match mutex.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}
