//! 等待锁
//!
//! 可以在 Passive 级别下长时间持有的互斥锁，基于 `lock_api` 构建。
//! 与 [`crate::SpinLock`] 不同，获取等待锁不会提升执行级别，
//! 持有者可以在临界区内执行可能阻塞的操作。

use core::sync::atomic::{AtomicBool, Ordering};

use crate::level::{ExecLevel, current_level};
use crate::level_ops;

/// 等待锁的底层实现
///
/// 竞争时通过 [`crate::LevelOps::relax`] 让出执行权。
#[derive(Debug)]
pub struct RawWaitLock {
    locked: AtomicBool,
}

impl RawWaitLock {
    /// 创建一个未加锁的实例
    pub const fn new() -> Self {
        RawWaitLock {
            locked: AtomicBool::new(false),
        }
    }
}

impl Default for RawWaitLock {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: locked 标志通过 Acquire/Release 保证互斥与可见性
unsafe impl lock_api::RawMutex for RawWaitLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = RawWaitLock::new();

    type GuardMarker = lock_api::GuardSend;

    fn lock(&self) {
        debug_assert!(
            current_level() == ExecLevel::Passive,
            "WaitLock acquired above passive level"
        );
        while !self.try_lock() {
            while self.locked.load(Ordering::Relaxed) {
                level_ops().relax();
            }
        }
    }

    fn try_lock(&self) -> bool {
        self.locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }

    unsafe fn unlock(&self) {
        self.locked.store(false, Ordering::Release);
    }

    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

/// 可阻塞的互斥锁
pub type WaitLock<T> = lock_api::Mutex<RawWaitLock, T>;

/// [`WaitLock`] 的 RAII 保护器
pub type WaitLockGuard<'a, T> = lock_api::MutexGuard<'a, RawWaitLock, T>;

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::{sync::Arc, thread, time::Duration, vec::Vec};

    #[test]
    fn test_lock_does_not_change_level() {
        let lock = WaitLock::new(());
        let guard = lock.lock();
        assert!(lock.is_locked());
        assert_eq!(current_level(), ExecLevel::Passive);
        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_try_lock_while_held() {
        let lock = WaitLock::new(1);
        let guard = lock.lock();
        assert!(lock.try_lock().is_none());
        drop(guard);
        assert_eq!(*lock.try_lock().unwrap(), 1);
    }

    #[test]
    fn test_holders_are_exclusive() {
        let lock = Arc::new(WaitLock::new(Vec::new()));
        let handles: Vec<_> = (0..4)
            .map(|id| {
                let lock = lock.clone();
                thread::spawn(move || {
                    let mut guard = lock.lock();
                    guard.push(id);
                    // 持有期间睡眠模拟阻塞操作
                    thread::sleep(Duration::from_millis(2));
                    let len = guard.len();
                    assert_eq!(guard[len - 1], id);
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(lock.lock().len(), 4);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "WaitLock acquired above passive level")]
    fn test_lock_at_dispatch_panics() {
        let lock = WaitLock::new(());
        let _level = crate::LevelGuard::raise(ExecLevel::Dispatch);
        let _guard = lock.lock();
    }
}
