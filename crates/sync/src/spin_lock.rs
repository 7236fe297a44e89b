//! 自旋锁
//!
//! 不会阻塞的互斥锁，基于 `lock_api` 构建。获取时把执行级别提升到
//! [`ExecLevel::Dispatch`]，提升前的级别保存在锁内，释放时恢复。
//! 因此调用者必须处于 Dispatch 或更低的级别，临界区内不能阻塞。

use core::hint;
use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::level::ExecLevel;
use crate::level_ops;

/// 自旋锁的底层实现
///
/// 持有者的原级别只由持有者读写，释放锁标志之前取出。
#[derive(Debug)]
pub struct RawSpinLock {
    locked: AtomicBool,
    saved_level: AtomicU8,
}

impl RawSpinLock {
    /// 创建一个未加锁的实例
    pub const fn new() -> Self {
        RawSpinLock {
            locked: AtomicBool::new(false),
            saved_level: AtomicU8::new(ExecLevel::Passive.as_raw()),
        }
    }

    fn acquire(&self) -> bool {
        self.locked
            .compare_exchange_weak(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
    }
}

impl Default for RawSpinLock {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: locked 标志通过 Acquire/Release 保证互斥与可见性
unsafe impl lock_api::RawMutex for RawSpinLock {
    #[allow(clippy::declare_interior_mutable_const)]
    const INIT: Self = RawSpinLock::new();

    // 执行级别属于当前线程，必须在获取锁的线程上释放
    type GuardMarker = lock_api::GuardNoSend;

    fn lock(&self) {
        // SAFETY: 原级别在 unlock 中恢复
        let previous = unsafe { level_ops().raise(ExecLevel::Dispatch) };
        while !self.acquire() {
            while self.locked.load(Ordering::Relaxed) {
                hint::spin_loop();
            }
        }
        self.saved_level.store(previous.as_raw(), Ordering::Relaxed);
    }

    fn try_lock(&self) -> bool {
        // SAFETY: 失败时立即恢复，成功时在 unlock 中恢复
        let previous = unsafe { level_ops().raise(ExecLevel::Dispatch) };
        if self
            .locked
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_ok()
        {
            self.saved_level.store(previous.as_raw(), Ordering::Relaxed);
            true
        } else {
            unsafe { level_ops().restore(previous) };
            false
        }
    }

    unsafe fn unlock(&self) {
        let previous = ExecLevel::from_raw(self.saved_level.load(Ordering::Relaxed))
            .unwrap_or(ExecLevel::Passive);
        self.locked.store(false, Ordering::Release);
        // SAFETY: previous 是获取锁时 raise 返回的值
        unsafe { level_ops().restore(previous) };
    }

    fn is_locked(&self) -> bool {
        self.locked.load(Ordering::Relaxed)
    }
}

/// 不可阻塞的互斥锁
pub type SpinLock<T> = lock_api::Mutex<RawSpinLock, T>;

/// [`SpinLock`] 的 RAII 保护器
pub type SpinLockGuard<'a, T> = lock_api::MutexGuard<'a, RawSpinLock, T>;
