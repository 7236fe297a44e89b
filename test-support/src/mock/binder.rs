//! 网络子系统绑定操作的 Mock 实现
//!
//! 分配递增的句柄，可以预先安排失败的状态码和每次绑定的延迟，
//! 并记录调用次数与解绑历史供断言使用。

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

/// 第一个分配出去的句柄值
pub const FIRST_HANDLE: usize = 0x1000;

/// Mock 的绑定操作
pub struct MockBinder {
    next_handle: AtomicUsize,
    bind_calls: AtomicUsize,
    delay_ms: AtomicU64,
    failures: Mutex<VecDeque<i32>>,
    unbound: Mutex<Vec<(usize, usize)>>,
}

impl MockBinder {
    pub fn new() -> Self {
        Self {
            next_handle: AtomicUsize::new(FIRST_HANDLE),
            bind_calls: AtomicUsize::new(0),
            delay_ms: AtomicU64::new(0),
            failures: Mutex::new(VecDeque::new()),
            unbound: Mutex::new(Vec::new()),
        }
    }

    /// 让下一次绑定以 `code` 失败，可多次调用排队
    pub fn fail_next(&self, code: i32) {
        self.failures.lock().unwrap().push_back(code);
    }

    /// 每次绑定前睡眠，用于放大竞争窗口
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::Relaxed);
    }

    /// 执行一次绑定，成功时返回新句柄，失败时返回排队的状态码
    pub fn bind_raw(&self, _driver: usize) -> Result<usize, i32> {
        self.bind_calls.fetch_add(1, Ordering::SeqCst);
        let delay = self.delay_ms.load(Ordering::Relaxed);
        if delay != 0 {
            thread::sleep(Duration::from_millis(delay));
        }
        if let Some(code) = self.failures.lock().unwrap().pop_front() {
            return Err(code);
        }
        Ok(self.next_handle.fetch_add(1, Ordering::SeqCst))
    }

    /// 记录一次解绑
    pub fn unbind_raw(&self, driver: usize, handle: usize) {
        self.unbound.lock().unwrap().push((driver, handle));
    }

    /// 已发生的绑定调用次数（含失败）
    pub fn bind_calls(&self) -> usize {
        self.bind_calls.load(Ordering::SeqCst)
    }

    /// 解绑历史，元素为 (driver, handle)
    pub fn unbound(&self) -> Vec<(usize, usize)> {
        self.unbound.lock().unwrap().clone()
    }
}

impl Default for MockBinder {
    fn default() -> Self {
        Self::new()
    }
}
