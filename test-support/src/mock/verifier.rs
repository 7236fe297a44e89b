//! 调用上下文校验的 Mock 实现
//!
//! 分别控制"可阻塞"与"不可阻塞"两类要求是否放行，并统计校验次数。

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

/// Mock 的上下文校验器
pub struct MockVerifier {
    allow_passive: AtomicBool,
    allow_dispatch: AtomicBool,
    calls: AtomicUsize,
}

impl MockVerifier {
    /// 全部放行
    pub fn new() -> Self {
        Self {
            allow_passive: AtomicBool::new(true),
            allow_dispatch: AtomicBool::new(true),
            calls: AtomicUsize::new(0),
        }
    }

    /// 全部拒绝
    pub fn deny_all() -> Self {
        let verifier = Self::new();
        verifier.set_allow_passive(false);
        verifier.set_allow_dispatch(false);
        verifier
    }

    pub fn set_allow_passive(&self, allow: bool) {
        self.allow_passive.store(allow, Ordering::SeqCst);
    }

    pub fn set_allow_dispatch(&self, allow: bool) {
        self.allow_dispatch.store(allow, Ordering::SeqCst);
    }

    /// 执行一次校验，`may_block` 为 true 表示调用方要求可阻塞的上下文
    pub fn check(&self, may_block: bool) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if may_block {
            self.allow_passive.load(Ordering::SeqCst)
        } else {
            self.allow_dispatch.load(Ordering::SeqCst)
        }
    }

    /// 已发生的校验次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for MockVerifier {
    fn default() -> Self {
        Self::new()
    }
}
