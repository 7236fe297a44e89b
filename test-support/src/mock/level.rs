//! 执行级别的 Mock 实现
//!
//! 每个线程拥有独立的执行级别，初始为 0（Passive），
//! 这样并行运行的测试之间互不干扰。

use std::cell::Cell;

thread_local! {
    static LEVEL: Cell<u8> = const { Cell::new(0) };
}

/// Mock 的执行级别操作
pub struct MockLevelOps;

impl MockLevelOps {
    pub const fn new() -> Self {
        Self
    }

    /// 当前线程的执行级别
    pub fn current(&self) -> u8 {
        LEVEL.with(Cell::get)
    }

    /// 设置当前线程的执行级别，返回之前的值
    pub fn swap(&self, raw: u8) -> u8 {
        LEVEL.with(|level| level.replace(raw))
    }
}

impl Default for MockLevelOps {
    fn default() -> Self {
        Self::new()
    }
}

/// 全局 Mock 实例
pub static MOCK_LEVEL_OPS: MockLevelOps = MockLevelOps::new();
