//! 执行级别
//!
//! 描述调用者所处的执行上下文：Passive 级别可以阻塞，
//! Dispatch 级别不允许阻塞，只能使用自旋锁等非阻塞原语。

use crate::level_ops;

/// 执行级别，数值越大限制越多
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExecLevel {
    /// 普通线程上下文，允许阻塞
    Passive = 0,
    /// 异步过程调用上下文
    Apc = 1,
    /// 调度级别，禁止阻塞
    Dispatch = 2,
}

impl ExecLevel {
    /// 从原始数值转换，超出范围时返回 None
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(ExecLevel::Passive),
            1 => Some(ExecLevel::Apc),
            2 => Some(ExecLevel::Dispatch),
            _ => None,
        }
    }

    /// 转换为原始数值
    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// 该级别下是否允许阻塞
    pub const fn may_block(self) -> bool {
        matches!(self, ExecLevel::Passive)
    }
}

/// 获取当前执行级别
#[inline]
pub fn current_level() -> ExecLevel {
    level_ops().current_level()
}

/// 执行级别保护器，基于 RAII 实现。
///
/// 创建时把执行级别提升到指定值并保存之前的级别，
/// 销毁时恢复。
///
/// # 示例
/// ```ignore
/// {
///     let guard = LevelGuard::raise(ExecLevel::Dispatch);
///     // 此处不允许阻塞
/// } // 离开作用域，恢复之前的级别
/// ```
pub struct LevelGuard {
    previous: ExecLevel,
}

impl LevelGuard {
    /// 提升执行级别并返回保护器。
    ///
    /// 目标级别低于当前级别是调用者的错误。
    pub fn raise(level: ExecLevel) -> Self {
        debug_assert!(
            current_level() <= level,
            "LevelGuard::raise would lower the execution level"
        );
        // SAFETY: previous 会在 drop 时传给 restore，保证配对
        let previous = unsafe { level_ops().raise(level) };
        LevelGuard { previous }
    }

    /// 进入保护区之前的执行级别
    pub fn previous(&self) -> ExecLevel {
        self.previous
    }
}

impl Drop for LevelGuard {
    fn drop(&mut self) {
        // SAFETY: previous 是创建保护器时 raise 返回的值
        unsafe { level_ops().restore(self.previous) };
    }
}
