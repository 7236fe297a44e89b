//! 同步原语
//!
//! 向网络适配器注册核心提供执行级别模型以及两类锁：
//!
//! - [`SpinLock`] - 不会阻塞的自旋锁，持有期间执行级别提升到 [`ExecLevel::Dispatch`]
//! - [`WaitLock`] - 可以阻塞的等待锁，只能在 [`ExecLevel::Passive`] 下获取
//!
//! # 平台依赖
//!
//! 此 crate 通过 [`LevelOps`] trait 抽象执行级别的查询与切换。
//! 平台应在启动时调用 [`register_level_ops`] 注册实现；
//! 未注册时使用宿主环境下的默认实现（始终处于 Passive 级别）。

#![no_std]

mod level;
mod spin_lock;
mod wait_lock;

pub use level::*;
pub use spin_lock::*;
pub use wait_lock::*;

use core::sync::atomic::{AtomicUsize, Ordering};

/// 执行级别相关操作的 trait
///
/// 由平台层实现并注册，提供当前执行级别的查询与切换
pub trait LevelOps: Send + Sync {
    /// 获取当前执行上下文的级别
    fn current_level(&self) -> ExecLevel;

    /// 将当前执行级别提升到 `level`，返回提升前的级别
    ///
    /// # Safety
    /// 调用者必须在之后使用返回值调用 [`LevelOps::restore`]
    unsafe fn raise(&self, level: ExecLevel) -> ExecLevel;

    /// 恢复到之前保存的执行级别
    ///
    /// # Safety
    /// `previous` 必须是配对的 [`LevelOps::raise`] 返回的值
    unsafe fn restore(&self, previous: ExecLevel);

    /// 锁竞争时的退让操作
    fn relax(&self) {
        core::hint::spin_loop();
    }
}

/// 宿主环境下的默认实现
///
/// 没有真实的执行级别，始终报告 Passive，提升与恢复均为空操作
struct HostLevelOps;

impl LevelOps for HostLevelOps {
    fn current_level(&self) -> ExecLevel {
        ExecLevel::Passive
    }

    unsafe fn raise(&self, _level: ExecLevel) -> ExecLevel {
        ExecLevel::Passive
    }

    unsafe fn restore(&self, _previous: ExecLevel) {}
}

#[cfg(not(test))]
static HOST_LEVEL_OPS: HostLevelOps = HostLevelOps;

/// 全局执行级别操作实例（存储 fat pointer 的两个部分）
static LEVEL_OPS_DATA: AtomicUsize = AtomicUsize::new(0);
static LEVEL_OPS_VTABLE: AtomicUsize = AtomicUsize::new(0);

/// 注册执行级别操作实现
///
/// # Safety
/// 必须在单线程环境下调用，且只能调用一次，
/// 并且要早于任何锁或 [`LevelGuard`] 的使用
pub unsafe fn register_level_ops(ops: &'static dyn LevelOps) {
    let ptr = ops as *const dyn LevelOps;
    // SAFETY: fat pointer 的布局是 (data, vtable)
    let (data, vtable) =
        unsafe { core::mem::transmute::<*const dyn LevelOps, (usize, usize)>(ptr) };
    LEVEL_OPS_VTABLE.store(vtable, Ordering::Release);
    LEVEL_OPS_DATA.store(data, Ordering::Release);
}

/// 获取执行级别操作实例
///
/// 未注册时返回宿主环境的默认实现
#[inline]
pub fn level_ops() -> &'static dyn LevelOps {
    let data = LEVEL_OPS_DATA.load(Ordering::Acquire);
    let vtable = LEVEL_OPS_VTABLE.load(Ordering::Acquire);
    if data == 0 {
        #[cfg(test)]
        {
            extern crate test_support;
            return &test_support::mock::level::MOCK_LEVEL_OPS;
        }
        #[cfg(not(test))]
        return &HOST_LEVEL_OPS;
    }
    // SAFETY: data 和 vtable 是通过 register_level_ops 设置的有效指针
    unsafe { &*core::mem::transmute::<(usize, usize), *const dyn LevelOps>((data, vtable)) }
}
