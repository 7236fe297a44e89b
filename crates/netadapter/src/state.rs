//! 驱动注册状态
//!
//! 注册状态完全由绑定句柄是否存在推导，不单独保存状态字段，
//! 因此不可能出现"已注册但没有句柄"的组合。

use core::sync::atomic::{AtomicUsize, Ordering};

use crate::handle::{BindHandle, DriverHandle};

/// 单个客户端驱动的注册记录
///
/// 只能由 [`crate::DriverRegistry`] 创建。绑定句柄只写一次：
/// 写入发生在注册锁内，读取不加锁，字长原子变量保证读者
/// 要么看到"未绑定"，要么看到最终值。
#[derive(Debug)]
pub struct DriverState {
    driver: DriverHandle,
    bound: AtomicUsize,
}

impl DriverState {
    pub(crate) const fn new(driver: DriverHandle) -> Self {
        DriverState {
            driver,
            bound: AtomicUsize::new(0),
        }
    }

    /// 记录所属的驱动句柄
    pub fn driver(&self) -> DriverHandle {
        self.driver
    }

    /// 绑定句柄，未注册时为 None
    pub fn bound_handle(&self) -> Option<BindHandle> {
        BindHandle::from_raw(self.bound.load(Ordering::Acquire))
    }

    /// 是否已经注册
    pub fn is_registered(&self) -> bool {
        self.bound_handle().is_some()
    }

    /// 写入绑定句柄，已经绑定过时不做修改并返回 false
    pub(crate) fn commit(&self, handle: BindHandle) -> bool {
        self.bound
            .compare_exchange(0, handle.as_raw(), Ordering::Release, Ordering::Relaxed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_unregistered() {
        let state = DriverState::new(DriverHandle::from_raw(1));
        assert_eq!(state.driver(), DriverHandle::from_raw(1));
        assert!(!state.is_registered());
        assert_eq!(state.bound_handle(), None);
    }

    #[test]
    fn test_commit_only_once() {
        let state = DriverState::new(DriverHandle::from_raw(2));
        let first = BindHandle::from_raw(0x10).unwrap();
        let second = BindHandle::from_raw(0x20).unwrap();

        assert!(state.commit(first));
        assert!(!state.commit(second));
        assert_eq!(state.bound_handle(), Some(first));
    }
}
