//! 驱动注册表
//!
//! 保存驱动句柄到 [`DriverState`] 的映射。内部使用自旋锁，
//! 查询不会阻塞，可以在 Dispatch 级别进行。

use alloc::collections::BTreeMap;
use alloc::sync::Arc;
use sync::SpinLock;

use crate::handle::DriverHandle;
use crate::state::DriverState;

/// 驱动注册表
///
/// 注册表拥有全部 [`DriverState`]，其它组件只能通过这里获取记录。
#[derive(Debug, Default)]
pub struct DriverRegistry {
    drivers: SpinLock<BTreeMap<DriverHandle, Arc<DriverState>>>,
}

impl DriverRegistry {
    /// 创建空注册表
    pub const fn new() -> Self {
        DriverRegistry {
            drivers: SpinLock::new(BTreeMap::new()),
        }
    }

    /// 获取驱动的记录，不存在时创建一个未注册的记录
    ///
    /// 对同一驱动重复调用返回同一个记录。
    pub fn get_or_create(&self, driver: DriverHandle) -> Arc<DriverState> {
        self.drivers
            .lock()
            .entry(driver)
            .or_insert_with(|| {
                log::debug!("registry: created state for {:?}", driver);
                Arc::new(DriverState::new(driver))
            })
            .clone()
    }

    /// 查询驱动的记录
    pub fn get(&self, driver: DriverHandle) -> Option<Arc<DriverState>> {
        self.drivers.lock().get(&driver).cloned()
    }

    /// 移除驱动的记录，仅在驱动对象销毁时使用
    pub fn remove(&self, driver: DriverHandle) -> Option<Arc<DriverState>> {
        self.drivers.lock().remove(&driver)
    }

    /// 记录数量
    pub fn len(&self) -> usize {
        self.drivers.lock().len()
    }

    /// 是否没有任何记录
    pub fn is_empty(&self) -> bool {
        self.drivers.lock().is_empty()
    }
}
