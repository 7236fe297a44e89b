//! 驱动对象生命周期钩子
//!
//! 驱动对象系统在以下时机回调：
//!
//! - 客户端创建适配器对象，而驱动尚未显式注册时，触发隐式注册
//! - 客户端驱动对象销毁时，移除注册记录

use crate::context::CallerContext;
use crate::coordinator::RegistrationCoordinator;
use crate::error::RegistrationError;
use crate::handle::DriverHandle;

/// 驱动对象系统使用的回调接口
pub trait DriverLifecycle: Send + Sync {
    /// 适配器对象创建时调用，按需完成注册
    ///
    /// 驱动已经注册时返回成功。
    fn adapter_created(
        &self,
        ctx: &CallerContext,
        driver: DriverHandle,
    ) -> Result<(), RegistrationError>;

    /// 驱动对象销毁时调用
    fn driver_destroyed(&self, driver: DriverHandle);
}

impl DriverLifecycle for RegistrationCoordinator {
    fn adapter_created(
        &self,
        ctx: &CallerContext,
        driver: DriverHandle,
    ) -> Result<(), RegistrationError> {
        self.register_implicit(ctx, driver)
    }

    fn driver_destroyed(&self, driver: DriverHandle) {
        self.teardown(driver);
    }
}
