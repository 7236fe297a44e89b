//! 网络子系统绑定接口

use crate::error::BindError;
use crate::handle::{BindHandle, DriverHandle};

/// 把客户端驱动安装到网络子系统的外部操作
///
/// `bind` 可能很慢并且会阻塞。失败后重复调用是安全的，
/// 但对已经绑定成功的驱动再次调用是错误的，
/// 这一点由 [`crate::RegistrationCoordinator`] 保证。
pub trait NetworkBinder: Send + Sync {
    /// 绑定驱动，成功时返回子系统分配的句柄
    fn bind(&self, driver: DriverHandle) -> Result<BindHandle, BindError>;

    /// 驱动对象销毁时解除绑定
    fn unbind(&self, driver: DriverHandle, handle: BindHandle);
}
