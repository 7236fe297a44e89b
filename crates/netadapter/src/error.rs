//! 注册错误类型
//!
//! 可通过 [`RegistrationError::to_status()`] 转换为返回给客户端驱动的状态码。

use thiserror::Error;

use crate::status::Status;

/// 网络子系统绑定失败，携带子系统返回的状态码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("network subsystem bind failed with status {0}")]
pub struct BindError(Status);

impl BindError {
    /// 由子系统状态码构造
    pub const fn new(status: Status) -> Self {
        BindError(status)
    }

    /// 子系统返回的状态码
    pub const fn status(&self) -> Status {
        self.0
    }
}

/// 注册与句柄查询的错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistrationError {
    /// 调用上下文校验失败（执行级别不符或调用者不可信）
    #[error("caller context failed verification")]
    InvalidCallerContext,
    /// 驱动已经绑定过
    #[error("driver is already registered")]
    AlreadyRegistered,
    /// 网络子系统绑定失败，状态码原样传递
    #[error(transparent)]
    Bind(#[from] BindError),
}

impl RegistrationError {
    /// 转换为状态码
    pub fn to_status(&self) -> Status {
        match self {
            RegistrationError::InvalidCallerContext => Status::INVALID_PARAMETER,
            RegistrationError::AlreadyRegistered => Status::INVALID_DEVICE_STATE,
            RegistrationError::Bind(err) => err.status(),
        }
    }
}
