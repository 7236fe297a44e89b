//! 状态码
//!
//! 与客户端驱动交互时使用的 32 位状态码，负数表示失败。

use core::fmt;

/// 32 位状态码
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Status(i32);

impl Status {
    /// 操作成功
    pub const SUCCESS: Status = Status(0);
    /// 参数或调用者不合法
    pub const INVALID_PARAMETER: Status = Status(0xC000_000Du32 as i32);
    /// 对象当前状态不允许该操作
    pub const INVALID_DEVICE_STATE: Status = Status(0xC000_0184u32 as i32);
    /// 资源不足
    pub const INSUFFICIENT_RESOURCES: Status = Status(0xC000_009Au32 as i32);

    /// 从原始值构造
    pub const fn from_raw(raw: i32) -> Self {
        Status(raw)
    }

    /// 原始值
    pub const fn as_raw(self) -> i32 {
        self.0
    }

    /// 是否表示成功
    pub const fn is_success(self) -> bool {
        self.0 >= 0
    }
}

impl fmt::Debug for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Status({:#010x})", self.0 as u32)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0 as u32)
    }
}
