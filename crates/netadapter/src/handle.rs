//! 不透明句柄类型

use core::fmt;
use core::num::NonZeroUsize;

/// 客户端驱动对象的句柄
///
/// 由驱动对象系统分配，本 crate 只把它当作键使用。
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DriverHandle(usize);

impl DriverHandle {
    /// 从原始值构造
    pub const fn from_raw(raw: usize) -> Self {
        DriverHandle(raw)
    }

    /// 原始值
    pub const fn as_raw(self) -> usize {
        self.0
    }
}

impl fmt::Debug for DriverHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DriverHandle({:#x})", self.0)
    }
}

/// 网络子系统在绑定成功后返回的句柄
///
/// 永远非零，`Option<BindHandle>` 与一个机器字等宽，0 表示尚未绑定。
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BindHandle(NonZeroUsize);

impl BindHandle {
    /// 从原始值构造，0 返回 None
    pub const fn from_raw(raw: usize) -> Option<Self> {
        match NonZeroUsize::new(raw) {
            Some(raw) => Some(BindHandle(raw)),
            None => None,
        }
    }

    /// 原始值
    pub const fn as_raw(self) -> usize {
        self.0.get()
    }
}

impl fmt::Debug for BindHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BindHandle({:#x})", self.0.get())
    }
}
