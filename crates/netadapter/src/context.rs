//! 调用上下文
//!
//! 客户端驱动每次调用公开接口时都携带自己的全局结构，
//! 其中的签名与版本用于识别伪造或不兼容的调用者。

use alloc::string::String;
use core::fmt;

use crate::config::CLIENT_GLOBALS_SIGNATURE;

/// 客户端编译时所针对的接口版本
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientVersion {
    /// 主版本号
    pub major: u16,
    /// 次版本号
    pub minor: u16,
}

impl ClientVersion {
    /// 构造版本号
    pub const fn new(major: u16, minor: u16) -> Self {
        ClientVersion { major, minor }
    }
}

impl fmt::Display for ClientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// 调用者上下文（客户端全局结构）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallerContext {
    signature: u32,
    client: String,
    version: ClientVersion,
}

impl CallerContext {
    /// 为客户端驱动创建合法的上下文
    pub fn new(client: impl Into<String>, version: ClientVersion) -> Self {
        Self::from_raw_parts(CLIENT_GLOBALS_SIGNATURE, client, version)
    }

    /// 使用任意签名构造上下文，调用者可能是伪造的
    pub fn from_raw_parts(signature: u32, client: impl Into<String>, version: ClientVersion) -> Self {
        CallerContext {
            signature,
            client: client.into(),
            version,
        }
    }

    /// 签名
    pub fn signature(&self) -> u32 {
        self.signature
    }

    /// 客户端驱动名称
    pub fn client(&self) -> &str {
        &self.client
    }

    /// 客户端接口版本
    pub fn version(&self) -> ClientVersion {
        self.version
    }
}
