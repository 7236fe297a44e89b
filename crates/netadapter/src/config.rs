//! 配置常量

use crate::context::ClientVersion;

/// 合法客户端全局结构的签名（"NxPG"）
pub const CLIENT_GLOBALS_SIGNATURE: u32 = u32::from_le_bytes(*b"NxPG");

/// 支持的最低客户端版本
pub const MIN_CLIENT_VERSION: ClientVersion = ClientVersion::new(2, 0);

/// 当前实现的客户端版本，更高版本的客户端被拒绝
pub const CURRENT_CLIENT_VERSION: ClientVersion = ClientVersion::new(2, 4);
