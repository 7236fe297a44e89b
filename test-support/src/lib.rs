//! 测试支持 crate
//!
//! 提供 Mock 实现和测试工具。仅用于宿主环境下的 `cargo test`，
//! 因此直接依赖 std。

pub mod logger;
pub mod mock;
