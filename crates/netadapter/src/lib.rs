//! 网络适配器驱动注册核心
//!
//! 客户端驱动对象通过此 crate 与网络子系统建立一次性的绑定，
//! 之后其它组件可以通过驱动句柄查询绑定得到的句柄。
//!
//! - [`DriverRegistry`] - 驱动句柄到 [`DriverState`] 的映射表
//! - [`DriverState`] - 每个驱动的注册状态
//! - [`RegistrationCoordinator`] - 在注册锁下完成"按需创建 + 绑定"
//! - [`ContextVerifier`] - 调用上下文校验接口，默认实现为 [`LevelVerifier`]
//! - [`NetworkBinder`] - 网络子系统绑定接口
//! - [`DriverLifecycle`] - 驱动对象系统回调的生命周期钩子
//!
//! # 注册路径
//!
//! 显式路径 [`RegistrationCoordinator::register`] 与隐式路径
//! （创建适配器对象时的 [`DriverLifecycle::adapter_created`]）
//! 共用同一个加锁的绑定例程，每个驱动句柄最多绑定成功一次。
//!
//! # 执行级别
//!
//! 注册可能阻塞，只能在 Passive 级别调用；
//! [`RegistrationCoordinator::resolve_handle`] 不获取注册锁，可以在 Dispatch 级别调用。

#![no_std]

extern crate alloc;

pub mod binder;
pub mod config;
pub mod context;
pub mod coordinator;
pub mod error;
pub mod handle;
pub mod lifecycle;
pub mod registry;
pub mod state;
pub mod status;
pub mod verifier;

pub use binder::NetworkBinder;
pub use context::{CallerContext, ClientVersion};
pub use coordinator::{RegistrationCoordinator, RegistrationLock};
pub use error::{BindError, RegistrationError};
pub use handle::{BindHandle, DriverHandle};
pub use lifecycle::DriverLifecycle;
pub use registry::DriverRegistry;
pub use state::DriverState;
pub use status::Status;
pub use verifier::{ContextVerifier, LevelVerifier, RequiredLevel};

#[cfg(test)]
mod tests;
