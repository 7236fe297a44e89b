//! 调用上下文校验
//!
//! 每个公开操作在触碰共享状态之前都先经过 [`ContextVerifier`]。
//! 校验策略本身可以替换，测试中通常注入 Mock 实现。

use sync::{ExecLevel, current_level};

use crate::config::{CLIENT_GLOBALS_SIGNATURE, CURRENT_CLIENT_VERSION, MIN_CLIENT_VERSION};
use crate::context::CallerContext;

/// 操作对调用者执行级别的要求
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredLevel {
    /// 操作可能阻塞，调用者必须处于 Passive 级别
    Passive,
    /// 操作不会阻塞，调用者不能高于 Dispatch 级别
    Dispatch,
}

impl RequiredLevel {
    /// 允许的最高执行级别
    pub const fn max_level(self) -> ExecLevel {
        match self {
            RequiredLevel::Passive => ExecLevel::Passive,
            RequiredLevel::Dispatch => ExecLevel::Dispatch,
        }
    }
}

/// 调用上下文校验器
pub trait ContextVerifier: Send + Sync {
    /// 调用者满足 `required` 且可信时返回 true
    fn validate(&self, ctx: &CallerContext, required: RequiredLevel) -> bool;
}

/// 默认校验器
///
/// 依次检查全局结构签名、客户端版本以及当前执行级别。
#[derive(Debug, Default, Clone, Copy)]
pub struct LevelVerifier;

impl LevelVerifier {
    /// 创建校验器
    pub const fn new() -> Self {
        LevelVerifier
    }
}

impl ContextVerifier for LevelVerifier {
    fn validate(&self, ctx: &CallerContext, required: RequiredLevel) -> bool {
        if ctx.signature() != CLIENT_GLOBALS_SIGNATURE {
            log::warn!(
                "verifier: client {} passed globals with bad signature {:#010x}",
                ctx.client(),
                ctx.signature()
            );
            return false;
        }

        let version = ctx.version();
        if version < MIN_CLIENT_VERSION || version > CURRENT_CLIENT_VERSION {
            log::warn!(
                "verifier: client {} targets unsupported version {} (supported {}..={})",
                ctx.client(),
                version,
                MIN_CLIENT_VERSION,
                CURRENT_CLIENT_VERSION
            );
            return false;
        }

        let level = current_level();
        if level > required.max_level() {
            log::warn!(
                "verifier: client {} called at {:?}, at most {:?} allowed",
                ctx.client(),
                level,
                required.max_level()
            );
            return false;
        }

        true
    }
}
