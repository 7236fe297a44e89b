//! 注册协调器
//!
//! 把上下文校验、按需创建记录、绑定与提交串成一个整体。
//! 整个"创建 / 检查 / 绑定 / 提交"序列都在同一把注册锁内执行，
//! 因此进程内的注册操作是线性一致的：对同一驱动，
//! 第一个看到未绑定状态的调用者完成绑定，其余调用者看到已注册。
//!
//! 注册锁与注册表都由创建者显式传入，多个协调器可以共享同一份状态。

use alloc::sync::Arc;
use sync::{WaitLock, WaitLockGuard};

use crate::binder::NetworkBinder;
use crate::context::CallerContext;
use crate::error::RegistrationError;
use crate::handle::{BindHandle, DriverHandle};
use crate::registry::DriverRegistry;
use crate::verifier::{ContextVerifier, LevelVerifier, RequiredLevel};

/// 进程范围的注册锁
pub type RegistrationLock = WaitLock<()>;

/// 加锁绑定例程的结果
enum BindOutcome {
    /// 本次调用完成了绑定
    Bound(BindHandle),
    /// 记录在此之前已经绑定
    AlreadyBound(BindHandle),
}

/// 注册协调器
pub struct RegistrationCoordinator {
    registry: Arc<DriverRegistry>,
    lock: Arc<RegistrationLock>,
    verifier: Arc<dyn ContextVerifier>,
    binder: Arc<dyn NetworkBinder>,
}

impl RegistrationCoordinator {
    /// 使用共享的注册表、注册锁以及外部协作者创建协调器
    pub fn new(
        registry: Arc<DriverRegistry>,
        lock: Arc<RegistrationLock>,
        verifier: Arc<dyn ContextVerifier>,
        binder: Arc<dyn NetworkBinder>,
    ) -> Self {
        RegistrationCoordinator {
            registry,
            lock,
            verifier,
            binder,
        }
    }

    /// 使用独立的注册表、注册锁和默认的 [`LevelVerifier`] 创建协调器
    pub fn with_binder(binder: Arc<dyn NetworkBinder>) -> Self {
        Self::new(
            Arc::new(DriverRegistry::new()),
            Arc::new(RegistrationLock::new(())),
            Arc::new(LevelVerifier::new()),
            binder,
        )
    }

    /// 协调器使用的注册表
    pub fn registry(&self) -> &Arc<DriverRegistry> {
        &self.registry
    }

    /// 显式注册客户端驱动
    ///
    /// 只能在 Passive 级别调用，可能阻塞。驱动已经注册（无论经由哪条路径）
    /// 时返回 [`RegistrationError::AlreadyRegistered`] 并输出诊断信息；
    /// 绑定失败时不提交任何状态，之后可以重试。
    pub fn register(
        &self,
        ctx: &CallerContext,
        driver: DriverHandle,
    ) -> Result<(), RegistrationError> {
        self.verify(ctx, RequiredLevel::Passive)?;

        let exclusive = self.lock.lock();
        match self.bind_if_needed(&exclusive, driver)? {
            BindOutcome::Bound(_) => Ok(()),
            BindOutcome::AlreadyBound(handle) => {
                log::error!(
                    "client {}: driver {:?} already registered as {:?}",
                    ctx.client(),
                    driver,
                    handle
                );
                Err(RegistrationError::AlreadyRegistered)
            }
        }
    }

    /// 隐式注册，在客户端创建依赖对象（适配器）时触发
    ///
    /// 已经注册的驱动视为成功。
    pub(crate) fn register_implicit(
        &self,
        ctx: &CallerContext,
        driver: DriverHandle,
    ) -> Result<(), RegistrationError> {
        self.verify(ctx, RequiredLevel::Passive)?;

        let exclusive = self.lock.lock();
        if let BindOutcome::AlreadyBound(handle) = self.bind_if_needed(&exclusive, driver)? {
            log::debug!("driver {:?} already registered as {:?}", driver, handle);
        }
        Ok(())
    }

    /// 查询驱动的绑定句柄
    ///
    /// 不获取注册锁，可以在 Dispatch 级别调用。调用者应当先完成注册；
    /// 从未注册的驱动返回 `Ok(None)`。
    pub fn resolve_handle(
        &self,
        ctx: &CallerContext,
        driver: DriverHandle,
    ) -> Result<Option<BindHandle>, RegistrationError> {
        self.verify(ctx, RequiredLevel::Dispatch)?;

        Ok(self
            .registry
            .get(driver)
            .and_then(|state| state.bound_handle()))
    }

    /// 驱动对象销毁：移除记录，已绑定时解除绑定
    pub(crate) fn teardown(&self, driver: DriverHandle) {
        let _exclusive = self.lock.lock();
        let Some(state) = self.registry.remove(driver) else {
            return;
        };
        if let Some(handle) = state.bound_handle() {
            log::info!("driver {:?} destroyed, unbinding {:?}", driver, handle);
            self.binder.unbind(driver, handle);
        }
    }

    fn verify(&self, ctx: &CallerContext, required: RequiredLevel) -> Result<(), RegistrationError> {
        if self.verifier.validate(ctx, required) {
            Ok(())
        } else {
            Err(RegistrationError::InvalidCallerContext)
        }
    }

    /// 显式与隐式路径共用的绑定例程，调用者必须持有注册锁
    fn bind_if_needed(
        &self,
        _exclusive: &WaitLockGuard<'_, ()>,
        driver: DriverHandle,
    ) -> Result<BindOutcome, RegistrationError> {
        let state = self.registry.get_or_create(driver);
        if let Some(handle) = state.bound_handle() {
            return Ok(BindOutcome::AlreadyBound(handle));
        }

        let handle = self.binder.bind(driver)?;
        let committed = state.commit(handle);
        debug_assert!(committed, "bound handle written outside the registration lock");
        log::info!("driver {:?} registered as {:?}", driver, handle);
        Ok(BindOutcome::Bound(handle))
    }
}
