// Unit tests for the registration core.
//
// Collaborators come from `test-support`; this module implements the crate's traits for them
// and wires the per-thread mock execution level into `sync`.

extern crate std;

use alloc::sync::Arc;
use std::sync::Once;

use sync::{ExecLevel, LevelOps};
use test_support::mock::binder::MockBinder;
use test_support::mock::level::MOCK_LEVEL_OPS;
use test_support::mock::verifier::MockVerifier;

use crate::config::CURRENT_CLIENT_VERSION;
use crate::{
    BindError, BindHandle, CallerContext, ContextVerifier, DriverHandle, DriverRegistry,
    NetworkBinder, RegistrationCoordinator, RegistrationLock, RequiredLevel, Status,
};

mod resolve;

impl NetworkBinder for MockBinder {
    fn bind(&self, driver: DriverHandle) -> Result<BindHandle, BindError> {
        self.bind_raw(driver.as_raw())
            .map(|raw| BindHandle::from_raw(raw).expect("mock handles are non-zero"))
            .map_err(|code| BindError::new(Status::from_raw(code)))
    }

    fn unbind(&self, driver: DriverHandle, handle: BindHandle) {
        self.unbind_raw(driver.as_raw(), handle.as_raw());
    }
}

impl ContextVerifier for MockVerifier {
    fn validate(&self, _ctx: &CallerContext, required: RequiredLevel) -> bool {
        self.check(required == RequiredLevel::Passive)
    }
}

/// 把 mock 的按线程执行级别接入 sync
struct TestLevelOps;

impl LevelOps for TestLevelOps {
    fn current_level(&self) -> ExecLevel {
        ExecLevel::from_raw(MOCK_LEVEL_OPS.current()).unwrap_or(ExecLevel::Dispatch)
    }

    unsafe fn raise(&self, level: ExecLevel) -> ExecLevel {
        ExecLevel::from_raw(MOCK_LEVEL_OPS.swap(level.as_raw())).unwrap_or(ExecLevel::Dispatch)
    }

    unsafe fn restore(&self, previous: ExecLevel) {
        MOCK_LEVEL_OPS.swap(previous.as_raw());
    }

    fn relax(&self) {
        std::thread::yield_now();
    }
}

static TEST_LEVEL_OPS: TestLevelOps = TestLevelOps;
static INSTALL: Once = Once::new();

/// 注册按线程的执行级别实现，重复调用是安全的
pub(crate) fn install_level_ops() {
    // SAFETY: TEST_LEVEL_OPS 是静态实例
    INSTALL.call_once(|| unsafe { sync::register_level_ops(&TEST_LEVEL_OPS) });
}

/// 协调器加上可供断言的 mock 协作者
pub(crate) struct Fixture {
    pub registry: Arc<DriverRegistry>,
    pub lock: Arc<RegistrationLock>,
    pub binder: Arc<MockBinder>,
    pub verifier: Arc<MockVerifier>,
    pub coordinator: RegistrationCoordinator,
}

impl Fixture {
    pub fn new() -> Self {
        install_level_ops();
        let registry = Arc::new(DriverRegistry::new());
        let lock = Arc::new(RegistrationLock::new(()));
        let binder = Arc::new(MockBinder::new());
        let verifier = Arc::new(MockVerifier::new());
        let coordinator = RegistrationCoordinator::new(
            registry.clone(),
            lock.clone(),
            verifier.clone(),
            binder.clone(),
        );
        Fixture {
            registry,
            lock,
            binder,
            verifier,
            coordinator,
        }
    }
}

pub(crate) fn ctx(client: &str) -> CallerContext {
    CallerContext::new(client, CURRENT_CLIENT_VERSION)
}

pub(crate) fn drv(raw: usize) -> DriverHandle {
    DriverHandle::from_raw(raw)
}

pub(crate) fn handle(raw: usize) -> BindHandle {
    BindHandle::from_raw(raw).unwrap()
}
