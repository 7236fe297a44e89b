use super::*;
use crate::RegistrationError;
use sync::LevelGuard;
use test_support::mock::binder::FIRST_HANDLE;

#[test]
fn test_resolve_never_registered_is_empty() {
    let f = Fixture::new();

    assert_eq!(f.coordinator.resolve_handle(&ctx("resolve"), drv(10)), Ok(None));
    // 查询不会创建记录
    assert!(f.registry.is_empty());
}

#[test]
fn test_resolve_record_without_bind_is_empty() {
    let f = Fixture::new();
    f.registry.get_or_create(drv(11));

    assert_eq!(f.coordinator.resolve_handle(&ctx("resolve"), drv(11)), Ok(None));
}

#[test]
fn test_resolve_rejected_context() {
    let f = Fixture::new();
    f.coordinator.register(&ctx("resolve"), drv(12)).unwrap();
    f.verifier.set_allow_dispatch(false);

    assert_eq!(
        f.coordinator.resolve_handle(&ctx("resolve"), drv(12)),
        Err(RegistrationError::InvalidCallerContext)
    );
}

#[test]
fn test_resolve_does_not_take_registration_lock() {
    let f = Fixture::new();
    f.coordinator.register(&ctx("resolve"), drv(13)).unwrap();

    let _held = f.lock.lock();
    assert_eq!(
        f.coordinator.resolve_handle(&ctx("resolve"), drv(13)),
        Ok(Some(handle(FIRST_HANDLE)))
    );
}

#[test]
fn test_level_verifier_gates_by_execution_level() {
    install_level_ops();
    let binder = Arc::new(MockBinder::new());
    let coordinator = RegistrationCoordinator::with_binder(binder.clone());
    let client = ctx("level-verifier");

    {
        let _dispatch = LevelGuard::raise(ExecLevel::Dispatch);
        assert_eq!(
            coordinator.register(&client, drv(14)),
            Err(RegistrationError::InvalidCallerContext)
        );
    }
    assert_eq!(binder.bind_calls(), 0);
    assert!(coordinator.registry().is_empty());

    coordinator.register(&client, drv(14)).unwrap();

    let _dispatch = LevelGuard::raise(ExecLevel::Dispatch);
    assert_eq!(
        coordinator.resolve_handle(&client, drv(14)),
        Ok(Some(handle(FIRST_HANDLE)))
    );
}

#[test]
fn test_level_verifier_rejects_forged_globals() {
    install_level_ops();
    let binder = Arc::new(MockBinder::new());
    let coordinator = RegistrationCoordinator::with_binder(binder.clone());
    let forged = CallerContext::from_raw_parts(0, "forged", CURRENT_CLIENT_VERSION);

    assert_eq!(
        coordinator.register(&forged, drv(15)),
        Err(RegistrationError::InvalidCallerContext)
    );
    assert_eq!(
        coordinator.resolve_handle(&forged, drv(15)),
        Err(RegistrationError::InvalidCallerContext)
    );
    assert_eq!(binder.bind_calls(), 0);
}
