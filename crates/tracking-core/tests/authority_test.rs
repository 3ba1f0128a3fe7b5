use chrono::{NaiveDate, NaiveDateTime};
use std::sync::Arc;
use tracking_core::mock::MockUpdater;
use tracking_core::{
    Order, OrderId, Stage, StatusCatalog, TransitionAuthority, TransitionError, UpdateError,
};

fn created_at() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 11, 3)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

fn order(id: u64, estado: &str) -> Order {
    Order::new(OrderId(id), created_at(), 89_900.0, estado)
}

fn authority(updater: &MockUpdater) -> TransitionAuthority<MockUpdater> {
    TransitionAuthority::new(Arc::new(StatusCatalog::standard()), updater.clone())
}

#[tokio::test]
async fn test_advance_from_procesando_writes_enviado() {
    let updater = MockUpdater::new();
    updater.expect_update(OrderId(1)).return_ok();
    let authority = authority(&updater);

    let change = authority.advance(&order(1, "Procesando"), true).await.unwrap();

    assert_eq!(change.status, "Enviado");
    assert_eq!(change.stage, Stage::Enviado);
    assert_eq!(change.previous, "Procesando");

    let calls = updater.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].order_id, OrderId(1));
    assert_eq!(calls[0].estado, "Enviado");
    assert_eq!(calls[0].expected.as_deref(), Some("Procesando"));
    updater.verify();
}

#[tokio::test]
async fn test_advance_walks_the_whole_lifecycle() {
    let updater = MockUpdater::new();
    for _ in 0..3 {
        updater.expect_update(OrderId(5)).return_ok();
    }
    let authority = authority(&updater);
    let mut current = order(5, "procesando");

    for expected in ["Enviado", "En Tránsito", "Entregado"] {
        let change = authority.advance(&current, true).await.unwrap();
        assert_eq!(change.status, expected);
        assert!(change.apply_to(&mut current));
    }

    let err = authority.advance(&current, true).await.unwrap_err();
    assert_eq!(err, TransitionError::AlreadyTerminal { order_id: OrderId(5) });
    assert_eq!(updater.call_count(), 3);
    updater.verify();
}

#[tokio::test]
async fn test_advance_on_entregado_is_terminal_regardless_of_permission() {
    let updater = MockUpdater::new();
    let authority = authority(&updater);

    for can_edit in [true, false] {
        let err = authority.advance(&order(2, "Entregado"), can_edit).await.unwrap_err();
        assert!(matches!(err, TransitionError::AlreadyTerminal { .. }));
    }
    assert_eq!(updater.call_count(), 0);
}

#[tokio::test]
async fn test_advance_without_permission_never_calls_updater() {
    let updater = MockUpdater::new();
    let authority = authority(&updater);

    for estado in ["Procesando", "Enviado", "En Tránsito", "Cancelado"] {
        let err = authority.advance(&order(3, estado), false).await.unwrap_err();
        assert_eq!(err, TransitionError::PermissionDenied);
    }
    assert_eq!(updater.call_count(), 0);
}

#[tokio::test]
async fn test_advance_on_unknown_status_is_unrecognized() {
    let updater = MockUpdater::new();
    let authority = authority(&updater);

    let err = authority.advance(&order(4, "Cancelado"), true).await.unwrap_err();

    assert_eq!(err, TransitionError::UnrecognizedStatus("Cancelado".to_string()));
    assert_eq!(updater.call_count(), 0);
}

#[tokio::test]
async fn test_lowercase_entregado_resolves_to_last_stage() {
    let updater = MockUpdater::new();
    let authority = authority(&updater);

    assert_eq!(authority.engine().current_index("entregado"), Some(3));
    assert_eq!(authority.engine().catalog().ordinal_of("Cancelado"), -1);
    let err = authority.advance(&order(6, "entregado"), true).await.unwrap_err();
    assert!(matches!(err, TransitionError::AlreadyTerminal { .. }));
}

#[tokio::test]
async fn test_jump_to_same_status_is_noop() {
    let updater = MockUpdater::new();
    let authority = authority(&updater);

    let err = authority
        .jump_to(&order(7, "En Tránsito"), "EN TRÁNSITO", true)
        .await
        .unwrap_err();

    assert_eq!(
        err,
        TransitionError::NoOp {
            order_id: OrderId(7),
            status: "En Tránsito".to_string()
        }
    );
    assert_eq!(updater.call_count(), 0);
}

#[tokio::test]
async fn test_jump_backward_is_allowed() {
    let updater = MockUpdater::new();
    updater.expect_update(OrderId(8)).return_ok();
    let authority = authority(&updater);

    let change = authority
        .jump_to(&order(8, "Enviado"), "Procesando", true)
        .await
        .unwrap();

    assert_eq!(change.stage, Stage::Procesando);
    assert_eq!(updater.calls()[0].estado, "Procesando");
    updater.verify();
}

#[tokio::test]
async fn test_jump_issues_exactly_one_call_in_any_direction() {
    let catalog = StatusCatalog::standard();
    for from in catalog.stages() {
        for to in catalog.stages().iter().filter(|to| to.stage != from.stage) {
            let updater = MockUpdater::new();
            updater.expect_update(OrderId(9)).return_ok();
            let authority = authority(&updater);

            let change = authority
                .jump_to(&order(9, &from.name), &to.name.to_lowercase(), true)
                .await
                .unwrap();

            assert_eq!(change.status, to.name);
            let calls = updater.calls();
            assert_eq!(calls.len(), 1);
            assert_eq!(calls[0].estado, to.name);
            updater.verify();
        }
    }
}

#[tokio::test]
async fn test_jump_out_of_terminal_and_unknown_states() {
    let updater = MockUpdater::new();
    updater.expect_update(OrderId(10)).return_ok();
    updater.expect_update(OrderId(11)).return_ok();
    let authority = authority(&updater);

    let from_terminal = authority
        .jump_to_stage(&order(10, "Entregado"), Stage::EnTransito, true)
        .await
        .unwrap();
    let from_unknown = authority
        .jump_to(&order(11, "Cancelado"), "Enviado", true)
        .await
        .unwrap();

    assert_eq!(from_terminal.status, "En Tránsito");
    assert_eq!(from_unknown.status, "Enviado");
    updater.verify();
}

#[tokio::test]
async fn test_jump_rejections_are_local() {
    let updater = MockUpdater::new();
    let authority = authority(&updater);

    let denied = authority
        .jump_to(&order(12, "Procesando"), "Entregado", false)
        .await
        .unwrap_err();
    let unknown_target = authority
        .jump_to(&order(12, "Procesando"), "Devuelto", true)
        .await
        .unwrap_err();

    assert_eq!(denied, TransitionError::PermissionDenied);
    assert_eq!(
        unknown_target,
        TransitionError::UnrecognizedStatus("Devuelto".to_string())
    );
    assert_eq!(updater.call_count(), 0);
}

#[tokio::test]
async fn test_update_failure_is_surfaced_without_retry() {
    let updater = MockUpdater::new();
    updater
        .expect_update(OrderId(13))
        .return_err(UpdateError::Rejected {
            status: 500,
            body: "Internal Server Error".to_string(),
        });
    let authority = authority(&updater);
    let cached = order(13, "Enviado");

    let err = authority.advance(&cached, true).await.unwrap_err();

    assert!(matches!(
        err,
        TransitionError::UpdateFailed(UpdateError::Rejected { status: 500, .. })
    ));
    assert!(!err.is_transient());
    assert_eq!(updater.call_count(), 1);
    assert_eq!(cached.estado, "Enviado");
    updater.verify();
}

#[tokio::test]
async fn test_transport_failure_is_transient() {
    let updater = MockUpdater::new();
    updater
        .expect_update(OrderId(14))
        .return_err(UpdateError::Transport("timed out".to_string()));
    let authority = authority(&updater);

    let err = authority
        .jump_to(&order(14, "Procesando"), "Entregado", true)
        .await
        .unwrap_err();

    assert!(err.is_transient());
    updater.verify();
}

#[test]
fn test_apply_to_ignores_other_orders() {
    let change = tracking_core::StatusChange {
        order_id: OrderId(1),
        previous: "Procesando".to_string(),
        stage: Stage::Enviado,
        status: "Enviado".to_string(),
    };
    let mut other = order(2, "Procesando");
    assert!(!change.apply_to(&mut other));
    assert_eq!(other.estado, "Procesando");
}
