//! Payment-method registry flows: ordering, removal, persistence and the
//! documented degrade-to-empty behavior on corrupt records.

use tamarind_client::AppState;
use tamarind_client::config::ClientConfig;
use tamarind_client::models::{PaymentMethod, UpiProvider, WalletKind};
use tamarind_client::store::keys;
use tamarind_core::PaymentMethodId;
use tamarind_integration_tests::TestContext;

#[tokio::test]
async fn saved_methods_list_newest_first_across_variants() {
    let ctx = TestContext::new().await;
    let payments = ctx.state.payments();

    let card = payments
        .add_card("4111111111111111", Some("Ada Lovelace"))
        .await
        .unwrap();
    let upi = payments
        .add_upi(UpiProvider::Phonepe, Some("ada@bank"))
        .await
        .unwrap();
    let wallet = payments.add_wallet(WalletKind::Amazonpay).await.unwrap();

    let methods = payments.list().await.unwrap();
    let ids: Vec<&PaymentMethodId> = methods.iter().map(PaymentMethod::id).collect();
    assert_eq!(ids, vec![wallet.id(), upi.id(), card.id()]);
}

#[tokio::test]
async fn remove_only_touches_the_matching_id() {
    let ctx = TestContext::new().await;
    let payments = ctx.state.payments();

    let a = payments.add_card("4111111111111111", None).await.unwrap();
    let b = payments.add_card("5500005555555559", None).await.unwrap();

    payments.remove(a.id()).await.unwrap();

    let methods = payments.list().await.unwrap();
    assert_eq!(methods.len(), 1);
    assert_eq!(methods.first().unwrap().id(), b.id());
}

#[tokio::test]
async fn remove_with_unknown_id_preserves_length_and_order() {
    let ctx = TestContext::new().await;
    let payments = ctx.state.payments();

    payments.add_card("4111111111111111", None).await.unwrap();
    payments.add_wallet(WalletKind::Amazonpay).await.unwrap();
    let before = payments.list().await.unwrap();

    payments
        .remove(&PaymentMethodId::new("upi_never_created"))
        .await
        .unwrap();
    assert_eq!(payments.list().await.unwrap(), before);
}

#[tokio::test]
async fn methods_persist_across_an_app_restart() {
    let ctx = TestContext::new().await;
    ctx.state
        .payments()
        .add_upi(UpiProvider::Gpay, None)
        .await
        .unwrap();

    let relaunched = AppState::new(ClientConfig::with_data_dir(ctx.data_dir()))
        .await
        .unwrap();
    let methods = relaunched.payments().list().await.unwrap();
    assert_eq!(methods.len(), 1);
    assert!(matches!(
        methods.first(),
        Some(PaymentMethod::Upi {
            provider: UpiProvider::Gpay,
            ..
        })
    ));
}

#[tokio::test]
async fn stored_record_uses_the_documented_wire_shape() {
    let ctx = TestContext::new().await;
    ctx.state
        .payments()
        .add_card("4111111111111111", None)
        .await
        .unwrap();

    let raw = ctx
        .state
        .store()
        .get(keys::PAYMENT_METHODS)
        .await
        .unwrap()
        .unwrap();
    let first = raw.as_array().unwrap().first().unwrap();
    assert_eq!(first["type"], "card");
    assert_eq!(first["last4"], "1111");
}

#[tokio::test]
async fn corrupt_record_degrades_to_empty_then_recovers_on_next_add() {
    let ctx = TestContext::new().await;
    std::fs::write(ctx.data_dir().join("payment_methods.json"), b"][").unwrap();

    let payments = ctx.state.payments();
    assert!(payments.list().await.unwrap().is_empty());

    // The next write replaces the corrupt blob entirely
    payments.add_wallet(WalletKind::Amazonpay).await.unwrap();
    assert_eq!(payments.list().await.unwrap().len(), 1);
}
