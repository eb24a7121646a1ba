//! Real orchestrator over mocked stores.
//!
//! The store clients are the production ones; only the actors behind them are replaced
//! by `MockClient`s, so these tests see exactly which store requests are made.

use actor_store::mock::{Call, MockClient};
use actor_store::FrameworkError;
use chrono::{Duration as ChronoDuration, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use storefront::clients::{AccountClient, CatalogClient, OrderStoreClient};
use storefront::context::RequestContext;
use storefront::contracts::OrderContract;
use storefront::error::ErrorKind;
use storefront::model::{Account, Order, OrderedProduct, Product, RequestedProduct};
use storefront::orchestrator::{OrderError, OrderService};

struct Harness {
    accounts: MockClient<Account>,
    catalog: MockClient<Product>,
    store: MockClient<Order>,
    service: OrderService,
}

impl Harness {
    fn new() -> Self {
        let accounts = MockClient::<Account>::new();
        let catalog = MockClient::<Product>::new();
        let store = MockClient::<Order>::new();
        let service = OrderService::new(
            Arc::new(AccountClient::new(accounts.client(), 100)),
            Arc::new(CatalogClient::new(catalog.client(), 100)),
            Arc::new(OrderStoreClient::new(store.client())),
        );
        Self {
            accounts,
            catalog,
            store,
            service,
        }
    }

    fn verify(&self) {
        self.accounts.verify();
        self.catalog.verify();
        self.store.verify();
    }
}

fn ctx() -> RequestContext {
    RequestContext::with_timeout(Duration::from_secs(3))
}

fn product(id: &str, price: Decimal) -> Product {
    Product::new(id, format!("{id} name"), format!("{id} description"), price)
}

fn stored_order(id: &str, minutes_ago: i64, product_ids: &[&str]) -> Order {
    Order {
        id: id.into(),
        account_id: "A1".into(),
        created_at: Utc::now() - ChronoDuration::minutes(minutes_ago),
        total_price: Decimal::new(product_ids.len() as i64, 0),
        products: product_ids
            .iter()
            .map(|pid| OrderedProduct {
                id: pid.to_string(),
                name: "stale".into(),
                description: "stale".into(),
                price: Decimal::ONE,
                quantity: 1,
            })
            .collect(),
    }
}

#[tokio::test]
async fn test_place_order_prices_and_persists() {
    let h = Harness::new();
    h.accounts.expect_get().return_ok(Some(Account::new("A1", "Ada")));
    h.catalog.expect_get_many().return_ok(vec![
        product("P1", Decimal::new(100, 1)),
        product("P2", Decimal::new(50, 1)),
    ]);
    h.store.expect_insert().return_ok("ignored".into());

    let order = h
        .service
        .place_order(
            &ctx(),
            "A1",
            vec![RequestedProduct::new("P1", 2), RequestedProduct::new("P2", 0)],
        )
        .await
        .unwrap();

    assert_eq!(order.account_id, "A1");
    assert_eq!(order.products.len(), 1);
    assert_eq!(order.products[0].id, "P1");
    assert_eq!(order.products[0].name, "P1 name");
    assert_eq!(order.products[0].quantity, 2);
    assert_eq!(order.total_price, Decimal::new(200, 1));
    assert!(order.created_at <= Utc::now());
    h.verify();

    // The catalog was asked for exactly the requested ids.
    let catalog_calls = h.catalog.take_calls();
    assert!(matches!(&catalog_calls[0], Call::GetMany(ids) if ids == &["P1", "P2"]));

    // What was stored is what was returned.
    let store_calls = h.store.take_calls();
    match &store_calls[0] {
        Call::Insert(stored) => assert_eq!(stored, &order),
        other => panic!("unexpected call {other:?}"),
    }
}

#[tokio::test]
async fn test_products_missing_from_catalog_are_dropped() {
    let h = Harness::new();
    h.accounts.expect_get().return_ok(Some(Account::new("A1", "Ada")));
    h.catalog
        .expect_get_many()
        .return_ok(vec![product("P1", Decimal::new(7, 0))]);
    h.store.expect_insert().return_ok("ignored".into());

    let order = h
        .service
        .place_order(
            &ctx(),
            "A1",
            vec![RequestedProduct::new("P9", 4), RequestedProduct::new("P1", 1)],
        )
        .await
        .unwrap();

    assert_eq!(order.products.len(), 1);
    assert_eq!(order.total_price, Decimal::new(7, 0));
    h.verify();
}

#[tokio::test]
async fn test_unknown_account_never_reaches_catalog_or_store() {
    let h = Harness::new();
    h.accounts.expect_get().return_ok(None);

    let err = h
        .service
        .place_order(&ctx(), "ghost", vec![RequestedProduct::new("P1", 1)])
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::AccountNotFound("ghost".into()));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(h.catalog.call_count(), 0);
    assert_eq!(h.store.call_count(), 0);
    h.verify();
}

#[tokio::test]
async fn test_account_store_failure_counts_as_not_found() {
    let h = Harness::new();
    h.accounts.expect_get().return_err(FrameworkError::ActorClosed);

    let err = h
        .service
        .place_order(&ctx(), "A1", vec![RequestedProduct::new("P1", 1)])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(h.store.call_count(), 0);
}

#[tokio::test]
async fn test_catalog_failure_aborts_without_put() {
    let h = Harness::new();
    h.accounts.expect_get().return_ok(Some(Account::new("A1", "Ada")));
    h.catalog
        .expect_get_many()
        .return_err(FrameworkError::ActorDropped);

    let err = h
        .service
        .place_order(&ctx(), "A1", vec![RequestedProduct::new("P1", 1)])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DownstreamUnavailable);
    assert_eq!(h.store.call_count(), 0);
    h.verify();
}

#[tokio::test]
async fn test_storage_failure_is_reported() {
    let h = Harness::new();
    h.accounts.expect_get().return_ok(Some(Account::new("A1", "Ada")));
    h.catalog
        .expect_get_many()
        .return_ok(vec![product("P1", Decimal::ONE)]);
    h.store
        .expect_insert()
        .return_err(FrameworkError::Conflict("dup".into()));

    let err = h
        .service
        .place_order(&ctx(), "A1", vec![RequestedProduct::new("P1", 1)])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::StorageError);
    h.verify();
}

#[tokio::test]
async fn test_empty_request_skips_catalog() {
    let h = Harness::new();
    h.accounts.expect_get().return_ok(Some(Account::new("A1", "Ada")));
    h.store.expect_insert().return_ok("ignored".into());

    let order = h.service.place_order(&ctx(), "A1", vec![]).await.unwrap();

    assert!(order.products.is_empty());
    assert_eq!(order.total_price, Decimal::ZERO);
    assert_eq!(h.catalog.call_count(), 0);
    h.verify();
}

#[tokio::test(start_paused = true)]
async fn test_slow_account_lookup_times_out_before_persisting() {
    let h = Harness::new();
    h.accounts
        .expect_get()
        .return_ok_after(Duration::from_secs(5), Some(Account::new("A1", "Ada")));

    let ctx = RequestContext::with_timeout(Duration::from_millis(100));
    let err = h
        .service
        .place_order(&ctx, "A1", vec![RequestedProduct::new("P1", 1)])
        .await
        .unwrap_err();

    assert_eq!(err, OrderError::Timeout);
    assert_eq!(h.catalog.call_count(), 0);
    assert_eq!(h.store.call_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_slow_catalog_times_out_without_put() {
    let h = Harness::new();
    h.accounts.expect_get().return_ok(Some(Account::new("A1", "Ada")));
    h.catalog
        .expect_get_many()
        .return_ok_after(Duration::from_secs(5), vec![product("P1", Decimal::ONE)]);

    let ctx = RequestContext::with_timeout(Duration::from_millis(100));
    let err = h
        .service
        .place_order(&ctx, "A1", vec![RequestedProduct::new("P1", 1)])
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Timeout);
    assert_eq!(h.store.call_count(), 0);
}

#[tokio::test]
async fn test_orders_for_account_uses_one_batched_lookup() {
    let h = Harness::new();
    // 50 orders with 4 distinct products each: 200 distinct ids.
    let orders: Vec<Order> = (0..50)
        .map(|i| {
            let ids: Vec<String> = (0..4).map(|j| format!("P{}", i * 4 + j)).collect();
            let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
            stored_order(&format!("O{i}"), 100 - i, &refs)
        })
        .collect();
    let catalog: Vec<Product> = (0..200)
        .map(|n| product(&format!("P{n}"), Decimal::new(n, 0)))
        .collect();
    h.store.expect_query().return_ok(orders);
    h.catalog.expect_get_many().return_ok(catalog);

    let read = h.service.orders_for_account(&ctx(), "A1").await.unwrap();

    assert_eq!(read.len(), 50);
    assert_eq!(h.catalog.call_count(), 1);
    match &h.catalog.take_calls()[0] {
        Call::GetMany(ids) => assert_eq!(ids.len(), 200),
        other => panic!("unexpected call {other:?}"),
    }

    // Lines show live catalog data; stored totals are untouched.
    let line = &read[1].products[2];
    assert_eq!(line.id, "P6");
    assert_eq!(line.name, "P6 name");
    assert_eq!(line.price, Decimal::new(6, 0));
    assert_eq!(read[1].total_price, Decimal::new(4, 0));
    h.verify();
}

#[tokio::test]
async fn test_shared_products_are_looked_up_once() {
    let h = Harness::new();
    h.store.expect_query().return_ok(vec![
        stored_order("O1", 2, &["P1", "P2"]),
        stored_order("O2", 1, &["P2", "P1"]),
    ]);
    h.catalog.expect_get_many().return_ok(vec![]);

    h.service.orders_for_account(&ctx(), "A1").await.unwrap();

    match &h.catalog.take_calls()[0] {
        Call::GetMany(ids) => assert_eq!(ids, &["P1", "P2"]),
        other => panic!("unexpected call {other:?}"),
    }
}

#[tokio::test]
async fn test_no_orders_means_no_catalog_call() {
    let h = Harness::new();
    h.store.expect_query().return_ok(vec![]);

    let read = h.service.orders_for_account(&ctx(), "A1").await.unwrap();

    assert!(read.is_empty());
    assert_eq!(h.catalog.call_count(), 0);
    h.verify();
}

#[tokio::test]
async fn test_catalog_failure_fails_the_read() {
    let h = Harness::new();
    h.store
        .expect_query()
        .return_ok(vec![stored_order("O1", 1, &["P1"])]);
    h.catalog
        .expect_get_many()
        .return_err(FrameworkError::ActorClosed);

    let err = h
        .service
        .orders_for_account(&ctx(), "A1")
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::Catalog(_)));
    h.verify();
}

#[tokio::test]
async fn test_total_overflow_is_rejected_without_put() {
    let h = Harness::new();
    h.accounts.expect_get().return_ok(Some(Account::new("A1", "Ada")));
    h.catalog
        .expect_get_many()
        .return_ok(vec![product("P1", Decimal::from_i128_with_scale(5 * 10i128.pow(28), 0))]);

    let err = h
        .service
        .place_order(&ctx(), "A1", vec![RequestedProduct::new("P1", 2)])
        .await
        .unwrap_err();

    assert!(matches!(err, OrderError::InvalidParameter(_)));
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert_eq!(h.store.call_count(), 0);
    h.verify();
}
