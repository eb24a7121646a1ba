use anyhow::Context;
use rust_decimal::Decimal;
use storefront::config::SystemConfig;
use storefront::gateway::{
    AccountArgs, AccountInput, GraphRequest, MutationField, OrderInput, OrderProductInput,
    ProductArgs, ProductInput, QueryField,
};
use storefront::lifecycle::{setup_tracing, StorefrontSystem};
use tracing::{info, info_span, Instrument};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => SystemConfig::load(&path).with_context(|| format!("loading {path}"))?,
        None => SystemConfig::from_env()?,
    };
    setup_tracing(&config.log);

    let system = StorefrontSystem::start(&config);
    run_demo(&system)
        .instrument(info_span!("demo"))
        .await?;
    system
        .shutdown()
        .await
        .map_err(anyhow::Error::msg)?;
    Ok(())
}

async fn run_demo(system: &StorefrontSystem) -> anyhow::Result<()> {
    let gateway = &system.gateway;

    let account = gateway
        .create_account(AccountInput {
            name: "Ada Lovelace".into(),
        })
        .await?;
    let lamp = gateway
        .create_product(ProductInput {
            name: "Desk Lamp".into(),
            description: "Warm white, dimmable".into(),
            price: Decimal::new(1000, 2),
        })
        .await?;
    let cable = gateway
        .create_product(ProductInput {
            name: "USB Cable".into(),
            description: "Braided, two metres".into(),
            price: Decimal::new(500, 2),
        })
        .await?;
    info!(account_id = %account.id, "Seeded demo data");

    let placed = gateway
        .execute(GraphRequest::mutation().with_mutation(
            "order",
            MutationField::CreateOrder(OrderInput {
                account_id: account.id.clone(),
                products: vec![
                    OrderProductInput {
                        id: lamp.id.clone(),
                        quantity: 2,
                    },
                    OrderProductInput {
                        id: cable.id.clone(),
                        quantity: 1,
                    },
                ],
            }),
        ))
        .await;
    println!("{}", serde_json::to_string_pretty(&placed.to_json())?);

    let overview = gateway
        .execute(
            GraphRequest::query()
                .with_query(
                    "me",
                    QueryField::Accounts {
                        args: AccountArgs {
                            id: Some(account.id.clone()),
                            pagination: None,
                        },
                        with_orders: true,
                    },
                )
                .with_query(
                    "lamps",
                    QueryField::Products(ProductArgs {
                        query: Some("lmap".into()),
                        ..ProductArgs::default()
                    }),
                ),
        )
        .await;
    println!("{}", serde_json::to_string_pretty(&overview.to_json())?);
    Ok(())
}
