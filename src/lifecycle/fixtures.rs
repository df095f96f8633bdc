//! Startup data: two users and the three-item menu.
//!
//! Fixtures are inserted under fixed ids, so ids assigned afterwards continue
//! from the fixture count.

use crate::clients::{ProductClient, UserClient};
use crate::model::{Credentials, ProductDraft};
use anyhow::Context;
use rust_decimal::Decimal;
use tracing::info;

pub fn users() -> Vec<(u32, Credentials)> {
    vec![
        (1, Credentials::new("admin", "admin123")),
        (2, Credentials::new("user1", "password123")),
    ]
}

pub fn products() -> Vec<(u32, ProductDraft)> {
    vec![
        (1, ProductDraft::new("Burger", "Delicious beef burger", Decimal::new(1599, 2))),
        (2, ProductDraft::new("Pizza", "Margherita pizza", Decimal::new(1250, 2))),
        (3, ProductDraft::new("Salad", "Fresh garden salad", Decimal::new(899, 2))),
    ]
}

pub async fn seed_users(users: &UserClient) -> anyhow::Result<()> {
    for (id, credentials) in self::users() {
        users
            .seed(id, credentials)
            .await
            .with_context(|| format!("seeding user {id}"))?;
    }
    info!("Seeded users");
    Ok(())
}

pub async fn seed_products(products: &ProductClient) -> anyhow::Result<()> {
    for (id, draft) in self::products() {
        products
            .seed(id, draft)
            .await
            .with_context(|| format!("seeding product {id}"))?;
    }
    info!("Seeded products");
    Ok(())
}
