use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::{Entity, SqlValue};
use crate::services::patch::impl_merge;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Cart {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    /// Zero until the cart is checked out.
    pub payment_id: i64,
    pub quantity: i64,
    pub total_price: i64,
    #[serde(rename = "isActived")]
    pub is_active: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateCart {
    pub product_id: i64,
    pub payment_id: i64,
    pub quantity: i64,
    pub total_price: i64,
    #[serde(rename = "isActived")]
    pub is_active: String,
}

impl_merge!(Cart, UpdateCart, [product_id, payment_id, quantity, total_price, is_active]);

impl Entity for Cart {
    const TABLE: &'static str = "carts";
    const LABEL: &'static str = "Cart";
    const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "product_id",
        "payment_id",
        "quantity",
        "total_price",
        "is_active",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.user_id.into(),
            self.product_id.into(),
            self.payment_id.into(),
            self.quantity.into(),
            self.total_price.into(),
            self.is_active.clone().into(),
        ]
    }
}
