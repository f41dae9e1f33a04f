use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::{Entity, SqlValue};
use crate::services::patch::impl_merge;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub id: i64,
    pub user_id: i64,
    pub category_id: i64,
    pub name: String,
    /// Durable URL returned by object storage.
    pub image: String,
    pub description: String,
    pub price: i64,
    pub stock: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Owner is fixed at creation and cannot be changed here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateProduct {
    pub category_id: i64,
    pub name: String,
    pub image: String,
    pub description: String,
    pub price: i64,
    pub stock: i64,
}

impl_merge!(Product, UpdateProduct, [category_id, name, image, description, price, stock]);

impl Entity for Product {
    const TABLE: &'static str = "products";
    const LABEL: &'static str = "Product";
    const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "category_id",
        "name",
        "image",
        "description",
        "price",
        "stock",
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
            self.category_id.into(),
            self.name.clone().into(),
            self.image.clone().into(),
            self.description.clone().into(),
            self.price.into(),
            self.stock.into(),
        ]
    }
}
