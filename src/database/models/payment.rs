use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::{Entity, SqlValue};
use crate::services::patch::impl_merge;

/// Checkout record with the uploaded transfer receipt in `image`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Payment {
    pub id: i64,
    pub user_id: i64,
    pub delivery_id: i64,
    pub total_price: i64,
    pub image: String,
    pub address: String,
    pub whatsapp: String,
    pub payment_status: String,
    pub delivery_name: String,
    pub resi: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdatePayment {
    pub delivery_id: i64,
    pub total_price: i64,
    pub address: String,
    pub whatsapp: String,
    pub payment_status: String,
    pub delivery_name: String,
    pub resi: String,
}

impl_merge!(
    Payment,
    UpdatePayment,
    [delivery_id, total_price, address, whatsapp, payment_status, delivery_name, resi]
);

impl Entity for Payment {
    const TABLE: &'static str = "payments";
    const LABEL: &'static str = "Payment";
    const COLUMNS: &'static [&'static str] = &[
        "user_id",
        "delivery_id",
        "total_price",
        "image",
        "address",
        "whatsapp",
        "payment_status",
        "delivery_name",
        "resi",
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
            self.delivery_id.into(),
            self.total_price.into(),
            self.image.clone().into(),
            self.address.clone().into(),
            self.whatsapp.clone().into(),
            self.payment_status.clone().into(),
            self.delivery_name.clone().into(),
            self.resi.clone().into(),
        ]
    }
}
