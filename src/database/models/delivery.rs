use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::{Entity, SqlValue};
use crate::services::patch::impl_merge;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Delivery {
    pub id: i64,
    pub name: String,
    pub whatsapp: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateDelivery {
    pub name: String,
    pub whatsapp: String,
}

impl_merge!(Delivery, UpdateDelivery, [name, whatsapp]);

impl Entity for Delivery {
    const TABLE: &'static str = "deliveries";
    const LABEL: &'static str = "Delivery";
    const COLUMNS: &'static [&'static str] = &["name", "whatsapp"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![self.name.clone().into(), self.whatsapp.clone().into()]
    }
}
