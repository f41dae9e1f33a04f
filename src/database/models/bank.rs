use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::{Entity, SqlValue};
use crate::services::patch::impl_merge;

/// Bank account a seller accepts transfers on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Bank {
    pub id: i64,
    pub user_id: i64,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub bank_type: String,
    pub name: String,
    pub number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateBank {
    #[serde(rename = "type")]
    pub bank_type: String,
    pub name: String,
    pub number: String,
}

impl_merge!(Bank, UpdateBank, [bank_type, name, number]);

impl Entity for Bank {
    const TABLE: &'static str = "banks";
    const LABEL: &'static str = "Bank";
    const COLUMNS: &'static [&'static str] = &["user_id", "type", "name", "number"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.user_id.into(),
            self.bank_type.clone().into(),
            self.name.clone().into(),
            self.number.clone().into(),
        ]
    }
}
