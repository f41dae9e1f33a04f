use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::{Entity, SqlValue};
use crate::services::patch::impl_merge;

/// Storefront profile shown on the landing page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Setting {
    pub id: i64,
    pub image: String,
    pub description: String,
    pub contact: String,
    pub email: String,
    pub instagram: String,
    pub website: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// contact is not editable through the update endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateSetting {
    pub image: String,
    pub description: String,
    pub email: String,
    pub instagram: String,
    pub website: String,
}

impl_merge!(Setting, UpdateSetting, [image, description, email, instagram, website]);

impl Entity for Setting {
    const TABLE: &'static str = "settings";
    const LABEL: &'static str = "Setting";
    const COLUMNS: &'static [&'static str] = &[
        "image",
        "description",
        "contact",
        "email",
        "instagram",
        "website",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.image.clone().into(),
            self.description.clone().into(),
            self.contact.clone().into(),
            self.email.clone().into(),
            self.instagram.clone().into(),
            self.website.clone().into(),
        ]
    }
}
