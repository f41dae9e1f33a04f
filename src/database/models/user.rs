use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::database::repository::{Entity, SqlValue};
use crate::services::patch::impl_merge;

/// Shop account. Doubles as the credential record for login.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Argon2 PHC string, or a legacy plaintext value.
    #[serde(skip_serializing, default)]
    pub password: String,
    pub whatsapp: String,
    pub gender: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct UpdateUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub whatsapp: String,
    pub gender: String,
    pub role: String,
}

impl_merge!(User, UpdateUser, [name, email, password, whatsapp, gender, role]);

impl Entity for User {
    const TABLE: &'static str = "users";
    const LABEL: &'static str = "User";
    const COLUMNS: &'static [&'static str] = &["name", "email", "password", "whatsapp", "gender", "role"];
    const UNIQUE: &'static [&'static str] = &["email"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.name.clone().into(),
            self.email.clone().into(),
            self.password.clone().into(),
            self.whatsapp.clone().into(),
            self.gender.clone().into(),
            self.role.clone().into(),
        ]
    }
}
