use std::sync::Arc;

use sqlx::PgPool;

use crate::auth::{AuthError, SessionKeys, SessionService};
use crate::config::AppConfig;
use crate::database::models::{Bank, Cart, Category, Delivery, Payment, Product, Setting, User};
use crate::database::{DatabaseManager, PgRepository, Store};
use crate::services::{CrudService, ObjectStorage};

/// One store per table.
pub struct Stores {
    pub users: Arc<dyn Store<User>>,
    pub products: Arc<dyn Store<Product>>,
    pub categories: Arc<dyn Store<Category>>,
    pub banks: Arc<dyn Store<Bank>>,
    pub deliveries: Arc<dyn Store<Delivery>>,
    pub payments: Arc<dyn Store<Payment>>,
    pub carts: Arc<dyn Store<Cart>>,
    pub settings: Arc<dyn Store<Setting>>,
}

impl Stores {
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            users: Arc::new(PgRepository::<User>::new(pool.clone())),
            products: Arc::new(PgRepository::<Product>::new(pool.clone())),
            categories: Arc::new(PgRepository::<Category>::new(pool.clone())),
            banks: Arc::new(PgRepository::<Bank>::new(pool.clone())),
            deliveries: Arc::new(PgRepository::<Delivery>::new(pool.clone())),
            payments: Arc::new(PgRepository::<Payment>::new(pool.clone())),
            carts: Arc::new(PgRepository::<Cart>::new(pool.clone())),
            settings: Arc::new(PgRepository::<Setting>::new(pool.clone())),
        }
    }
}

/// Shared, immutable request context handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: SessionService,
    pub storage: Arc<dyn ObjectStorage>,
    /// `None` when running without Postgres (tests).
    pub database: Option<DatabaseManager>,
    pub users: CrudService<User>,
    pub products: CrudService<Product>,
    pub categories: CrudService<Category>,
    pub banks: CrudService<Bank>,
    pub deliveries: CrudService<Delivery>,
    pub payments: CrudService<Payment>,
    pub carts: CrudService<Cart>,
    pub settings: CrudService<Setting>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        stores: Stores,
        storage: Arc<dyn ObjectStorage>,
        database: Option<DatabaseManager>,
    ) -> Result<Self, AuthError> {
        let keys = SessionKeys::new(&config.security.jwt_secret, config.security.session_ttl_secs())?;
        let sessions = SessionService::new(keys, Arc::clone(&stores.users));

        Ok(Self {
            config: Arc::new(config),
            sessions,
            storage,
            database,
            users: CrudService::new(stores.users),
            products: CrudService::new(stores.products),
            categories: CrudService::new(stores.categories),
            banks: CrudService::new(stores.banks),
            deliveries: CrudService::new(stores.deliveries),
            payments: CrudService::new(stores.payments),
            carts: CrudService::new(stores.carts),
            settings: CrudService::new(stores.settings),
        })
    }
}
