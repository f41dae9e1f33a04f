// handlers/mod.rs - one module per resource, plus shared request parsing.
//
// Which handlers sit behind the session gate is decided in `routes`.

pub mod auth;
pub mod banks;
pub mod carts;
pub mod categories;
pub mod deliveries;
pub mod payments;
pub mod products;
pub mod settings;
pub mod support;
pub mod system;
pub mod users;
