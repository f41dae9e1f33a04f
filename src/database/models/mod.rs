pub mod bank;
pub mod cart;
pub mod category;
pub mod delivery;
pub mod payment;
pub mod product;
pub mod setting;
pub mod user;

pub use bank::{Bank, UpdateBank};
pub use cart::{Cart, UpdateCart};
pub use category::{Category, UpdateCategory};
pub use delivery::{Delivery, UpdateDelivery};
pub use payment::{Payment, UpdatePayment};
pub use product::{Product, UpdateProduct};
pub use setting::{Setting, UpdateSetting};
pub use user::{UpdateUser, User};
