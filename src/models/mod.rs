pub mod item;
pub mod notification;
pub mod order;

pub use item::CatalogItem;
pub use notification::{Notification, NotificationStatus};
pub use order::{Order, OrderItem, OrderStatus};
