pub mod items;
pub mod notifications;
pub mod orders;
pub mod summary;
