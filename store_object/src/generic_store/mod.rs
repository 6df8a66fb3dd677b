pub mod core;
pub mod session;
pub mod store_object;

pub use self::core::GenericStore;
pub use session::Session;
