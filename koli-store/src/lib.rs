pub mod app_config;
pub mod memory;

pub use app_config::AppConfig;
pub use memory::InMemoryOrderStore;
