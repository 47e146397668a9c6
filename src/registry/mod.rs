//! Registries: command identity and live handler subscriptions.

pub mod command_registry;
pub mod handler_registry;

pub use command_registry::CommandRegistry;
pub use handler_registry::HandlerRegistry;
