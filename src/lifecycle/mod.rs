//! Dialog session state management and host-event dispatch.

pub mod dispatcher;
pub mod session;

pub use dispatcher::LifecycleDispatcher;
pub use session::{Session, SessionState};
