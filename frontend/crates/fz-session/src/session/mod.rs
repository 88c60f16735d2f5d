pub(crate) mod error;
pub(crate) mod register_request;
pub(crate) mod session_manager;
pub(crate) mod session_state;

pub use error::{Result, SessionError};
pub use register_request::RegisterRequest;
pub use session_manager::SessionManager;
pub use session_state::SessionState;
