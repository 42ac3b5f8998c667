pub mod api;
pub mod guard;
pub mod session;
pub mod storage;

pub use guard::{RequireResource, RequireRole};
pub use session::{ResourceRef, Session, SessionStore};
pub use storage::{BrowserSessionStorage, MemoryStorage, SessionStorage};
