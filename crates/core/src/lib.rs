#![forbid(unsafe_code)]

pub mod error;
pub mod model;
pub mod pool;
pub mod time;

pub use error::ScopeError;
pub use pool::SentencePool;
pub use time::Clock;
