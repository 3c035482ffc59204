pub mod binder;
pub mod config;
pub mod constants;
pub mod error;
pub mod state;

pub use binder::*;
pub use config::MenuConfig;
pub use error::BindError;
pub use state::MenuState;
