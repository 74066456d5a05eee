pub mod config;
pub mod constants;
pub mod filters;
pub mod loader;
pub mod query;
pub mod store;
pub mod wave;

pub use config::*;
pub use filters::*;
pub use loader::*;
pub use query::*;
pub use store::*;
pub use wave::*;
