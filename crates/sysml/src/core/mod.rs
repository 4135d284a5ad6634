//! Core building blocks shared by the model
//!
//! Errors, element identity, the key grammar, logging setup and the storage
//! trait diagram renderers program against.

mod database;
mod error;
mod ids;
mod key_syntax;
pub mod logging;

pub use database::*;
pub use error::*;
pub use ids::*;
pub use key_syntax::*;
pub use logging::*;
