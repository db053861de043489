mod auth;
mod filter;

pub use fake::*;
pub use helper::*;
