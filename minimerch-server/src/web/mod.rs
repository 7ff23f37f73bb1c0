//! Web layer for the MiniMerch site.
//!
//! Provides JSON endpoints the site's forms and booking calendar call into.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
