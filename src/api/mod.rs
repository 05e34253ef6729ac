pub mod handlers;
pub mod page;
pub mod routes;
pub mod state;

pub use routes::{create_halted_router, create_router};
pub use state::AppState;
