//! HTTP shell: request decoding, the charge handler, and HTML rendering

pub mod handlers;
pub mod render;
pub mod router;

pub use handlers::AppState;
pub use router::build_router;
