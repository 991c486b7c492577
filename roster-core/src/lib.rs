pub mod allocator;
pub mod errors;
pub mod handler;
pub mod models;

pub use allocator::*;
pub use errors::*;
pub use handler::*;
pub use models::*;
