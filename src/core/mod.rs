/*!
 * Core Module
 * Fundamental gate types and error handling
 */

pub mod errors;
pub mod id;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use errors::*;
pub use id::EntityId;
pub use types::Class;
