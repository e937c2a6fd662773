//! Contract with the external text-generation capability: request shapes,
//! instruction builders, structured-output schemas, and the HTTP client.

pub mod client;
pub mod prompt;
pub mod schema;

pub use client::GenerationClient;
pub use schema::GeneratedScene;
