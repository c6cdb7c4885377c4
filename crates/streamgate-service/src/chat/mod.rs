//! Chat between users and admins, plus the catalog assistant.

pub mod assistant;
pub mod service;

pub use assistant::AssistantService;
pub use service::ChatService;
