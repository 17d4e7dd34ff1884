//! Networking modules for the backend form endpoints and the identity
//! provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles HTTP form posts, `form_payload` owns field serialization,
//! `identity` binds the federated provider, and `types` defines the wire
//! schema shared by both collaborators.

pub mod api;
pub mod form_payload;
pub mod identity;
pub mod types;
