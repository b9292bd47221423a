//! External integrations: the managed key-value store client.

pub mod store;
