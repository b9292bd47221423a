pub mod code_generator;
pub mod cookies;
