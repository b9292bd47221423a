mod shorten;

pub use shorten::{shorten_handler, shorten_method_fallback};
