mod error_chain;
mod method_override;

pub use error_chain::{log_error_kind, render_error};
pub use method_override::method_override;
