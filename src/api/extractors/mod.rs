//! Custom request extractors.

mod sanitize;
mod validated_json;

pub use sanitize::Sanitize;
pub use validated_json::ValidatedJson;
