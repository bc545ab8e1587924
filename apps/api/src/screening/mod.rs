//! Resume screening: multipart intake, the scoring pipeline, and the
//! admin/results endpoints around it.

pub mod handlers;
pub mod pipeline;
