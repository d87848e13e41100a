//! Rules module - Annotation rule tables and file categories

pub mod category;
pub mod table;

pub use category::{CommentSyntax, FileCategory};
pub use table::{first_match, rules_for, Rule, ANNOTATION_MARKER};
