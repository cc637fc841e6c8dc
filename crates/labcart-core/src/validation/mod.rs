//! Field validation for checkout and lab forms.
//!
//! Rules are pure functions over the text a user typed. Every field of a form
//! is evaluated independently; within one field the first failing rule wins.

mod forms;
mod lab_forms;
mod rules;

pub use forms::*;
pub use lab_forms::*;
pub use rules::*;
