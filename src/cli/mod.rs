pub mod check;
pub mod completions;
pub mod convert;
pub mod inspect;
