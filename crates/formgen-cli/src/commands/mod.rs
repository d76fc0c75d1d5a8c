pub mod check;
pub mod fields;
pub mod rule;
