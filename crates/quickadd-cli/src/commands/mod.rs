pub mod add;
pub mod parse;
