pub mod image;
pub mod object;
pub mod poll;
