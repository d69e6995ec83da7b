pub mod extract;
pub mod patch;
pub mod validation;
