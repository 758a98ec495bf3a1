pub mod action;
pub use action::*;

pub mod decision;
pub use decision::*;

pub mod tables;
pub use tables::*;
