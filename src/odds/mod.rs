pub mod bucket;
pub use bucket::*;

pub mod cache;
pub use cache::*;

pub mod distribution;
pub use distribution::*;

pub mod engine;
pub use engine::*;
