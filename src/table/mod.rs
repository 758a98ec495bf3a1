pub mod betting;
pub use betting::*;

pub mod context;
pub use context::*;

pub mod game;
pub use game::*;

pub mod round;
pub use round::*;

pub mod settlement;
pub use settlement::*;
