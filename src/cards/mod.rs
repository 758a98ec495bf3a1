pub mod composition;
pub use composition::*;

pub mod hand;
pub use hand::*;

pub mod rank;
pub use rank::*;

pub mod shoe;
pub use shoe::*;
