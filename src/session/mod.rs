mod group;
mod grouping;
mod player;
mod rating;
mod role;
mod session;
mod subsession;

pub use group::*;
pub use grouping::*;
pub use player::*;
pub use rating::*;
pub use role::*;
pub use session::*;
pub use subsession::*;
