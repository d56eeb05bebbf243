mod actor;
mod room;

pub use actor::*;
pub use room::*;
