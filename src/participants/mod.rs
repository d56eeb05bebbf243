mod bot;
#[cfg(feature = "server")]
mod human;
mod participant;
mod scripted;

pub use bot::*;
#[cfg(feature = "server")]
pub use human::*;
pub use participant::*;
pub use scripted::*;
