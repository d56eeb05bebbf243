mod admin;
mod export;
mod payment;
mod report;

pub use admin::*;
pub use export::*;
pub use payment::*;
pub use report::*;
