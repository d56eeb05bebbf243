mod barrier;
mod flow;
mod page;
mod submission;
mod vars;
mod view;

pub use barrier::*;
pub use flow::*;
pub use page::*;
pub use submission::*;
pub use vars::*;
pub use view::*;
