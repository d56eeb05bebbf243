mod settlement;

pub use settlement::*;
