pub mod flags;
pub mod logging;

pub mod probe;
pub mod report;
