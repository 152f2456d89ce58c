pub mod app;
pub mod format;
pub mod input;
pub mod logging;
pub mod report;
