pub mod dispatch;
pub mod format;
pub mod run;
pub mod summarize;
