pub mod report;
pub mod sentiment;
