pub mod admission;
pub mod intake;
pub mod report;
