pub mod samples;
pub mod streamline;
