mod get_status;

pub use test_runner::run;
