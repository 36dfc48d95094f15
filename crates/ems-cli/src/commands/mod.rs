pub mod calendar;
pub mod employees;
pub mod export;
pub mod import;
