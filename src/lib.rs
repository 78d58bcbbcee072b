pub mod config;
pub mod demo;
pub mod report;

pub use combat;
pub use items;
pub use units;
