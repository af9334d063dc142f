pub mod estimate;
pub mod rate;
pub mod setup;
pub mod ui;
