pub mod model;
pub mod overview;
pub mod ranking;
pub mod retention;
