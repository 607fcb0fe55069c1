pub mod commands;
pub mod dates;
pub mod error;
pub mod logging;
pub mod model;
pub mod output;
pub mod planner;
pub mod query;
pub mod rollover;
pub mod store;
