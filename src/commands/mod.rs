pub mod add;
pub mod day;
pub mod delete;
pub mod filter;
pub mod reschedule;
pub mod rollover;
pub mod settings;
pub mod show;
pub mod stats;
pub mod toggle;
pub mod week;
