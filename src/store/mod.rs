pub mod files;
pub mod kv;
pub mod lock;
pub mod repo;
pub mod tasks;
pub mod view;
