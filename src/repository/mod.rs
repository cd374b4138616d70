pub mod analytics;
pub mod database;
pub mod entities;
pub mod facts;
pub mod lifecycle;
