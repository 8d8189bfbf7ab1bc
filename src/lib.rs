pub mod ai;
pub mod api;
pub mod config;
pub mod emotion;
pub mod entities;
pub mod error;
pub mod gemini;
pub mod metrics;
pub mod migrator;
pub mod repository;
pub mod services;
pub mod telemetry;

pub use sea_orm;
