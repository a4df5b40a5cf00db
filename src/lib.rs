//! Read-only HTTP API over the `pessoas` collection, with a synthetic-data
//! seeder and a local stack launcher.

pub mod config;
pub mod model;
pub mod normalizer;
pub mod orchestrator;
pub mod seeder;
pub mod server;
pub mod storage;
pub mod utils;
