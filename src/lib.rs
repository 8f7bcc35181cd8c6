//! Game Helper - battle resolution core for a tabletop game voice assistant

pub mod battle;
pub mod core;
pub mod odds;
pub mod speech;
