pub mod bills;
pub mod dashboard;
pub mod definitions;
pub mod health;
pub mod stats;
