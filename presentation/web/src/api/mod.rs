pub mod completion;
pub mod error;
pub mod health;
pub mod tags;
