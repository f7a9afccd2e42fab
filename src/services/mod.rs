pub mod actions;
pub mod layout;
pub mod registry;
pub mod simulation;
