pub mod context;
pub mod outcome;
pub mod runner;
pub mod scenarios;
pub mod selection;
