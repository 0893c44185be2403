//! Unit tests for individual components.

mod command_tests;
mod interaction_tests;
