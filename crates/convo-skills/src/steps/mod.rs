//! Pasos del diálogo de saludo.

pub mod sample_action;

pub use sample_action::{sample_action_sequence, End, GreetUser, PromptForName};
