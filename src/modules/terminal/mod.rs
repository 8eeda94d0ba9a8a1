pub mod terminal_commands;
pub mod terminal_session;
