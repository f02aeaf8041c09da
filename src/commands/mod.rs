// src/commands/mod.rs
// Declares the slash command modules served by this bot.

pub mod panel;
