pub mod update_commands;
