//! Subcommands of the `noughts` binary

pub mod advise;
pub mod play;
pub mod show;
pub mod simulate;
