//! Orchestration core of `macshift`.
//!
//! * [`command`]: the seam every external tool invocation goes through.
//! * [`platform`]: per-OS drivers that enumerate interfaces, read and set MACs.
//! * [`backup`]: one-line backup records and restore.
//! * [`ui`]: what the session needs from whoever is at the keyboard.
//! * [`session`]: the interactive change flow tying the above together.

pub mod backup;
pub mod command;
pub mod platform;
pub mod session;
pub mod ui;
