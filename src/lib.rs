//! Live terminal dashboard for host CPU, memory, disk and the processes
//! holding the most resident memory.

pub mod action;
pub mod app;
pub mod config;
pub mod event;
pub mod format;
pub mod logging;
pub mod system;
pub mod ui;
