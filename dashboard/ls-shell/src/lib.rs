//! LivestockSync dashboard shell.
//!
//! Wires the preference store, theme applier, realtime listener,
//! notification list and auto-save ticker into one [`DashboardShell`].

pub mod auto_save_ticker;
pub mod color_scheme;
pub mod error;
pub mod logger;
pub mod shell;
pub mod shell_event;
pub mod shutdown;
pub mod theme_applier;

#[cfg(test)]
mod tests;

pub use auto_save_ticker::AutoSaveTicker;
pub use color_scheme::{ColorScheme, SystemColorScheme};
pub use error::{Result, ShellError};
pub use shell::{DashboardShell, ShellOptions};
pub use shell_event::{ShellCommand, ShellEvent};
pub use shutdown::{ShutdownGuard, ShutdownSignal};
pub use theme_applier::ThemeApplier;
