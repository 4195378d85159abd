//! Logging utilities with colored output and progress display.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro, only printed with `--verbose`
//! - `ProgressLine` for single-line batch progress
//!
//! Everything is written to stderr; stdout is reserved for generated code
//! and JSON reports.
//!
//! # Example
//!
//! ```ignore
//! log!("batch"; "converting {} files", count);
//!
//! let progress = ProgressLine::new(&[("convert", 12)]);
//! progress.inc("convert");
//! progress.finish();
//! ```

use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType},
};
use owo_colors::{OwoColorize, Stream};
use parking_lot::Mutex;
use std::{
    io::{IsTerminal, Write, stderr},
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

/// Active progress bar count (for log coordination)
static BAR_COUNT: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut out = stderr().lock();

    let bar_count = BAR_COUNT.load(Ordering::SeqCst);
    if bar_count > 0 {
        execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
    }

    writeln!(out, "{prefix} {message}").ok();
    out.flush().ok();
}

/// Apply color to a module prefix based on module type
///
/// Honors `--color` through `owo_colors::set_override`.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let paint = |p: &String| match module_lower {
        "convert" => p.bright_blue().bold().to_string(),
        "batch" => p.bright_green().bold().to_string(),
        "error" => p.bright_red().bold().to_string(),
        _ => p.bright_yellow().bold().to_string(),
    };
    prefix.if_supports_color(Stream::Stderr, paint).to_string()
}

// ============================================================================
// Progress Line (single-line counters)
// ============================================================================

/// Single-line progress display with multiple counters
///
/// Displays: `[batch] convert(42/69) write(5/69)`
///
/// All counters update in place on the same line. Uses `try_lock` to avoid
/// blocking rayon workers: if the display is busy, the refresh is skipped.
/// When stderr is not a terminal nothing is drawn until `finish`.
pub struct ProgressLine {
    counters: Vec<Counter>,
    lock: Mutex<()>,
    live: bool,
}

struct Counter {
    name: &'static str,
    total: usize,
    current: AtomicUsize,
}

impl ProgressLine {
    /// Create a new progress display.
    ///
    /// Only includes counters with total > 0.
    pub fn new(items: &[(&'static str, usize)]) -> Self {
        let counters: Vec<_> = items
            .iter()
            .filter(|(_, total)| *total > 0)
            .map(|(name, total)| Counter {
                name: *name,
                total: *total,
                current: AtomicUsize::new(0),
            })
            .collect();

        let live = stderr().is_terminal();
        if live {
            BAR_COUNT.store(1, Ordering::SeqCst);
        }

        let progress = Self {
            counters,
            lock: Mutex::new(()),
            live,
        };
        progress.display();
        progress
    }

    /// Increment the counter with the given name.
    ///
    /// Non-blocking: if display lock is held, skips refresh.
    #[inline]
    pub fn inc(&self, name: &str) {
        for counter in &self.counters {
            if counter.name == name {
                counter.current.fetch_add(1, Ordering::Relaxed);
                if self.lock.try_lock().is_some() {
                    self.display();
                }
                return;
            }
        }
    }

    /// Current value of a counter (0 for unknown names).
    pub fn current(&self, name: &str) -> usize {
        self.counters
            .iter()
            .find(|c| c.name == name)
            .map_or(0, |c| c.current.load(Ordering::Relaxed))
    }

    fn line(&self) -> String {
        let parts: Vec<_> = self
            .counters
            .iter()
            .map(|c| format!("{}({}/{})", c.name, c.current.load(Ordering::Relaxed), c.total))
            .collect();
        format!("{} {}", colorize_prefix("batch", "batch"), parts.join(" "))
    }

    /// Redraw the current line (no newline).
    fn display(&self) {
        if !self.live {
            return;
        }
        let mut out = stderr().lock();
        execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        write!(out, "{}", self.line()).ok();
        out.flush().ok();
    }

    /// Finish progress display, preserve line and move to next line.
    pub fn finish(self) {
        BAR_COUNT.store(0, Ordering::SeqCst);

        {
            let _guard = self.lock.lock(); // Wait for any pending display
            let mut out = stderr().lock();
            if self.live {
                execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
            }
            writeln!(out, "{}", self.line()).ok();
            out.flush().ok();
        }

        std::mem::forget(self); // Prevent Drop from clearing
    }
}

impl Drop for ProgressLine {
    fn drop(&mut self) {
        BAR_COUNT.store(0, Ordering::SeqCst);
        if !self.live {
            return;
        }

        // Clear the line on drop (if not finished properly)
        let mut out = stderr().lock();
        execute!(out, cursor::MoveToColumn(0), Clear(ClearType::CurrentLine)).ok();
        out.flush().ok();
    }
}

// ============================================================================
// Tests
// ============================================================================
