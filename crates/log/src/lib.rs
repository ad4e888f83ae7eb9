//! A minimal logging facade for randkit.
//!
//! Messages go to the standard error stream on native targets and to the browser console on
//! `wasm32`. Messages more verbose than [`max_verbosity`] are dropped before being formatted.

use std::fmt::Arguments;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg_attr(target_arch = "wasm32", path = "wasm.rs")]
#[cfg_attr(not(target_arch = "wasm32"), path = "std.rs")]
mod imp;

/// A verbosity level for a [`Message`].
///
/// # Remarks
///
/// The ordering of the verbosity levels is in *increasing verbosity*, meaning that
/// [`Error`] is the *least verbose*, and [`Trace`] is the *most verbose*.
///
/// [`Error`]: Verbosity::Error
/// [`Trace`]: Verbosity::Trace
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Verbosity {
    /// Something prevented an operation from completing.
    Error,
    /// Something went wrong, but a fallback was used.
    Warning,
    /// General information.
    Info,
    /// Debugging information.
    Trace,
}

impl Verbosity {
    fn from_u8(x: u8) -> Self {
        match x {
            0 => Self::Error,
            1 => Self::Warning,
            2 => Self::Info,
            _ => Self::Trace,
        }
    }
}

static MAX_VERBOSITY: AtomicU8 = AtomicU8::new(Verbosity::Info as u8);

/// Sets the most verbose level that will still be logged.
pub fn set_max_verbosity(verbosity: Verbosity) {
    MAX_VERBOSITY.store(verbosity as u8, Ordering::Relaxed);
}

/// Returns the most verbose level that will still be logged.
pub fn max_verbosity() -> Verbosity {
    Verbosity::from_u8(MAX_VERBOSITY.load(Ordering::Relaxed))
}

/// Returns whether messages of the provided verbosity are currently logged.
#[inline]
pub fn enabled(verbosity: Verbosity) -> bool {
    verbosity <= max_verbosity()
}

/// A message that can be logged.
pub struct Message<'a> {
    /// The name of the file in which the message was logged.
    pub file: &'static str,
    /// The line at which the message was logged.
    pub line: u32,
    /// The verbosity level of the message.
    pub verbosity: Verbosity,
    /// The module in which the message was logged.
    pub module: &'static str,
    /// The message itself.
    pub message: Arguments<'a>,
}

impl Message<'_> {
    /// Logs this message, unless its verbosity is filtered out.
    pub fn log(self) {
        if enabled(self.verbosity) {
            imp::log(self);
        }
    }
}

/// Creates a [`Message`] instance with the current invoking location.
#[macro_export]
macro_rules! message {
    ($verbosity:expr, $($args:tt)*) => {
        $crate::Message {
            file: ::core::file!(),
            line: ::core::line!(),
            verbosity: $verbosity,
            module: ::core::module_path!(),
            message: ::core::format_args!($($args)*),
        }
    };
}

/// Logs a message with the current invoking location.
#[macro_export]
macro_rules! log {
    ($verbosity:expr, $($args:tt)*) => {
        $crate::Message::log($crate::message!($verbosity, $($args)*))
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Error`].
#[macro_export]
macro_rules! error {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Error, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Warning`].
#[macro_export]
macro_rules! warning {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Warning, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Info`].
#[macro_export]
macro_rules! info {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Info, $($args)*)
    };
}

/// Logs a message with a verbosity level of [`Verbosity::Trace`].
#[macro_export]
macro_rules! trace {
    ($($args:tt)*) => {
        $crate::log!($crate::Verbosity::Trace, $($args)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering() {
        assert!(Verbosity::Error < Verbosity::Warning);
        assert!(Verbosity::Info < Verbosity::Trace);
    }

    #[test]
    fn filter() {
        set_max_verbosity(Verbosity::Warning);
        assert!(enabled(Verbosity::Error));
        assert!(enabled(Verbosity::Warning));
        assert!(!enabled(Verbosity::Trace));

        set_max_verbosity(Verbosity::Trace);
        assert_eq!(max_verbosity(), Verbosity::Trace);
        crate::trace!("tracing is on ({} levels)", 4);
    }

    #[test]
    fn message_location() {
        let msg = crate::message!(Verbosity::Info, "hello world");
        assert_eq!(msg.file, file!());
        assert_eq!(msg.module, module_path!());
        assert_eq!(msg.message.to_string(), "hello world");
    }
}
