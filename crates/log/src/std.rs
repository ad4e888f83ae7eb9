use std::io::Write;

use crate::{Message, Verbosity};

/// ANSI-colored label of each verbosity level, padded to the same width.
fn label(verbosity: Verbosity) -> &'static str {
    match verbosity {
        Verbosity::Error => "\x1B[1;31mERROR\x1B[0m  ",
        Verbosity::Warning => "\x1B[1;33mWARNING\x1B[0m",
        Verbosity::Info => "\x1B[1;34mINFO\x1B[0m   ",
        Verbosity::Trace => "\x1B[1;30mTRACE\x1B[0m  ",
    }
}

/// Writes `msg` as a single line on stderr: level, module, text, then the source location.
pub fn log(msg: Message) {
    let label = label(msg.verbosity);

    // A failed write to stderr has nowhere else to be reported.
    let _ = writeln!(
        std::io::stderr().lock(),
        "{label} [{}] {} \x1B[2;90m(at {}:{})\x1B[0m",
        msg.module,
        msg.message,
        msg.file,
        msg.line,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_share_a_width() {
        let visible = |v| label(v).replace("\x1B[0m", "").len() - "\x1B[1;3Xm".len();
        assert_eq!(visible(Verbosity::Error), 7);
        assert_eq!(visible(Verbosity::Warning), 7);
        assert_eq!(visible(Verbosity::Info), 7);
        assert_eq!(visible(Verbosity::Trace), 7);
    }
}
