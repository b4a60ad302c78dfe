//! Synthesized stack traces for inputs that carry none.

use backtrace::{Backtrace, BacktraceSymbol};

/// Maximum number of frames rendered after the message line.
pub const MAX_FRAMES: usize = 10;

/// Build a stack-trace-shaped string: `message`, a newline, then the
/// caller's frames as `    at <symbol> (<file>:<line>)`.
///
/// Frames from this crate and from the unwinder are dropped so the trace
/// starts at the code that asked for a report. An empty message yields the
/// frames alone.
pub fn build_trace(message: &str) -> String {
    let backtrace = Backtrace::new();
    let frames: Vec<String> = backtrace
        .frames()
        .iter()
        .flat_map(|frame| frame.symbols())
        .filter_map(render_symbol)
        .take(MAX_FRAMES)
        .collect();

    let mut trace = if message.is_empty() { String::new() } else { format!("{message}\n") };
    trace.push_str(&frames.join("\n"));
    trace
}

fn render_symbol(symbol: &BacktraceSymbol) -> Option<String> {
    let name = format!("{:#}", symbol.name()?);
    if is_internal(&name) {
        return None;
    }

    Some(match (symbol.filename(), symbol.lineno()) {
        (Some(file), Some(line)) => format!("    at {name} ({}:{line})", file.display()),
        _ => format!("    at {name}"),
    })
}

fn is_internal(symbol: &str) -> bool {
    symbol.starts_with("backtrace::") || symbol.contains("faultline_core::")
}
