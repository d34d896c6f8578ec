//! Terminal utilities for title setting and output management

use std::io::{IsTerminal, Write};

/// Sets the terminal title to the specified text
pub fn set_terminal_title(title: &str) {
    // ANSI escape sequence to set terminal title
    print!("\x1b]0;{}\x07", title);
}

/// Sets the terminal title and flushes, only when stdout is a terminal
pub fn set_terminal_title_and_flush(title: &str) {
    let mut stdout = std::io::stdout();
    if !stdout.is_terminal() {
        return;
    }
    set_terminal_title(title);
    // Flush stdout - ignore errors as this is non-critical
    let _ = stdout.flush();
}
