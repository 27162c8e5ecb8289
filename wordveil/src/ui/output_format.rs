// wordveil/src/ui/output_format.rs
//! Colored message helpers for stderr/stdout.

use owo_colors::OwoColorize;
use std::io::{self, Write};

pub fn print_info_message(writer: &mut dyn Write, msg: &str, colored: bool) -> io::Result<()> {
    if colored {
        writeln!(writer, "{}", msg.green())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_warn_message(writer: &mut dyn Write, msg: &str, colored: bool) -> io::Result<()> {
    if colored {
        writeln!(writer, "{}", msg.yellow())
    } else {
        writeln!(writer, "{}", msg)
    }
}

pub fn print_error_message(writer: &mut dyn Write, msg: &str, colored: bool) -> io::Result<()> {
    if colored {
        writeln!(writer, "{}", msg.red())
    } else {
        writeln!(writer, "{}", msg)
    }
}
