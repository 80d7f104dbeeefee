//! Terminal I/O, with colors!

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print an OK message, in green.
pub fn print_ok(msg: &str) {
    print_tagged("OK   ", Color::Green, msg);
}

/// Print a warning message, in yellow.
pub fn print_warn(msg: &str) {
    print_tagged("WARN ", Color::Yellow, msg);
}

/// Print a tagged message with a colored tag.
fn print_tagged(tag: &str, color: Color, msg: &str) {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    stdout
        .set_color(ColorSpec::new().set_fg(Some(color)))
        .expect("set color");
    write!(&mut stdout, "{}", tag).expect("write tag");
    stdout.reset().expect("reset color");

    writeln!(&mut stdout, " {}", msg).expect("write message");
}
