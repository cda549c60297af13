// src/ui.rs
// Console presentation: banner, dividers, result and status lines

use std::fmt::Display;
use std::io::{BufRead, Write};

/// ASCII banner shown at startup.
const BANNER: &str = r#"
  _        _ _
 | |_ __ _| | |_   _
 | __/ _` | | | | | |
 | || (_| | | | |_| |
  \__\__,_|_|_|\__, |
               |___/
"#;

const DIVIDER: &str = "════════════════════════════════════════════════════════";

pub fn welcome_banner() {
    println!("{BANNER}");
    println!("  {} v{}", crate::APP_NAME, env!("CARGO_PKG_VERSION"));
    println!("  A menu-driven calculator with persistent history");
    println!();
}

pub fn print_divider() {
    println!("{DIVIDER}");
}

/// Clear the terminal via ANSI escape codes.
pub fn clear_screen() {
    print!("\x1b[H\x1b[2J");
    let _ = std::io::stdout().flush();
}

pub fn print_error(err: &dyn Display) {
    println!("✗ Error: {err}");
}

pub fn print_warning(message: &str) {
    println!("⚠ Warning: {message}");
}

pub fn print_info(message: &str) {
    println!("ℹ {message}");
}

/// Print a formatted calculation result block.
pub fn print_result(operation: &str, expression: &str, result: &str) {
    println!();
    print_divider();
    println!("Operation : {operation}");
    println!("Expression: {expression}");
    println!("Result    : {result}");
    print_divider();
    println!();
}

pub fn print_help() {
    println!("HELP & INSTRUCTIONS:");
    print_divider();
    println!("BASIC OPERATIONS:");
    println!("  Addition       : Adds two or more numbers");
    println!("  Subtraction    : Subtracts second number from first");
    println!("  Multiplication : Multiplies two or more numbers");
    println!("  Division       : Divides first number by second");
    println!();
    println!("ADVANCED OPERATIONS:");
    println!("  Power          : Raises first number to power of second");
    println!("  Square Root    : Calculates square root of a number");
    println!("  Modulo         : Calculates remainder of division");
    println!("  Factorial      : Calculates factorial (n!)");
    println!();
    println!("FEATURES:");
    println!("  - History tracking of all calculations");
    println!("  - Configurable precision for results");
    println!("  - Persistent settings saved to disk");
    print_divider();
}

/// Block until the user presses Enter.
pub fn press_enter_to_continue() {
    print!("Press Enter to continue...");
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}
