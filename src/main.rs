//! bigolab CLI - Complexity Class Visualizations
//!
//! The library and the frontends do the real work; this binary just
//! points the way.

use std::process::ExitCode;

fn main() -> ExitCode {
    println!("bigolab v{}", env!("CARGO_PKG_VERSION"));
    println!("Interactive visualizations of O(1), O(n), O(n\u{b2}), and O(log n)");
    println!();
    println!("Usage: cargo run --bin bigo-tui --features tui [path/to/lab.yaml]");
    println!("       wasm-pack build --features wasm  (canvas frontend)");

    ExitCode::SUCCESS
}
