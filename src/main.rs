//! EDI Dashboard
//!
//! Browser entry point. Build with `trunk serve` next to the fragment pages.

fn main() {
    edi_shell::start();
}
