//! anythink - comments service and case utilities
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default configuration
//! anythink config init
//!
//! # Run the HTTP service on :8001
//! anythink serve
//!
//! # Work with comments directly
//! anythink comment add --text "hi" --author bob
//! anythink comment list
//!
//! # Convert case
//! anythink case camel "first name"
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
