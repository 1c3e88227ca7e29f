//! Interactive session layer: wiring, prompts, and the menu loop.

mod prompt;
mod session;

pub use session::App;
