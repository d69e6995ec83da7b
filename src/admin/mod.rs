//! Client-side state of the admin UI, kept as plain serializable values
//! driven by pure reducer functions.

pub mod add_flow;
pub mod generate_preview;
pub mod view_state;
