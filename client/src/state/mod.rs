//! Client-side state.
//!
//! DESIGN
//! ======
//! `conversation` owns the reducer; `render` derives what the page shows
//! from it. Neither touches the DOM, so both are tested natively.

pub mod conversation;
pub mod render;
