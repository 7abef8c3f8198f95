pub mod drag;
pub mod events;
