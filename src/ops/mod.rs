//! Single-pass pixel transforms over pixmaps.
//!
//! Every operation here is a pure function: one deterministic pass over the
//! input, a new pixmap (or statistic) out, no shared state between calls.

mod accent;
mod badge;
mod knockout;
mod tint;

pub use accent::dominant_color;
pub use badge::circle_badge;
pub use knockout::make_transparent;
pub use tint::apply_tint;
