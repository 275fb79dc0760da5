//! Terminal presentation layer.
//!
//! Everything here sits outside the calculator core: it forwards keys to a
//! [`Calculator`](crate::calculator::Calculator) and draws its snapshot.

pub mod render;
pub mod scale;
pub mod session;
pub mod theme;

pub use render::Renderer;
pub use scale::{FixedScale, Scale, ViewportScale};
pub use session::{Command, Outcome, Session};
pub use theme::{Palette, Rgb, Theme, ThemeMode};
