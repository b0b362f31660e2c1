//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - record renderer-agnostic draw commands in paint order
//! - replay them onto any [`Surface`](crate::surface::Surface)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
