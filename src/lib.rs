#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod document;
pub mod error;
pub mod gizmo;
pub mod grid;
pub mod id;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod stroke;
pub mod textbox;
pub mod tool;

pub use app::SketchApp;
pub use document::Document;
pub use error::SessionError;
pub use grid::GridSettings;
pub use id::ShapeId;
pub use input::{InputHandler, PointerEvent, PointerTarget};
pub use renderer::Renderer;
pub use session::SessionState;
pub use stroke::{LineType, Stroke, StrokeStyle};
pub use textbox::TextBox;
pub use tool::{DrawMode, Tool, ToolSettings};
