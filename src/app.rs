use crate::id::ShapeId;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::Renderer;
use crate::session::SessionState;

/// Top-level eframe application: the session core plus the UI glue that the
/// panels need between frames (input translation, drag bookkeeping, editor
/// focus).
///
/// Only settings survive a restart; the document itself is session-only and
/// is discarded on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct SketchApp {
    pub(crate) session: SessionState,
    #[serde(skip)]
    pub(crate) renderer: Renderer,
    #[serde(skip)]
    pub(crate) input: InputHandler,
    /// Shape being moved by a Select-tool drag, if any.
    #[serde(skip)]
    pub(crate) drag_shape: Option<ShapeId>,
    /// Text box whose editor already grabbed keyboard focus.
    #[serde(skip)]
    pub(crate) editor_target: Option<ShapeId>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            session: SessionState::new(),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            drag_shape: None,
            editor_target: None,
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            return eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default();
        }
        Self::default()
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }
}

impl eframe::App for SketchApp {
    /// Persist tool and grid settings (not the document) before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}
