// File: crates/kpi-core/src/session.rs
// Summary: Render targets and the single drawing session each one may own.
// Notes:
// - A target holds at most one session; attaching a new one destroys the old first.
// - Every Load/Render event clears the session's scene and redraws from its model.

use crate::layout::layout_card_into;
use crate::model::DisplayModel;
use crate::scene::Scene;
use crate::theme::CardTheme;

/// Surface lifecycle events that trigger a full redraw.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// First paint after the session is created.
    Load,
    /// Host re-layout (resize, refresh).
    Render,
}

/// Owned drawing state for one card on one target.
#[derive(Clone, Debug)]
pub struct DrawingSession {
    model: DisplayModel,
    scene: Scene,
    theme: CardTheme,
    width: f32,
    height: f32,
    redraws: u64,
}

impl DrawingSession {
    fn new(model: DisplayModel, width: f32, height: f32) -> Self {
        Self { model, scene: Scene::new(), theme: CardTheme::STANDARD, width, height, redraws: 0 }
    }

    pub fn handle(&mut self, event: SurfaceEvent) {
        log::debug!("surface event {:?} ({}x{})", event, self.width, self.height);
        layout_card_into(&mut self.scene, self.width, self.height, &self.model, &self.theme);
        self.redraws += 1;
    }

    fn set_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn model(&self) -> &DisplayModel { &self.model }
    pub fn size(&self) -> (f32, f32) { (self.width, self.height) }
    /// Number of completed redraws since creation.
    pub fn redraws(&self) -> u64 { self.redraws }
}

/// Rectangular drawing area supplied by the host.
#[derive(Clone, Debug)]
pub struct RenderTarget {
    width: u32,
    height: u32,
    text: Option<String>,
    session: Option<DrawingSession>,
}

impl RenderTarget {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height, text: None, session: None }
    }

    pub fn width(&self) -> u32 { self.width }
    pub fn height(&self) -> u32 { self.height }

    /// Change geometry; an active session redraws at the new size.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        if let Some(s) = self.session.as_mut() {
            s.set_size(width as f32, height as f32);
            s.handle(SurfaceEvent::Render);
        }
    }

    /// Remove all visual content: fallback text and any session.
    pub fn clear(&mut self) {
        self.text = None;
        self.destroy_session();
    }

    /// Replace content with a plain text message.
    pub fn show_text(&mut self, message: impl Into<String>) {
        self.destroy_session();
        self.text = Some(message.into());
    }

    pub fn text(&self) -> Option<&str> { self.text.as_deref() }

    pub fn session(&self) -> Option<&DrawingSession> { self.session.as_ref() }

    pub fn has_session(&self) -> bool { self.session.is_some() }

    /// Fire a Render event on the active session, if any.
    pub fn redraw(&mut self) {
        if let Some(s) = self.session.as_mut() {
            s.handle(SurfaceEvent::Render);
        }
    }

    /// Tear down the session. Safe to call when none exists.
    pub fn destroy_session(&mut self) {
        if let Some(old) = self.session.take() {
            log::debug!("destroying drawing session after {} redraws", old.redraws);
        }
    }

    fn attach(&mut self, model: DisplayModel) -> &mut DrawingSession {
        self.destroy_session();
        self.text = None;
        log::debug!("creating drawing session {}x{}", self.width, self.height);
        self.session.insert(DrawingSession::new(model, self.width as f32, self.height as f32))
    }
}

/// Draw `data` as a KPI card on `target`, replacing any previous session.
pub fn draw_card(target: &mut RenderTarget, data: DisplayModel) {
    let session = target.attach(data);
    session.handle(SurfaceEvent::Load);
}
