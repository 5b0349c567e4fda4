//! Interactive particle network viewer built with eframe/egui.
//!
//! The central panel plays the role of the canvas: its rect is the drawing
//! surface, and hovering, resizing, minimising, or toggling the "tab" in the
//! top bar become the animator's pointer, resize, and visibility signals.

use crate::surface::{PainterSurface, RepaintTicker};
use eframe::App;
use field_core::{
    animator::{Animator, FrameTicker},
    config::FieldConfig,
    types::RunState,
};
use glam::Vec2;

/// Turns per-pass host observations into edge-triggered animator signals.
///
/// egui reports state (hover position, rect size) every pass; the animator
/// expects events. This remembers the last observation and only forwards
/// changes.
#[derive(Debug)]
struct SignalTracker {
    last_size: Option<Vec2>,
    pointer_inside: bool,
    visible: bool,
}

impl Default for SignalTracker {
    fn default() -> Self {
        Self {
            last_size: None,
            pointer_inside: false,
            visible: true,
        }
    }
}

impl SignalTracker {
    /// Forwards whatever changed since the previous pass.
    ///
    /// ### Parameters
    /// - `animator` - Receiver of the signals.
    /// - `size` - Current canvas size.
    /// - `hover` - Pointer position relative to the canvas, if over it.
    /// - `visible` - Whether the "tab" is currently visible.
    /// - `ticker` - Used when a resume restarts the frame loop.
    fn observe(
        &mut self,
        animator: &mut Animator,
        size: Vec2,
        hover: Option<Vec2>,
        visible: bool,
        ticker: &mut impl FrameTicker,
    ) {
        match self.last_size {
            Some(prev) if prev != size => {
                log::debug!("canvas resized to {}x{}", size.x, size.y);
                animator.resized(size.x, size.y);
            }
            _ => {}
        }
        self.last_size = Some(size);

        match hover {
            Some(p) => {
                animator.pointer_moved(p.x, p.y);
                self.pointer_inside = true;
            }
            None if self.pointer_inside => {
                animator.pointer_left();
                self.pointer_inside = false;
            }
            None => {}
        }

        if visible != self.visible {
            animator.visibility_changed(visible, ticker);
            self.visible = visible;
        }
    }
}

/// Main application state for the viewer.
///
/// ### Fields
/// - `animator` - The particle network and its lifecycle.
/// - `reduced_motion` - Preference passed to [`Animator::start`].
/// - `canvas_hidden` - Set by the surface when the animator hides it.
/// - `tab_visible` - User toggle standing in for browser tab visibility.
/// - `signals` - Edge detection for host observations.
pub struct Viewer {
    animator: Animator,
    reduced_motion: bool,
    canvas_hidden: bool,
    tab_visible: bool,
    signals: SignalTracker,
}

impl Viewer {
    pub fn new(cfg: FieldConfig, reduced_motion: bool) -> Self {
        Self {
            animator: Animator::new(cfg),
            reduced_motion,
            canvas_hidden: false,
            tab_visible: true,
            signals: SignalTracker::default(),
        }
    }

    /// Builds the top panel (tab visibility toggle).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let label = if self.tab_visible {
                    "⏸ Hide tab"
                } else {
                    "▶ Show tab"
                };
                if ui.button(label).clicked() {
                    self.tab_visible = !self.tab_visible;
                }
            });
        });
    }

    /// Builds the bottom status bar (run state, particle count, pointer).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("state = {:?}", self.animator.state()));
                ui.separator();
                ui.label(format!("particles = {}", self.animator.particles().len()));
                let pointer = match self.animator.pointer().position() {
                    Some(p) => format!("pointer = ({:.0}, {:.0})", p.x, p.y),
                    None => "pointer = none".to_owned(),
                };
                ui.label(pointer);
            });
        });
    }

    /// Builds the central canvas and drives one animator pass.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);
                let mut ticker = RepaintTicker(ctx);

                if self.animator.state() == RunState::Uninitialized {
                    let mut surface = PainterSurface::new(&painter, rect, &mut self.canvas_hidden);
                    self.animator
                        .start(Some(&mut surface), self.reduced_motion, &mut ticker);
                }

                if self.canvas_hidden {
                    ui.put(rect, egui::Label::new("Animation disabled (reduced motion)"));
                    return;
                }

                let size = Vec2::new(rect.width(), rect.height());
                let hover = response
                    .hover_pos()
                    .map(|p| Vec2::new(p.x - rect.min.x, p.y - rect.min.y));
                let minimized = ctx.input(|i| i.viewport().minimized.unwrap_or(false));
                let visible = self.tab_visible && !minimized;
                self.signals
                    .observe(&mut self.animator, size, hover, visible, &mut ticker);

                let mut surface = PainterSurface::new(&painter, rect, &mut self.canvas_hidden);
                if !self.animator.frame(&mut surface, &mut ticker) {
                    self.animator.redraw(&mut surface);
                }
            });
    }
}

impl App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
