//! Adapters between the animator's drawing/scheduling traits and egui.

use field_core::{animator::FrameTicker, render::Surface, types::Rgba};
use glam::Vec2;

/// Background painted by [`Surface::clear`].
const CANVAS_BG: egui::Color32 = egui::Color32::from_rgb(244, 247, 248);

pub fn to_color32(c: Rgba) -> egui::Color32 {
    let a = (c.a.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, a)
}

/// A [`Surface`] backed by an egui painter clipped to the canvas rect.
///
/// Animator coordinates are relative to the rect's top-left corner.
pub struct PainterSurface<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
    hidden: &'a mut bool,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a egui::Painter, rect: egui::Rect, hidden: &'a mut bool) -> Self {
        Self {
            painter,
            rect,
            hidden,
        }
    }

    fn to_screen(&self, p: Vec2) -> egui::Pos2 {
        self.rect.min + egui::vec2(p.x, p.y)
    }
}

impl Surface for PainterSurface<'_> {
    fn size(&self) -> Vec2 {
        Vec2::new(self.rect.width(), self.rect.height())
    }

    fn hide(&mut self) {
        *self.hidden = true;
    }

    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, CANVAS_BG);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.painter
            .circle_filled(self.to_screen(center), radius, to_color32(color));
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.painter.line_segment(
            [self.to_screen(from), self.to_screen(to)],
            egui::Stroke::new(width, to_color32(color)),
        );
    }
}

/// Maps frame requests onto egui repaint requests.
pub struct RepaintTicker<'a>(pub &'a egui::Context);

impl FrameTicker for RepaintTicker<'_> {
    fn request_frame(&mut self) {
        self.0.request_repaint();
    }
}
