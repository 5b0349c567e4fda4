//! Drawing of the particle network onto an abstract surface.
//!
//! [`render_frame`] issues, in order: a clear, one filled disk per particle,
//! the particle-to-particle links, and, when the pointer is present, the
//! pointer links followed by the pointer indicator disk.

use crate::{config::FieldConfig, field::ParticleField, pointer::PointerState, types::Rgba};
use glam::Vec2;

/// A drawable 2-D target in pixel coordinates with the origin at top-left.
pub trait Surface {
    /// Current size of the surface's container, in pixels.
    fn size(&self) -> Vec2;
    /// Hides the surface from view. Used when the animation is disabled.
    fn hide(&mut self);
    fn clear(&mut self);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// Alpha of a link of length `dist`, fading linearly from `ceiling` at zero
/// length to nothing at `threshold`.
///
/// Returns `None` when `dist >= threshold`, i.e. no line is drawn.
pub fn link_opacity(dist: f32, threshold: f32, ceiling: f32) -> Option<f32> {
    (dist < threshold).then(|| (1.0 - dist / threshold) * ceiling)
}

/// Draws one frame of the field.
///
/// ### Parameters
/// - `field` - Particles to draw; not modified.
/// - `pointer` - Pointer state; adds pointer links and indicator when present.
/// - `cfg` - Colours, widths, and distance thresholds.
/// - `surface` - Target receiving the draw calls.
pub fn render_frame(
    field: &ParticleField,
    pointer: &PointerState,
    cfg: &FieldConfig,
    surface: &mut impl Surface,
) {
    surface.clear();

    for p in &field.particles {
        surface.fill_circle(p.pos, p.radius, cfg.particle_color);
    }

    for (i, j, dist) in field.pairs_within(cfg.max_link_distance) {
        if let Some(alpha) = link_opacity(dist, cfg.max_link_distance, cfg.link_alpha) {
            surface.line(
                field.particles[i].pos,
                field.particles[j].pos,
                cfg.link_width,
                cfg.particle_color.with_alpha(alpha),
            );
        }
    }

    let Some(at) = pointer.position() else {
        return;
    };

    for p in &field.particles {
        let dist = p.pos.distance(at);
        if let Some(alpha) = link_opacity(dist, cfg.pointer_influence_radius, cfg.link_alpha) {
            surface.line(
                p.pos,
                at,
                cfg.pointer_link_width,
                cfg.particle_color.with_alpha(alpha),
            );
        }
    }
    surface.fill_circle(at, cfg.pointer_indicator_radius, cfg.pointer_indicator_color);
}

/// One recorded drawing call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// A [`Surface`] that records draw calls instead of rasterising them.
///
/// Each [`Surface::clear`] drops the previous frame's commands, so after a
/// render the buffer holds exactly the latest frame.
#[derive(Debug, Default)]
pub struct CommandBuffer {
    size: Vec2,
    hidden: bool,
    commands: Vec<DrawCommand>,
}

impl CommandBuffer {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ..Self::default()
        }
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circles(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
            .count()
    }

    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }
}

impl Surface for CommandBuffer {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn hide(&mut self) {
        self.hidden = true;
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }
}
