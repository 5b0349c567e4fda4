use glam::Vec2;

/// Last known pointer position over the surface, or absent.
///
/// The influence radius lives in [`crate::config::FieldConfig`]; this type
/// only tracks where the pointer is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pos: Option<Vec2>,
}

impl PointerState {
    pub fn move_to(&mut self, pos: Vec2) {
        self.pos = Some(pos);
    }

    pub fn leave(&mut self) {
        self.pos = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.pos
    }

    pub fn is_present(&self) -> bool {
        self.pos.is_some()
    }
}
