// Pointer-drag bookkeeping for the glass panel. Kept free of web types so the
// host-side tests can include it directly.

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub pointer_id: i32,
    /// Pointer position when the drag began (client px).
    pub origin: [f64; 2],
    /// Panel translation when the drag began.
    pub start_offset: [f64; 2],
    /// Current panel translation.
    pub offset: [f64; 2],
}

impl DragState {
    pub fn begin(&mut self, pointer_id: i32, x: f64, y: f64) {
        self.active = true;
        self.pointer_id = pointer_id;
        self.origin = [x, y];
        self.start_offset = self.offset;
    }

    /// Track a pointer move; returns the new translation while dragging.
    pub fn update(&mut self, pointer_id: i32, x: f64, y: f64) -> Option<[f64; 2]> {
        if !self.active || pointer_id != self.pointer_id {
            return None;
        }
        self.offset = [
            self.start_offset[0] + (x - self.origin[0]),
            self.start_offset[1] + (y - self.origin[1]),
        ];
        Some(self.offset)
    }

    /// Returns true if this pointer was the one dragging.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.active && pointer_id == self.pointer_id {
            self.active = false;
            true
        } else {
            false
        }
    }
}

#[inline]
pub fn translate_css(offset: [f64; 2]) -> String {
    format!("translate({:.1}px, {:.1}px)", offset[0], offset[1])
}

