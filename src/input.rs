use egui::{Context, PointerButton, Pos2, Rect};

/// A pointer gesture step, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button went down on the canvas
    Press(Pos2),
    /// Pointer moved while the button is held
    Drag(Pos2),
    /// Button released, ending the gesture
    Release,
}

/// Handles converting raw egui pointer input into gesture events
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    dragging: bool,
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            dragging: false,
            last_pointer_pos: None,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Process this frame's egui input and generate gesture events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<PointerEvent> {
        let (pressed, down, pos) = ctx.input(|input| {
            (
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.primary_down(),
                input.pointer.interact_pos(),
            )
        });
        self.update(pressed, down, pos)
    }

    /// Advance the gesture tracker by one frame of pointer state
    pub fn update(&mut self, pressed: bool, down: bool, pos: Option<Pos2>) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        if pressed {
            if let Some(pos) = pos.filter(|pos| self.canvas_rect.contains(*pos)) {
                if self.dragging {
                    events.push(PointerEvent::Release);
                }
                events.push(PointerEvent::Press(self.to_canvas(pos)));
                self.dragging = true;
                self.last_pointer_pos = Some(pos);
            }
        }

        if !self.dragging {
            return events;
        }

        if down {
            if let Some(pos) = pos {
                if Some(pos) != self.last_pointer_pos {
                    events.push(PointerEvent::Drag(self.to_canvas(pos)));
                    self.last_pointer_pos = Some(pos);
                }
            }
        } else {
            events.push(PointerEvent::Release);
            self.dragging = false;
            self.last_pointer_pos = None;
        }

        events
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }
}
