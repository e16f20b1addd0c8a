use super::Engine;

/// Modifier keys held while clicking the surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
}

impl Modifiers {
    pub const NONE: Self = Self { shift: false, alt: false };
    pub const SHIFT: Self = Self { shift: true, alt: false };
    pub const ALT: Self = Self { shift: false, alt: true };
}

/// A single edit requested by the user, addressed in grid coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditIntent {
    ToggleCell { row: u32, col: u32 },
    StampGlider { row: u32, col: u32 },
    StampPulsar { row: u32, col: u32 },
}

impl EditIntent {
    /// Pick the intent for a click at (row, col).
    /// Shift wins over alt; no modifier toggles the cell.
    pub const fn classify(modifiers: Modifiers, row: u32, col: u32) -> Self {
        if modifiers.shift {
            EditIntent::StampGlider { row, col }
        } else if modifiers.alt {
            EditIntent::StampPulsar { row, col }
        } else {
            EditIntent::ToggleCell { row, col }
        }
    }

    /// Target cell of the edit
    pub const fn position(self) -> (u32, u32) {
        match self {
            EditIntent::ToggleCell { row, col }
            | EditIntent::StampGlider { row, col }
            | EditIntent::StampPulsar { row, col } => (row, col),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            EditIntent::ToggleCell { .. } => "toggle",
            EditIntent::StampGlider { .. } => "glider",
            EditIntent::StampPulsar { .. } => "pulsar",
        }
    }

    /// Forward the edit to the engine
    pub fn apply<E: Engine + ?Sized>(self, engine: &mut E) {
        match self {
            EditIntent::ToggleCell { row, col } => engine.toggle_cell(row, col),
            EditIntent::StampGlider { row, col } => engine.put_glider(row, col),
            EditIntent::StampPulsar { row, col } => engine.put_pulsar(row, col),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<(&'static str, u32, u32)>,
    }

    impl Engine for Recorder {
        fn new(_width: u32, _height: u32) -> Self {
            Self::default()
        }
        fn width(&self) -> u32 {
            8
        }
        fn height(&self) -> u32 {
            8
        }
        fn cells(&self) -> &[u8] {
            &[0; 8]
        }
        fn tick(&mut self) {}
        fn toggle_cell(&mut self, row: u32, col: u32) {
            self.calls.push(("toggle", row, col));
        }
        fn put_glider(&mut self, row: u32, col: u32) {
            self.calls.push(("glider", row, col));
        }
        fn put_pulsar(&mut self, row: u32, col: u32) {
            self.calls.push(("pulsar", row, col));
        }
        fn reset(&mut self) {}
    }

    #[test]
    fn test_plain_click_toggles() {
        assert_eq!(
            EditIntent::classify(Modifiers::NONE, 2, 5),
            EditIntent::ToggleCell { row: 2, col: 5 }
        );
    }

    #[test]
    fn test_shift_takes_precedence_over_alt() {
        let both = Modifiers { shift: true, alt: true };
        assert_eq!(
            EditIntent::classify(both, 1, 1),
            EditIntent::StampGlider { row: 1, col: 1 }
        );
        assert_eq!(
            EditIntent::classify(Modifiers::ALT, 1, 1),
            EditIntent::StampPulsar { row: 1, col: 1 }
        );
    }

    #[test]
    fn test_apply_calls_exactly_one_engine_operation() {
        let mut engine = Recorder::default();

        EditIntent::ToggleCell { row: 3, col: 4 }.apply(&mut engine);
        EditIntent::StampGlider { row: 5, col: 6 }.apply(&mut engine);
        EditIntent::StampPulsar { row: 7, col: 0 }.apply(&mut engine);

        assert_eq!(
            engine.calls,
            vec![("toggle", 3, 4), ("glider", 5, 6), ("pulsar", 7, 0)]
        );
    }

    #[test]
    fn test_position_and_name() {
        let intent = EditIntent::StampPulsar { row: 9, col: 2 };
        assert_eq!(intent.position(), (9, 2));
        assert_eq!(intent.name(), "pulsar");
    }
}
