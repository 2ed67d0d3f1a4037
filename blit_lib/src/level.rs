/// A byte-sized parameter nudged up and down by a fixed step per key press.
/// Adjustments saturate at 0 and 255 instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    value: u8,
    step: u8,
}

impl Level {
    pub const DEFAULT_STEP: u8 = 32;

    pub const fn new(value: u8, step: u8) -> Self {
        Level { value, step }
    }

    pub const fn full() -> Self {
        Level::new(u8::MAX, Level::DEFAULT_STEP)
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn raise(&mut self) -> u8 {
        self.value = self.value.saturating_add(self.step);
        self.value
    }

    pub fn lower(&mut self) -> u8 {
        self.value = self.value.saturating_sub(self.step);
        self.value
    }
}
