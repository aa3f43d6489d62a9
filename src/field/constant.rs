use super::Field;
use crate::Tick;

/// Fixed channel value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantField(u8);

impl ConstantField {
    pub const fn new(value: u8) -> Self {
        Self(value)
    }
}

impl Field for ConstantField {
    fn value(&self, _t: Tick, _spine: u8, _idx: u8) -> u8 {
        self.0
    }
}
