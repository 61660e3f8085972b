use crate::core::data::colour::PackedColour;

pub trait ColourMap {
    fn map(&self, iterations: u32) -> PackedColour;

    fn display_name(&self) -> &str;
}
