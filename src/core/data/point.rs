/// A pixel position, origin at the top-left of the frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
