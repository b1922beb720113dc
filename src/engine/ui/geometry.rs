#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size::new(0, 0);

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Padding {
    pub const ZERO: Padding = Padding::uniform(0);

    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const fn uniform(padding: i32) -> Self {
        Self::new(padding, padding, padding, padding)
    }
}

/// The size and padding a host assigns to a view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Frame {
    pub size: Size,
    pub padding: Padding,
}

impl Frame {
    pub const fn new(size: Size, padding: Padding) -> Self {
        Self { size, padding }
    }

    pub const fn unpadded(width: i32, height: i32) -> Self {
        Self::new(Size::new(width, height), Padding::ZERO)
    }

    /// Size of the area inside the padding. Either dimension can be negative if the padding is
    /// larger than the view. Saturates instead of overflowing for extreme paddings.
    pub fn content_size(&self) -> Size {
        Size::new(
            self.size
                .width
                .saturating_sub(self.padding.left)
                .saturating_sub(self.padding.right),
            self.size
                .height
                .saturating_sub(self.padding.top)
                .saturating_sub(self.padding.bottom),
        )
    }
}
