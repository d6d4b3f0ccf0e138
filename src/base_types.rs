#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A width and height, in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// A bounding box in viewport coordinates, as reported by the host's measurer.
///
/// Unlike a min/max AABB this keeps the `top`/`left` + size form that
/// measurement APIs hand back.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Rect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    pub fn from_pos_size(pos: Point, size: Size) -> Self {
        Self {
            top: pos.y,
            left: pos.x,
            width: size.width,
            height: size.height,
        }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }
}

#[macro_export]
macro_rules! rect {
    ($top:expr, $left:expr, $width:expr, $height:expr) => {
        $crate::Rect::new($top, $left, $width, $height)
    };
}

#[macro_export]
macro_rules! size {
    ($width:expr, $height:expr) => {
        $crate::Size::new($width, $height)
    };
}
