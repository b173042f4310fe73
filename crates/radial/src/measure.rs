use strum::Display as StrumDisplay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay)]
pub enum MeasureMode {
    /// The parent decided the size; the child must use it.
    Exactly,
    /// The child may be as large as it wants up to the size.
    AtMost,
    Unspecified,
}

/// A single-axis constraint handed down by the parent during measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureSpec {
    pub size: i32,
    pub mode: MeasureMode,
}

impl MeasureSpec {
    pub fn exactly(size: i32) -> Self {
        Self {
            size,
            mode: MeasureMode::Exactly,
        }
    }

    pub fn at_most(size: i32) -> Self {
        Self {
            size,
            mode: MeasureMode::AtMost,
        }
    }

    pub fn unspecified() -> Self {
        Self {
            size: 0,
            mode: MeasureMode::Unspecified,
        }
    }

    pub fn is_exact(&self) -> bool {
        self.mode == MeasureMode::Exactly
    }
}

impl std::fmt::Display for MeasureSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.mode, self.size)
    }
}

/// Pixel dimensions of the screen hosting the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayMetrics {
    pub width_px: i32,
    pub height_px: i32,
}

impl DisplayMetrics {
    pub fn new(width_px: i32, height_px: i32) -> Self {
        Self {
            width_px,
            height_px,
        }
    }
}
