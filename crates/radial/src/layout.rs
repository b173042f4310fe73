use crate::geometry::{Point, Rect, Size};
use crate::measure::{DisplayMetrics, MeasureSpec};

/// Child side length relative to the menu diameter.
pub const CHILD_DIMENSION_RATIO: f64 = 1.0 / 4.0;
/// Inner padding relative to the menu diameter. Replaces any host padding.
pub const PADDING_RATIO: f64 = 1.0 / 12.0;
pub const FULL_CIRCLE: f64 = 360.0;

/// Two-phase layout contract between a host toolkit and a container.
///
/// The host calls [`Container::measure`] with the constraints it can offer,
/// then [`Container::layout`] with the final bounds it assigned.
pub trait Container {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;
    fn layout(&mut self, bounds: Rect);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialLayout {
    /// Angle of the first item in degrees, clockwise from the positive x axis.
    pub start_angle: f64,
    pub display: DisplayMetrics,
    /// Preferred size when the parent does not impose one. Zero means none.
    pub suggested_minimum: Size,
}

impl Default for RadialLayout {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl RadialLayout {
    pub fn new(start_angle: f64) -> Self {
        Self {
            start_angle,
            display: DisplayMetrics::default(),
            suggested_minimum: Size::default(),
        }
    }

    /// Square side length of the menu for the given constraints.
    pub fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        if width.is_exact() && height.is_exact() {
            return Size::square(width.size.min(height.size).max(0));
        }

        let w = Self::fallback(self.suggested_minimum.width, self.display.width_px);
        let h = Self::fallback(self.suggested_minimum.height, self.display.height_px);

        // an unknown dimension must not collapse the circle
        let side = match (w > 0, h > 0) {
            (true, true) => w.min(h),
            _ => w.max(h).max(0),
        };
        Size::square(side)
    }

    fn fallback(suggested: i32, display: i32) -> i32 {
        if suggested != 0 { suggested } else { display }
    }

    pub fn child_side(side: i32) -> i32 {
        (side as f64 * CHILD_DIMENSION_RATIO) as i32
    }

    /// Smallest side whose children are at least `child_min` wide.
    pub fn side_for_child(child_min: i32) -> i32 {
        (child_min.max(0) as f64 / CHILD_DIMENSION_RATIO).ceil() as i32
    }

    pub fn padding(side: i32) -> f64 {
        side as f64 * PADDING_RATIO
    }

    /// Distance from the menu center to every child center.
    pub fn placement_radius(side: i32) -> f64 {
        side as f64 / 2.0 - Self::child_side(side) as f64 / 2.0 - Self::padding(side)
    }

    pub fn angle_step(count: usize) -> f64 {
        if count == 0 {
            0.0
        } else {
            FULL_CIRCLE / count as f64
        }
    }

    /// Angle in degrees of the `slot`-th of `count` evenly spaced children.
    pub fn angle_at(&self, slot: usize, count: usize) -> f64 {
        (self.start_angle + slot as f64 * Self::angle_step(count)).rem_euclid(FULL_CIRCLE)
    }

    pub fn center_at(side: i32, angle: f64) -> Point {
        let radius = Self::placement_radius(side);
        let half = side as f64 / 2.0;
        let rad = angle.to_radians();
        Point::new(half + radius * rad.cos(), half + radius * rad.sin())
    }

    pub fn bounds_at(side: i32, angle: f64) -> Rect {
        let child = Self::child_side(side);
        let center = Self::center_at(side, angle);
        let half_child = child as f64 / 2.0;
        Rect::square(
            (center.x - half_child).round() as i32,
            (center.y - half_child).round() as i32,
            child,
        )
    }

    /// Places every visible child on the circle, relative to the menu's
    /// top-left corner. Hidden children get `None` and do not take a slot.
    pub fn arrange(&self, side: i32, visibility: &[bool]) -> Vec<Option<Rect>> {
        let count = visibility.iter().filter(|&&v| v).count();
        let step = Self::angle_step(count);
        let mut angle = self.start_angle;

        visibility
            .iter()
            .map(|&visible| {
                if !visible {
                    return None;
                }
                angle = angle.rem_euclid(FULL_CIRCLE);
                let bounds = Self::bounds_at(side, angle);
                angle += step;
                Some(bounds)
            })
            .collect()
    }
}
