//! Radial menu geometry and container logic, independent of any UI toolkit.
//!
//! A [`CircleMenu`] owns one view per item and lays them out evenly around a
//! circle. Hosts drive it through the two-phase [`Container`] contract and
//! forward clicks with [`CircleMenu::click`].

pub mod error;
pub mod geometry;
pub mod layout;
pub mod macros;
pub mod measure;
pub mod menu;
pub mod source;

pub use error::MenuError;
pub use geometry::{Point, Rect, Size};
pub use layout::{CHILD_DIMENSION_RATIO, Container, FULL_CIRCLE, PADDING_RATIO, RadialLayout};
pub use measure::{DisplayMetrics, MeasureMode, MeasureSpec};
pub use menu::{CircleMenu, ClickListener, MenuView, ViewFactory};
pub use source::{ArraySource, FnSource, IconName, ItemSource, ItemTemplate, Label, MenuItem};
