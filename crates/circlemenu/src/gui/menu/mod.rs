mod item;
mod layout;
mod widget;

pub use item::{ButtonFactory, ItemWidget};
pub use layout::RadialLayoutManager;
pub use widget::CircleMenuWidget;

pub const ICON_PIXEL_SIZE: i32 = 48;
pub const ITEM_SPACING: i32 = 4;
pub const ITEM_CSS_CLASS: &str = "circle-menu-item";
pub const LABEL_CSS_CLASS: &str = "circle-menu-label";
