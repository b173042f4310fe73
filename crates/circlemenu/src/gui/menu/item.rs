use super::{ICON_PIXEL_SIZE, ITEM_CSS_CLASS, ITEM_SPACING, LABEL_CSS_CLASS};
use crate::sys::icon;
use gtk::prelude::*;
use gtk4 as gtk;
use radial::{IconName, ItemTemplate, Label, MeasureSpec, MenuItem, MenuView, Rect, ViewFactory};
use std::rc::Rc;

/// One menu entry: a flat button holding an icon and/or a label.
#[derive(Debug, Clone)]
pub struct ItemWidget {
    button: gtk::Button,
    item: MenuItem,
}

impl ItemWidget {
    pub fn widget(&self) -> &gtk::Widget {
        self.button.upcast_ref()
    }

    pub fn button(&self) -> &gtk::Button {
        &self.button
    }

    pub fn label(&self) -> Option<&Label> {
        self.item.label.as_ref()
    }

    pub fn icon(&self) -> Option<&IconName> {
        self.item.icon.as_ref()
    }

    /// Larger of the button's minimum width and height.
    pub fn minimum_side(&self) -> i32 {
        let (min_width, ..) = self.button.measure(gtk::Orientation::Horizontal, -1);
        let (min_height, ..) = self.button.measure(gtk::Orientation::Vertical, -1);
        min_width.max(min_height)
    }
}

impl MenuView for ItemWidget {
    fn is_visible(&self) -> bool {
        self.button.should_layout()
    }

    // GTK expects every child to be measured before it is allocated
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) {
        let _ = self.button.measure(gtk::Orientation::Horizontal, height.size);
        let _ = self.button.measure(gtk::Orientation::Vertical, width.size);
    }

    fn place(&mut self, bounds: Rect) {
        let allocation =
            gtk::Allocation::new(bounds.left, bounds.top, bounds.width(), bounds.height());
        self.button.size_allocate(&allocation, -1);
    }
}

/// Builds [`ItemWidget`]s and wires each button to `on_click` with its index.
#[derive(Clone)]
pub struct ButtonFactory {
    on_click: Rc<dyn Fn(usize)>,
}

impl ButtonFactory {
    pub fn new(on_click: impl Fn(usize) + 'static) -> Self {
        Self {
            on_click: Rc::new(on_click),
        }
    }

    fn icon_image(icon: &IconName) -> gtk::Image {
        let image = match icon::find_icon_path(icon) {
            Some(path) => gtk::Image::from_file(path),
            None => gtk::Image::from_icon_name(icon.as_str()),
        };
        image.set_pixel_size(ICON_PIXEL_SIZE);
        image
    }

    fn text_label(label: &Label) -> gtk::Label {
        let text = gtk::Label::new(Some(label.as_str()));
        text.add_css_class(LABEL_CSS_CLASS);
        text.set_wrap(true);
        text.set_justify(gtk::Justification::Center);
        text
    }
}

impl ViewFactory<ItemWidget> for ButtonFactory {
    fn create_view(&self, template: ItemTemplate, index: usize, item: &MenuItem) -> ItemWidget {
        let content = gtk::Box::new(gtk::Orientation::Vertical, ITEM_SPACING);
        content.set_halign(gtk::Align::Center);
        content.set_valign(gtk::Align::Center);

        if template != ItemTemplate::LabelOnly
            && let Some(icon) = &item.icon
        {
            content.append(&Self::icon_image(icon));
        }
        if template != ItemTemplate::IconOnly
            && let Some(label) = &item.label
        {
            content.append(&Self::text_label(label));
        }

        let button = gtk::Button::new();
        button.set_child(Some(&content));
        button.add_css_class(ITEM_CSS_CLASS);
        button.add_css_class("flat");
        button.set_overflow(gtk::Overflow::Hidden);
        if let Some(label) = &item.label {
            button.set_tooltip_text(Some(label.as_str()));
        }

        let on_click = self.on_click.clone();
        button.connect_clicked(move |_| on_click(index));

        ItemWidget {
            button,
            item: item.clone(),
        }
    }
}
