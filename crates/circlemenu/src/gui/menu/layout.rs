use super::CircleMenuWidget;
use gtk::glib;
use gtk::prelude::*;
use gtk::subclass::prelude::*;
use gtk4 as gtk;

mod imp {
    use super::*;

    #[derive(Default)]
    pub struct RadialLayoutManager;

    #[glib::object_subclass]
    impl ObjectSubclass for RadialLayoutManager {
        const NAME: &'static str = "CircleMenuRadialLayout";
        type Type = super::RadialLayoutManager;
        type ParentType = gtk::LayoutManager;
    }

    impl ObjectImpl for RadialLayoutManager {}

    impl LayoutManagerImpl for RadialLayoutManager {
        fn request_mode(&self, _widget: &gtk::Widget) -> gtk::SizeRequestMode {
            gtk::SizeRequestMode::ConstantSize
        }

        /// The menu can shrink until its items reach their own minimum, and
        /// prefers the side it would pick without constraints.
        fn measure(
            &self,
            widget: &gtk::Widget,
            _orientation: gtk::Orientation,
            _for_size: i32,
        ) -> (i32, i32, i32, i32) {
            let Some(menu) = widget.downcast_ref::<CircleMenuWidget>() else {
                return (0, 0, -1, -1);
            };
            let minimum = menu.minimum_side();
            (minimum, menu.natural_side().max(minimum), -1, -1)
        }

        fn allocate(&self, widget: &gtk::Widget, width: i32, height: i32, _baseline: i32) {
            if let Some(menu) = widget.downcast_ref::<CircleMenuWidget>() {
                menu.allocate_items(width, height);
            }
        }
    }
}

glib::wrapper! {
    /// Layout manager that hands GTK's measure and allocate passes to the
    /// radial layout engine of a [`CircleMenuWidget`].
    pub struct RadialLayoutManager(ObjectSubclass<imp::RadialLayoutManager>)
        @extends gtk::LayoutManager;
}

impl Default for RadialLayoutManager {
    fn default() -> Self {
        glib::Object::new()
    }
}
