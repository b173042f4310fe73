use super::{ButtonFactory, ItemWidget, RadialLayoutManager};
use crate::gui::window;
use gtk::glib;
use gtk::prelude::*;
use gtk::subclass::prelude::*;
use gtk4 as gtk;
use radial::{
    CircleMenu, Container, IconName, ItemSource, ItemTemplate, Label, MeasureSpec, MenuError,
    MenuView, RadialLayout, Rect,
};

mod imp {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    pub struct CircleMenuWidget {
        pub(super) menu: RefCell<CircleMenu<ItemWidget>>,
        owner: Rc<glib::WeakRef<super::CircleMenuWidget>>,
    }

    impl Default for CircleMenuWidget {
        fn default() -> Self {
            let owner: Rc<glib::WeakRef<super::CircleMenuWidget>> = Rc::default();
            let target = owner.clone();
            let factory = ButtonFactory::new(move |index| {
                if let Some(obj) = target.upgrade() {
                    obj.dispatch_click(index);
                }
            });

            Self {
                menu: RefCell::new(CircleMenu::new(factory)),
                owner,
            }
        }
    }

    #[glib::object_subclass]
    impl ObjectSubclass for CircleMenuWidget {
        const NAME: &'static str = "CircleMenuWidget";
        type Type = super::CircleMenuWidget;
        type ParentType = gtk::Widget;

        fn class_init(klass: &mut Self::Class) {
            klass.set_layout_manager_type::<RadialLayoutManager>();
            klass.set_css_name("circlemenu");
        }
    }

    impl ObjectImpl for CircleMenuWidget {
        fn constructed(&self) {
            self.parent_constructed();
            self.owner.set(Some(&*self.obj()));
        }

        fn dispose(&self) {
            while let Some(child) = self.obj().first_child() {
                child.unparent();
            }
        }
    }

    impl WidgetImpl for CircleMenuWidget {
        fn root(&self) {
            self.parent_root();
            self.obj().attach();
        }
    }
}

glib::wrapper! {
    /// A container that lays its items out evenly around a circle.
    ///
    /// Items come either from parallel icon/label arrays
    /// ([`CircleMenuWidget::set_items`]) or from an [`ItemSource`] adapter that
    /// is queried once the widget is added to a window.
    pub struct CircleMenuWidget(ObjectSubclass<imp::CircleMenuWidget>)
        @extends gtk::Widget,
        @implements gtk::Accessible, gtk::Buildable, gtk::ConstraintTarget;
}

impl Default for CircleMenuWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleMenuWidget {
    pub fn new() -> Self {
        glib::Object::new()
    }

    /// Must be called before items are supplied to take effect.
    pub fn set_item_template(&self, template: ItemTemplate) {
        self.imp().menu.borrow_mut().set_item_template(template);
    }

    pub fn set_start_angle(&self, degrees: f64) {
        self.imp().menu.borrow_mut().set_start_angle(degrees);
        self.queue_allocate();
    }

    pub fn set_items(
        &self,
        icons: Option<Vec<IconName>>,
        labels: Option<Vec<Label>>,
    ) -> Result<(), MenuError> {
        self.imp().menu.borrow_mut().set_items(icons, labels)?;
        self.sync_children();
        Ok(())
    }

    /// Items are built when the widget is rooted, or right away if it
    /// already is.
    pub fn set_adapter(&self, adapter: impl ItemSource + 'static) {
        self.imp().menu.borrow_mut().set_adapter(adapter);
        if self.root().is_some() {
            self.attach();
        }
    }

    pub fn set_on_menu_click(&self, listener: impl Fn(&ItemWidget, usize) + 'static) {
        self.imp().menu.borrow_mut().set_on_menu_click(listener);
    }

    pub fn item_count(&self) -> usize {
        self.imp().menu.borrow().len()
    }

    fn attach(&self) {
        let built = {
            let mut menu = self.imp().menu.borrow_mut();
            menu.attach();
            menu.has_adapter()
        };
        if built {
            self.sync_children();
        }
    }

    /// Reparents the widgets of the current menu views and drops stale ones.
    fn sync_children(&self) {
        let current: Vec<gtk::Widget> = self
            .imp()
            .menu
            .borrow()
            .views()
            .iter()
            .map(|view| view.widget().clone())
            .collect();

        let mut child = self.first_child();
        while let Some(widget) = child {
            child = widget.next_sibling();
            if !current.contains(&widget) {
                widget.unparent();
            }
        }

        for widget in &current {
            if widget.parent().is_none() {
                widget.set_parent(self);
            }
        }
        self.queue_resize();
    }

    // The menu is released before the listener runs, it may rebuild us.
    fn dispatch_click(&self, index: usize) {
        let pending = self.imp().menu.borrow().pending_click(index);
        let Some((view, listener)) = pending else {
            return;
        };
        if let Some(label) = view.label() {
            log::debug!("Menu item {} ({}) clicked", index, label);
        }
        listener(&view, index);
    }

    /// Smallest side at which every visible item still gets its minimum size.
    pub(super) fn minimum_side(&self) -> i32 {
        let child_min = self
            .imp()
            .menu
            .borrow()
            .views()
            .iter()
            .filter(|view| view.is_visible())
            .map(ItemWidget::minimum_side)
            .max()
            .unwrap_or_default();
        RadialLayout::side_for_child(child_min)
    }

    pub(super) fn natural_side(&self) -> i32 {
        let mut menu = self.imp().menu.borrow_mut();
        menu.set_display_metrics(window::display_metrics(self));
        menu.measure(MeasureSpec::unspecified(), MeasureSpec::unspecified())
            .width
    }

    /// Fits the circle into the allocation and centers it.
    pub(super) fn allocate_items(&self, width: i32, height: i32) {
        let mut menu = self.imp().menu.borrow_mut();
        let size = menu.measure(MeasureSpec::exactly(width), MeasureSpec::exactly(height));
        let bounds = Rect::square(
            (width - size.width) / 2,
            (height - size.height) / 2,
            size.width,
        );
        menu.layout(bounds);
    }
}
