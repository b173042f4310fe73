use crate::error::MenuError;
use crate::geometry::{Rect, Size};
use crate::layout::{Container, RadialLayout};
use crate::measure::{DisplayMetrics, MeasureSpec};
use crate::source::{ArraySource, IconName, ItemSource, ItemTemplate, Label, MenuItem};
use std::rc::Rc;

/// A child view as seen by the menu. Hosts implement this for whatever their
/// toolkit uses as a widget handle.
pub trait MenuView {
    fn is_visible(&self) -> bool {
        true
    }

    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec);

    /// Final bounds in the coordinate space of the menu's parent.
    fn place(&mut self, bounds: Rect);
}

/// Builds the view for one item.
pub trait ViewFactory<V> {
    fn create_view(&self, template: ItemTemplate, index: usize, item: &MenuItem) -> V;
}

impl<V, F> ViewFactory<V> for F
where
    F: Fn(ItemTemplate, usize, &MenuItem) -> V,
{
    fn create_view(&self, template: ItemTemplate, index: usize, item: &MenuItem) -> V {
        self(template, index, item)
    }
}

pub type ClickListener<V> = Rc<dyn Fn(&V, usize)>;

pub struct CircleMenu<V> {
    engine: RadialLayout,
    template: ItemTemplate,
    factory: Box<dyn ViewFactory<V>>,
    adapter: Option<Box<dyn ItemSource>>,
    listener: Option<ClickListener<V>>,
    children: Vec<V>,
    size: Size,
    child_bounds: Vec<Option<Rect>>,
}

impl<V> CircleMenu<V> {
    pub fn new(factory: impl ViewFactory<V> + 'static) -> Self {
        Self {
            engine: RadialLayout::default(),
            template: ItemTemplate::default(),
            factory: Box::new(factory),
            adapter: None,
            listener: None,
            children: Vec::new(),
            size: Size::default(),
            child_bounds: Vec::new(),
        }
    }

    pub fn with_template(mut self, template: ItemTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_start_angle(mut self, degrees: f64) -> Self {
        self.engine.start_angle = degrees;
        self
    }

    pub fn with_display_metrics(mut self, display: DisplayMetrics) -> Self {
        self.engine.display = display;
        self
    }

    pub fn with_suggested_minimum(mut self, size: Size) -> Self {
        self.engine.suggested_minimum = size;
        self
    }

    pub fn template(&self) -> ItemTemplate {
        self.template
    }

    /// Only affects items supplied after this call.
    pub fn set_item_template(&mut self, template: ItemTemplate) {
        self.template = template;
    }

    pub fn start_angle(&self) -> f64 {
        self.engine.start_angle
    }

    pub fn set_start_angle(&mut self, degrees: f64) {
        self.engine.start_angle = degrees;
    }

    pub fn set_display_metrics(&mut self, display: DisplayMetrics) {
        self.engine.display = display;
    }

    pub fn set_suggested_minimum(&mut self, size: Size) {
        self.engine.suggested_minimum = size;
    }

    /// Populates the menu from parallel icon and label arrays, replacing any
    /// previous children. At least one array must be given.
    pub fn set_items(
        &mut self,
        icons: Option<Vec<IconName>>,
        labels: Option<Vec<Label>>,
    ) -> Result<(), MenuError> {
        let source = ArraySource::new(icons, labels)?;
        self.adapter = None;
        self.populate(&source);
        Ok(())
    }

    /// Children are built from the adapter on the next [`CircleMenu::attach`].
    pub fn set_adapter(&mut self, adapter: impl ItemSource + 'static) {
        self.adapter = Some(Box::new(adapter));
    }

    pub fn has_adapter(&self) -> bool {
        self.adapter.is_some()
    }

    /// Host notification that the menu became part of a window.
    pub fn attach(&mut self) {
        if let Some(adapter) = self.adapter.take() {
            self.populate(&*adapter);
            self.adapter = Some(adapter);
        }
    }

    fn populate(&mut self, source: &dyn ItemSource) {
        let count = source.count();
        self.children = (0..count)
            .filter_map(|i| source.item_at(i).map(|item| (i, item)))
            .map(|(i, item)| self.factory.create_view(self.template, i, &item))
            .collect();
        self.child_bounds.clear();
        log::debug!(
            "Built {} menu items with template {}",
            self.children.len(),
            self.template
        );
    }

    pub fn set_on_menu_click(&mut self, listener: impl Fn(&V, usize) + 'static) {
        self.listener = Some(Rc::new(listener));
    }

    pub fn clear_on_menu_click(&mut self) {
        self.listener = None;
    }

    /// Forwards a click on the item at `index` to the listener. Returns
    /// whether a listener received it.
    pub fn click(&self, index: usize) -> bool {
        let Some(view) = self.children.get(index) else {
            log::warn!("Click on unknown menu item {}", index);
            return false;
        };

        match &self.listener {
            Some(listener) => {
                listener(view, index);
                true
            }
            None => {
                log::debug!("Menu item {} clicked without a listener", index);
                false
            }
        }
    }

    /// The view at `index` and the listener, detached from the menu so the
    /// listener may modify the menu while it runs. `None` when there is no
    /// such item or no listener.
    pub fn pending_click(&self, index: usize) -> Option<(V, ClickListener<V>)>
    where
        V: Clone,
    {
        let Some(view) = self.children.get(index) else {
            log::warn!("Click on unknown menu item {}", index);
            return None;
        };
        let Some(listener) = &self.listener else {
            log::debug!("Menu item {} clicked without a listener", index);
            return None;
        };
        Some((view.clone(), listener.clone()))
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn views(&self) -> &[V] {
        &self.children
    }

    pub fn views_mut(&mut self) -> &mut [V] {
        &mut self.children
    }

    pub fn view(&self, index: usize) -> Option<&V> {
        self.children.get(index)
    }

    /// Measured square size from the last measurement pass.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn side(&self) -> i32 {
        self.size.width
    }

    pub fn child_side(&self) -> i32 {
        RadialLayout::child_side(self.side())
    }

    /// Bounds assigned in the last layout pass, `None` for hidden children.
    pub fn child_bounds(&self) -> &[Option<Rect>] {
        &self.child_bounds
    }
}

impl<V: MenuView> Container for CircleMenu<V> {
    fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        self.size = self.engine.measure(width, height);

        let child_spec = MeasureSpec::exactly(RadialLayout::child_side(self.size.width));
        self.children
            .iter_mut()
            .filter(|child| child.is_visible())
            .for_each(|child| child.measure(child_spec, child_spec));

        log::debug!(
            "Measured circle menu {}x{} for {} x {}",
            self.size.width,
            self.size.height,
            width,
            height
        );
        self.size
    }

    fn layout(&mut self, bounds: Rect) {
        if self.size.is_empty() {
            self.measure(
                MeasureSpec::exactly(bounds.width()),
                MeasureSpec::exactly(bounds.height()),
            );
        }

        let visibility: Vec<bool> = self.children.iter().map(MenuView::is_visible).collect();
        self.child_bounds = self
            .engine
            .arrange(self.size.width, &visibility)
            .into_iter()
            .map(|rect| rect.map(|r| r.offset(bounds.left, bounds.top)))
            .collect();

        for (child, rect) in self.children.iter_mut().zip(&self.child_bounds) {
            if let Some(rect) = rect {
                child.place(*rect);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FnSource;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    struct TestView {
        index: usize,
        item: MenuItem,
        template: ItemTemplate,
        visible: bool,
        measured: Option<(MeasureSpec, MeasureSpec)>,
        placed: Option<Rect>,
    }

    impl MenuView for TestView {
        fn is_visible(&self) -> bool {
            self.visible
        }

        fn measure(&mut self, width: MeasureSpec, height: MeasureSpec) {
            self.measured = Some((width, height));
        }

        fn place(&mut self, bounds: Rect) {
            self.placed = Some(bounds);
        }
    }

    fn test_menu() -> CircleMenu<TestView> {
        CircleMenu::new(|template: ItemTemplate, index: usize, item: &MenuItem| TestView {
            index,
            item: item.clone(),
            template,
            visible: true,
            measured: None,
            placed: None,
        })
    }

    fn labelled(n: usize) -> impl ItemSource {
        FnSource::new(n, |i| MenuItem::new(None, Some(Label::new(format!("item {i}")))))
    }

    type Clicks = Rc<RefCell<Vec<(usize, usize)>>>;

    fn record_clicks(menu: &mut CircleMenu<TestView>) -> Clicks {
        let clicks = Clicks::default();
        let sink = clicks.clone();
        menu.set_on_menu_click(move |view, index| sink.borrow_mut().push((view.index, index)));
        clicks
    }

    #[test]
    fn test_set_items_builds_immediately() {
        let mut menu = test_menu();
        let icons = (0..6).map(|i| IconName::new(format!("icon-{i}"))).collect();
        let labels = (0..4).map(|i| Label::new(format!("label-{i}"))).collect();

        menu.set_items(Some(icons), Some(labels)).unwrap();

        assert_eq!(menu.len(), 4);
        assert_eq!(menu.views()[2].item.label, Some(Label::from("label-2")));
        assert_eq!(menu.views()[2].item.icon, Some(IconName::from("icon-2")));
    }

    #[test]
    fn test_set_items_rejects_missing_arrays_without_touching_state() {
        let mut menu = test_menu();
        menu.set_items(None, Some(vec![Label::from("keep")])).unwrap();

        assert_eq!(menu.set_items(None, None), Err(MenuError::MissingItems));
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.views()[0].item.label, Some(Label::from("keep")));
    }

    #[test]
    fn test_template_applies_to_later_items() {
        let mut menu = test_menu().with_template(ItemTemplate::IconOnly);
        menu.set_items(Some(vec![IconName::from("a")]), None).unwrap();
        assert_eq!(menu.views()[0].template, ItemTemplate::IconOnly);

        menu.set_item_template(ItemTemplate::LabelOnly);
        menu.set_items(None, Some(vec![Label::from("b")])).unwrap();
        assert_eq!(menu.views()[0].template, ItemTemplate::LabelOnly);
    }

    #[test]
    fn test_adapter_populates_on_attach() {
        let mut menu = test_menu();
        menu.set_adapter(labelled(5));
        assert!(menu.is_empty());

        menu.attach();
        assert_eq!(menu.len(), 5);

        // reattaching rebuilds instead of appending
        menu.attach();
        assert_eq!(menu.len(), 5);
        assert!(menu.has_adapter());
    }

    #[test]
    fn test_attach_without_adapter_keeps_array_items() {
        let mut menu = test_menu();
        menu.set_items(None, Some(vec![Label::from("a"), Label::from("b")]))
            .unwrap();
        menu.attach();
        assert_eq!(menu.len(), 2);
    }

    #[test]
    fn test_adapter_click_forwards_view_and_index() {
        let mut menu = test_menu();
        menu.set_adapter(labelled(6));
        menu.attach();
        let clicks = record_clicks(&mut menu);

        for k in 0..6 {
            assert!(menu.click(k));
        }

        let expected: Vec<_> = (0..6).map(|k| (k, k)).collect();
        assert_eq!(*clicks.borrow(), expected);
    }

    #[test]
    fn test_click_without_listener_is_dropped() {
        let mut menu = test_menu();
        menu.set_adapter(labelled(3));
        menu.attach();
        assert!(!menu.click(1));

        let clicks = record_clicks(&mut menu);
        menu.clear_on_menu_click();
        assert!(!menu.click(1));
        assert!(clicks.borrow().is_empty());
    }

    #[test]
    fn test_listener_can_rebuild_the_menu() {
        let menu = Rc::new(RefCell::new(test_menu()));
        menu.borrow_mut().set_adapter(labelled(3));
        menu.borrow_mut().attach();

        let handle = Rc::downgrade(&menu);
        menu.borrow_mut().set_on_menu_click(move |view: &TestView, index: usize| {
            assert_eq!(view.index, index);
            if let Some(menu) = handle.upgrade() {
                let labels = vec![Label::from("back"), Label::from("next")];
                menu.borrow_mut().set_items(None, Some(labels)).unwrap();
                menu.borrow_mut().set_start_angle(90.0);
            }
        });

        let pending = menu.borrow().pending_click(2);
        let (view, listener) = pending.unwrap();
        listener(&view, 2);

        let menu = menu.borrow();
        assert_eq!(menu.len(), 2);
        assert_eq!(menu.views()[0].item.label, Some(Label::from("back")));
        assert_eq!(menu.start_angle(), 90.0);
    }

    #[test]
    fn test_pending_click_needs_item_and_listener() {
        let mut menu = test_menu();
        menu.set_items(None, Some(vec![Label::from("only")])).unwrap();
        assert!(menu.pending_click(0).is_none());

        let clicks = record_clicks(&mut menu);
        assert!(menu.pending_click(1).is_none());
        let (view, listener) = menu.pending_click(0).unwrap();
        listener(&view, 0);
        assert_eq!(*clicks.borrow(), vec![(0, 0)]);
    }

    #[test]
    fn test_click_out_of_range_is_ignored() {
        let mut menu = test_menu();
        menu.set_items(None, Some(vec![Label::from("only")])).unwrap();
        let clicks = record_clicks(&mut menu);

        assert!(!menu.click(1));
        assert!(clicks.borrow().is_empty());
    }

    #[test]
    fn test_measure_sizes_children_exactly() {
        let mut menu = test_menu();
        menu.set_adapter(labelled(3));
        menu.attach();

        let size = menu.measure(MeasureSpec::exactly(400), MeasureSpec::exactly(640));

        assert_eq!(size, Size::square(400));
        assert_eq!(menu.child_side(), 100);
        for view in menu.views() {
            assert_eq!(
                view.measured,
                Some((MeasureSpec::exactly(100), MeasureSpec::exactly(100)))
            );
        }
    }

    #[test]
    fn test_layout_offsets_by_bounds_origin() {
        let mut menu = test_menu();
        menu.set_adapter(labelled(6));
        menu.attach();

        menu.measure(MeasureSpec::exactly(480), MeasureSpec::exactly(480));
        menu.layout(Rect::square(10, 20, 480));

        assert_eq!(menu.views()[0].placed, Some(Rect::new(330, 200, 450, 320)));
        assert_eq!(menu.views()[3].placed, Some(Rect::new(50, 200, 170, 320)));
        assert_eq!(menu.child_bounds()[0], menu.views()[0].placed);
    }

    #[test]
    fn test_layout_is_repeatable() {
        let mut menu = test_menu().with_start_angle(15.0);
        menu.set_adapter(labelled(7));
        menu.attach();
        menu.measure(MeasureSpec::exactly(500), MeasureSpec::exactly(500));

        menu.layout(Rect::square(0, 0, 500));
        let first = menu.child_bounds().to_vec();
        menu.layout(Rect::square(0, 0, 500));
        assert_eq!(menu.child_bounds(), first.as_slice());
    }

    #[test]
    fn test_hidden_views_are_skipped() {
        let mut menu = test_menu();
        menu.set_adapter(labelled(4));
        menu.attach();
        menu.views_mut()[1].visible = false;

        menu.measure(MeasureSpec::exactly(480), MeasureSpec::exactly(480));
        menu.layout(Rect::square(0, 0, 480));

        assert_eq!(menu.views()[1].measured, None);
        assert_eq!(menu.views()[1].placed, None);
        assert_eq!(menu.child_bounds()[1], None);
        // three visible views split the circle in thirds
        assert_eq!(menu.views()[0].placed, Some(Rect::new(320, 180, 440, 300)));
        let third = menu.views()[2].placed.unwrap().center();
        let angle = crate::Point::new(240.0, 240.0).angle_to(third);
        assert!((angle - 120.0).abs() < 0.5);
    }

    #[test]
    fn test_layout_without_measure_uses_bounds() {
        let mut menu = test_menu();
        menu.set_items(None, Some(vec![Label::from("a"), Label::from("b")]))
            .unwrap();

        menu.layout(Rect::new(0, 0, 800, 480));
        assert_eq!(menu.size(), Size::square(480));
        assert!(menu.views().iter().all(|v| v.placed.is_some()));
    }

    #[test]
    fn test_unconstrained_measure_uses_display() {
        let mut menu = test_menu().with_display_metrics(DisplayMetrics::new(720, 1280));
        let size = menu.measure(MeasureSpec::unspecified(), MeasureSpec::at_most(300));
        assert_eq!(size, Size::square(720));
    }
}
