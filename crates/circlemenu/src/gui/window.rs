use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use radial::DisplayMetrics;

pub fn first_monitor(display: &gdk::Display) -> Option<gdk::Monitor> {
    let monitors = display.monitors();
    (0..monitors.n_items()).find_map(|i| {
        monitors
            .item(i)
            .and_then(|item| item.downcast::<gdk::Monitor>().ok())
    })
}

/// Size of the screen the widget lives on, zero when no monitor is known yet.
pub fn display_metrics(widget: &impl IsA<gtk::Widget>) -> DisplayMetrics {
    first_monitor(&widget.as_ref().display())
        .map(|m| {
            let geometry = m.geometry();
            DisplayMetrics::new(geometry.width(), geometry.height())
        })
        .unwrap_or_default()
}
