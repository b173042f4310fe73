use gtk::gdk;
use gtk4 as gtk;

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
circlemenu button.circle-menu-item {
    border-radius: 9999px;
    padding: 0;
    min-width: 0;
    min-height: 0;
}

circlemenu .circle-menu-label {
    font-size: smaller;
}

.circle-menu-status {
    margin: 8px;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
