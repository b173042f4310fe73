use crate::config::{self, Config, ItemsAdapter, SourceMode};
use crate::events::AppEvent;
use crate::gui::menu::CircleMenuWidget;
use crate::gui::theme;
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::path::PathBuf;

pub const DEFAULT_WINDOW_SIZE: i32 = 640;
const IDLE_STATUS: &str = "Pick an item";

pub struct AppInit {
    pub config: Config,
    pub config_path: PathBuf,
    /// Overrides the mode from the config file.
    pub mode: Option<SourceMode>,
    pub events: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    pub menu: CircleMenuWidget,
    pub config: Config,
    pub config_path: PathBuf,
    pub mode: Option<SourceMode>,
    pub status: String,
}

#[derive(Debug)]
pub enum AppMsg {
    ItemClicked(usize),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = AppInit;
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Circle Menu"),
            set_default_size: (DEFAULT_WINDOW_SIZE, DEFAULT_WINDOW_SIZE),
            add_css_class: "circle-menu-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[local_ref]
                menu_widget -> CircleMenuWidget {
                    set_hexpand: true,
                    set_vexpand: true,
                },

                gtk::Label {
                    add_css_class: "circle-menu-status",
                    #[watch]
                    set_label: &model.status,
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            config,
            config_path,
            mode,
            events,
        } = init;

        theme::load_css();

        let model = AppModel {
            menu: CircleMenuWidget::new(),
            config,
            config_path,
            mode,
            status: IDLE_STATUS.to_string(),
        };
        model.populate_menu(&sender);

        let menu_widget = &model.menu;
        let widgets = view_output!();

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = events.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::ItemClicked(index) => {
                self.status = match self.config.label_at(index) {
                    Some(label) => label.to_string(),
                    None => format!("Item {}", index + 1),
                };
                log::info!("Selected menu item {}: {}", index, self.status);
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    self.config = new_config;
                    self.status = IDLE_STATUS.to_string();
                    self.populate_menu(&sender);
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }
}

impl AppModel {
    fn populate_menu(&self, sender: &ComponentSender<Self>) {
        let mode = self.mode.unwrap_or(self.config.mode);

        self.menu.set_item_template(self.config.template);
        self.menu.set_start_angle(self.config.start_angle);

        let input = sender.input_sender().clone();
        self.menu.set_on_menu_click(move |_, index| {
            input.emit(AppMsg::ItemClicked(index));
        });

        match mode {
            SourceMode::Arrays => {
                if let Err(e) = self
                    .menu
                    .set_items(self.config.icons(), self.config.labels())
                {
                    log::error!("Failed to set menu items: {}", e);
                }
            }
            SourceMode::Adapter => self
                .menu
                .set_adapter(ItemsAdapter::new(self.config.items.clone())),
        }
        log::debug!("Populating menu in {} mode", mode);
    }
}
