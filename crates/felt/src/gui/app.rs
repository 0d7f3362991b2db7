use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::page::{self, SectionExtent};
use crate::gui::theme;
use crate::gui::wheel::WheelWidget;
use chipwheel::{ChipWheel, Dock, ItemId, SkinKind};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::path::PathBuf;

/// Command line choices that outlive configuration reloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    pub dock: Option<Dock>,
    pub skin: Option<SkinKind>,
}

impl Overrides {
    pub fn apply(&self, config: &mut Config) {
        if let Some(dock) = self.dock {
            config.wheel.dock = dock;
        }
        if let Some(skin) = self.skin {
            config.wheel.skin = skin;
        }
    }
}

pub struct AppInit {
    pub config: Config,
    pub overrides: Overrides,
    pub config_path: PathBuf,
    pub events: async_channel::Receiver<AppEvent>,
}

pub struct AppModel {
    config: Config,
    overrides: Overrides,
    config_path: PathBuf,
    sections: Vec<SectionExtent>,
    active: Option<ItemId>,
    wheel: WheelWidget,
    scroller: gtk::ScrolledWindow,
    toolbar: gtk::Box,
}

#[derive(Debug)]
pub enum AppMsg {
    /// The page scrolled or was resized.
    Scrolled,
    /// Bring a section into view, from the toolbar or the wheel.
    Navigate(ItemId),
    Nudge(i64),
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
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Felt"),
            set_default_size: (960, 720),

            add_controller = gtk::EventControllerKey {
                set_propagation_phase: gtk::PropagationPhase::Capture,
                connect_key_pressed[sender] => move |_, key, _, _| {
                    match key {
                        gtk::gdk::Key::Escape => sender.input(AppMsg::Quit),
                        gtk::gdk::Key::Left => sender.input(AppMsg::Nudge(-1)),
                        gtk::gdk::Key::Right => sender.input(AppMsg::Nudge(1)),
                        _ => return glib::Propagation::Proceed,
                    }
                    glib::Propagation::Stop
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "toolbar"]
                gtk::Box {
                    set_orientation: gtk::Orientation::Horizontal,
                    set_spacing: 6,
                    set_margin_all: 6,
                },

                gtk::Overlay {
                    set_vexpand: true,

                    #[wrap(Some)]
                    #[name = "scroller"]
                    set_child = &gtk::ScrolledWindow {
                        set_hscrollbar_policy: gtk::PolicyType::Never,
                        set_vexpand: true,
                    },

                    #[name = "wheel_area"]
                    add_overlay = &gtk::DrawingArea {
                        add_css_class: "felt-wheel",
                    },
                },
            },
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let AppInit {
            mut config,
            overrides,
            config_path,
            events,
        } = init;
        overrides.apply(&mut config);

        let widgets = view_output!();
        theme::install_css(&widgets.window.display());

        let wheel = {
            let sender = sender.clone();
            WheelWidget::new(
                widgets.wheel_area.clone(),
                ChipWheel::new(config.nav_items(), config.wheel.clone()),
                move |id| sender.input(AppMsg::Navigate(id)),
            )
        };

        let mut model = AppModel {
            config,
            overrides,
            config_path,
            sections: Vec::new(),
            active: None,
            wheel,
            scroller: widgets.scroller.clone(),
            toolbar: widgets.toolbar.clone(),
        };
        model.rebuild_page(&sender);

        let adjustment = model.scroller.vadjustment();
        {
            let sender = sender.clone();
            adjustment.connect_value_changed(move |_| sender.input(AppMsg::Scrolled));
        }
        {
            let sender = sender.clone();
            adjustment.connect_changed(move |_| sender.input(AppMsg::Scrolled));
        }

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
            AppMsg::Scrolled => {
                let adjustment = self.scroller.vadjustment();
                if let Some(id) =
                    page::active_section(&self.sections, adjustment.value(), adjustment.page_size())
                    && self.active.as_ref() != Some(id)
                {
                    log::debug!("Section in view: {}", id);
                    self.active = Some(id.clone());
                    self.wheel.set_active_id(self.active.clone());
                }
            }
            AppMsg::Navigate(id) => match page::scroll_target(&self.sections, &id) {
                Some(top) => self.scroller.vadjustment().set_value(top),
                None => log::warn!("No section '{}' on the page", id),
            },
            AppMsg::Nudge(delta) => self.wheel.step_by(delta),
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(mut new_config) => {
                    if new_config.sections.is_empty() {
                        new_config.sections = self.config.sections.clone();
                    }
                    self.overrides.apply(&mut new_config);

                    let sections_changed = new_config.sections != self.config.sections;
                    self.config = new_config;
                    self.wheel.replace(ChipWheel::new(
                        self.config.nav_items(),
                        self.config.wheel.clone(),
                    ));
                    if sections_changed {
                        self.rebuild_page(&sender);
                    }
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }

    fn shutdown(&mut self, _widgets: &mut Self::Widgets, _output: relm4::Sender<Self::Output>) {
        self.wheel.teardown();
    }
}

impl AppModel {
    fn rebuild_page(&mut self, sender: &ComponentSender<Self>) {
        let sections = &self.config.sections;
        self.scroller.set_child(Some(&page::build_page(sections)));
        self.sections = page::stack(sections.iter().map(|s| s.id.clone()));

        while let Some(child) = self.toolbar.first_child() {
            self.toolbar.remove(&child);
        }
        for section in sections {
            let button = gtk::Button::with_label(&section.label);
            button.add_css_class("flat");
            let sender = sender.clone();
            let id = section.id.clone();
            button.connect_clicked(move |_| sender.input(AppMsg::Navigate(id.clone())));
            self.toolbar.append(&button);
        }

        self.active = None;
        sender.input(AppMsg::Scrolled);
    }
}
