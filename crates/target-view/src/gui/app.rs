use crate::config;
use crate::events::AppEvent;
use crate::gui::{self, CONTAINER_FILL, WINDOW_SIZE};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use target_rings::geometry::{Point, Rect};
use target_rings::{ReferenceId, TargetView};

pub struct AppModel {
    pub target: Rc<RefCell<TargetView>>,
    pub config_path: PathBuf,
    pub status: String,
    pub drawing_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    Resize(i32, i32),
    PointerDown(Point),
    PointerMove(Point),
    PointerUp(Point),
    Tapped(ReferenceId),
    ConfigReload,
    Quit,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::Tapped(id) => AppMsg::Tapped(id),
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (
        Rc<RefCell<TargetView>>,
        PathBuf,
        async_channel::Receiver<AppEvent>,
    );
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Target"),
            set_default_width: WINDOW_SIZE,
            set_default_height: WINDOW_SIZE,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gdk4::Key::Escape {
                        sender.input(AppMsg::Quit);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,

                #[name = "drawing_area"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,

                    connect_resize[sender] => move |_, width, height| {
                        sender.input(AppMsg::Resize(width, height));
                    },

                    add_controller = gtk::EventControllerMotion {
                        connect_motion[sender] => move |_, x, y| {
                            sender.input(AppMsg::PointerMove(Point::new(x, y)));
                        }
                    },

                    add_controller = gtk::GestureClick {
                        set_button: gdk4::BUTTON_PRIMARY,
                        connect_pressed[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::PointerDown(Point::new(x, y)));
                        },
                        connect_released[sender] => move |_, _, x, y| {
                            sender.input(AppMsg::PointerUp(Point::new(x, y)));
                        }
                    }
                },

                gtk::Label {
                    set_margin_top: 8,
                    set_margin_bottom: 8,
                    #[watch]
                    set_label: &model.status,
                }
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (target, config_path, rx) = init;

        let model = AppModel {
            target,
            config_path,
            status: "Tap a segment".to_string(),
            drawing_area: gtk::DrawingArea::default(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.drawing_area = widgets.drawing_area.clone();

        let target_draw = model.target.clone();
        widgets
            .drawing_area
            .set_draw_func(move |_, cr, _, _| {
                if let Err(e) = gui::draw(cr, &target_draw.borrow()) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::Resize(width, height) => {
                let bounds =
                    Rect::from_size(width as f64, height as f64).centered_square(CONTAINER_FILL);
                if let Err(e) = self.target.borrow_mut().on_bounds_changed(bounds) {
                    log::error!("Layout failed: {}", e);
                    self.status = format!("Layout failed: {}", e);
                }
                self.drawing_area.queue_draw();
            }
            AppMsg::PointerDown(point) => self.target.borrow_mut().on_pointer_down(point),
            AppMsg::PointerMove(point) => self.target.borrow_mut().on_pointer_moved(point),
            AppMsg::PointerUp(point) => {
                // the tap listener reports back through the event channel
                let _ = self.target.borrow_mut().on_pointer_up(point);
            }
            AppMsg::Tapped(id) => {
                self.status = format!("Segment id: {} was tapped!", id);
            }
            AppMsg::ConfigReload => {
                let new_config = config::load_config(&self.config_path);
                match new_config {
                    Ok(new_config) => {
                        match self.target.borrow_mut().reconfigure(&new_config) {
                            Ok(()) => log::info!("Configuration reloaded"),
                            Err(e) => log::error!("Rejected reloaded configuration: {}", e),
                        }
                        self.drawing_area.queue_draw();
                    }
                    Err(e) => log::error!("Failed to reload config: {}", e),
                }
            }
            AppMsg::Quit => relm4::main_application().quit(),
        }
    }
}
