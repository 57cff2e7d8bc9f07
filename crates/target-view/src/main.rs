use clap::Parser;
use relm4::prelude::*;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use target_rings::TargetView;
use target_view::config;
use target_view::events::AppEvent;
use target_view::gui::app::AppModel;
use target_view::sys::runtime;

#[derive(Parser, Debug)]
#[command(name = "target-view", version, about, long_about = None)]
struct Args {
    /// Configuration file (defaults to the user config directory)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the default configuration file if none exists, then exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => config::default_config_path()?,
    };

    if args.init_config {
        config::write_default_config(&config_path)?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let config = config::load_or_default(&config_path);
    let mut target = match TargetView::from_config(&config) {
        Ok(target) => target,
        Err(e) => {
            log::error!("Invalid configuration, using the built-in target: {}", e);
            TargetView::default()
        }
    };

    let (tx, rx) = async_channel::bounded(32);

    let tap_tx = tx.clone();
    target.set_tap_listener(move |id| {
        if let Err(e) = tap_tx.try_send(AppEvent::Tapped(id)) {
            log::error!("Dropped tap on segment {}: {}", id, e);
        }
    });

    runtime::start_background_services(config_path.clone(), tx);

    // GTK would otherwise try to parse our own flags
    let app = RelmApp::new("org.targetview.TargetView").with_args(Vec::new());
    app.run::<AppModel>((Rc::new(RefCell::new(target)), config_path, rx));
    Ok(())
}
