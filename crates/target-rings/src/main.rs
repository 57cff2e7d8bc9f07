use clap::{Parser, Subcommand};
use target_rings::geometry::{Point, Rect};
use target_rings::layout;
use target_rings::{SegmentStore, TargetView};

#[derive(Parser, Debug)]
#[command(name = "target-rings", version, about, long_about = None)]
struct Cli {
    /// Side length of the square container
    #[arg(short, long, global = true, default_value_t = 300.0)]
    size: f64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Print every segment's angles and label anchor
    Layout,
    /// Print the reference id of the segment under a point
    Hit { x: f64, y: f64 },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let bounds = Rect::from_size(cli.size, cli.size);

    match cli.command {
        Commands::Layout => print_layout(bounds),
        Commands::Hit { x, y } => {
            let mut view = TargetView::default();
            view.on_bounds_changed(bounds)?;
            match view.hit_test(Point::new(x, y)) {
                Some(id) => println!("{}", id),
                None => println!("no hit"),
            }
            Ok(())
        }
    }
}

fn print_layout(bounds: Rect) -> anyhow::Result<()> {
    let store = SegmentStore::new();
    let result = layout::layout(bounds, store.rings())?;

    for ring in &result.rings {
        for segment in &ring.segments {
            println!(
                "{:<6} {:>5}  {:>7.2}° .. {:>7.2}°  anchor ({:.2}, {:.2})",
                ring.kind.to_string(),
                segment.reference_id,
                segment.wedge.start_angle.to_degrees(),
                segment.wedge.end_angle.to_degrees(),
                segment.anchor.x,
                segment.anchor.y,
            );
        }
    }
    Ok(())
}
