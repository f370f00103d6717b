use clap::Parser;
use std::io;

use graham_hull::convex_hull;

mod prompt;

use prompt::{Prompt, Winding};

/// Reads a set of points from standard input and prints their convex hull.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
  /// List the hull vertices counter-clockwise instead of clockwise.
  #[arg(long)]
  ccw: bool,
}

fn main() -> anyhow::Result<()> {
  env_logger::init();
  let args = Args::parse();

  let stdin = io::stdin();
  let stdout = io::stdout();
  let mut prompt = Prompt::new(stdin.lock(), stdout.lock());
  let points = prompt.read_points()?;
  log::info!("read {} points", points.len());

  let winding = if args.ccw {
    Winding::CounterClockwise
  } else {
    Winding::Clockwise
  };
  prompt.report(&convex_hull(points), winding)?;
  Ok(())
}
