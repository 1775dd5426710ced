#[macro_use]
extern crate clap;
extern crate sdl2;

mod config;
mod frame;
mod hilbert;
mod map;
mod remap;
mod samples;
mod view;

use std::process;
use std::time::Instant;

use anyhow::Context;
use clap::ArgMatches;
use log::{debug, info, log_enabled, Level};

use config::{Config, ConfigError};
use map::CurveMap;
use view::plot::Plot;
use view::sdl::SdlSurface;
use view::Info;

const TITLE: &str = "soundplot";

fn usage(matches: &ArgMatches, err: &ConfigError) -> ! {
    eprintln!("error: {}", err);
    eprintln!("{}", matches.usage());
    eprintln!("Note: DIMENSION squared samples are read from the file. If the dimension is too big for the file, the program won't run.");
    process::exit(1);
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let parser_yaml = load_yaml!("args.yml");
    let parser = clap::App::from_yaml(parser_yaml);
    let matches = parser.get_matches();

    let config = match Config::from_matches(&matches) {
        Ok(config) => config,
        Err(e) if e.is_usage() => usage(&matches, &e),
        Err(e) => return Err(e).context("checking arguments"),
    };
    info!(
        "Plotting {} on a {} grid (order {})",
        config.path.display(), config.dimension, config.dimension.order()
    );

    let samples = samples::load(&config.path, config.dimension.cells(), config.skip)
        .context("loading samples")?;

    let started = Instant::now();
    let map = CurveMap::new(config.dimension);
    debug!("Mapped {} cells of {} in {:?}", map.len(), map.dimension(), started.elapsed());

    let info = Info::new(&samples, &map)?;

    let side = config.dimension.side();
    let surface = SdlSurface::open(TITLE, side, side, config.scale).context("opening window")?;
    let mut plot = Plot { view: surface };

    let frames = frame::run(&mut plot, &info, config.frame_period())?;
    info!("Window closed after {} frames", frames);

    if log_enabled!(Level::Debug) {
        hprof::profiler().print_timing();
    }
    Ok(())
}
