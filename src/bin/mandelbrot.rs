extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate log;
extern crate mandelbrot;
extern crate num_cpus;

use clap::{App, Arg, ArgMatches};
use mandelbrot::escape::MAX_ITERATION;
use mandelbrot::colorize::colorize_with;
use mandelbrot::{encode_png, render, render_threaded, ColorMode, Viewport};
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn parse_list<T: FromStr>(s: &str, separator: char, count: usize) -> Option<Vec<T>> {
    let values: Vec<T> = s
        .split(separator)
        .map(T::from_str)
        .collect::<Result<_, _>>()
        .ok()?;
    if values.len() == count {
        Some(values)
    } else {
        None
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_number<T: FromStr>(s: &str, err: &str) -> Result<(), String> {
    match T::from_str(s) {
        Ok(_) => Ok(()),
        Err(_) => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

/// A pan is an axis name and a distance, like "x,0.25".  The axis
/// itself is checked by the viewport, which ignores names it does not
/// know.
fn validate_pan(s: &str) -> Result<(), String> {
    match s.find(',') {
        Some(index) if f64::from_str(&s[index + 1..]).is_ok() => Ok(()),
        _ => Err("Could not parse pan, expected AXIS,DELTA".to_string()),
    }
}

const OUTPUT: &str = "output";
const WIDTH: &str = "width";
const CENTER: &str = "center";
const ZOOM: &str = "zoom";
const LIMITS: &str = "limits";
const PAN: &str = "pan";
const MODE: &str = "mode";
const THREADS: &str = "threads";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("mandelbrot")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Escape-time Mandelbrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output PNG file"),
        )
        .arg(
            Arg::with_name(WIDTH)
                .required(false)
                .long(WIDTH)
                .short("w")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("1280")
                .validator(|s| validate_number::<i64>(&s, "Could not parse picture width"))
                .help("Picture width in pixels; the height follows from the aspect ratio"),
        )
        .arg(
            Arg::with_name(CENTER)
                .required(false)
                .long(CENTER)
                .short("c")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-0.747162,-0.087584")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse center point"))
                .help("Center of the plot on the complex plane, as RE,IM"),
        )
        .arg(
            Arg::with_name(ZOOM)
                .required(false)
                .long(ZOOM)
                .short("z")
                .takes_value(true)
                .default_value("10000")
                .validator(|s| validate_number::<f64>(&s, "Could not parse zoom factor"))
                .help("Zoom factor about the center; above 1 zooms in"),
        )
        .arg(
            Arg::with_name(LIMITS)
                .required(false)
                .long(LIMITS)
                .short("l")
                .takes_value(true)
                .allow_hyphen_values(true)
                .validator(|s| match parse_list::<f64>(&s, ',', 4) {
                    Some(_) => Ok(()),
                    None => Err("Could not parse limits, expected REMIN,REMAX,IMMIN,IMMAX".to_string()),
                })
                .help("Explicit bounds of the plot, as REMIN,REMAX,IMMIN,IMMAX; overrides center and zoom"),
        )
        .arg(
            Arg::with_name(PAN)
                .required(false)
                .long(PAN)
                .short("p")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .allow_hyphen_values(true)
                .validator(|s| validate_pan(&s))
                .help("Move the plot along an axis (x or y) after placing it, as AXIS,DELTA"),
        )
        .arg(
            Arg::with_name(MODE)
                .required(false)
                .long(MODE)
                .short("m")
                .takes_value(true)
                .default_value("color")
                .validator(|s| ColorMode::from_str(&s).map(|_| ()).map_err(|e| e.to_string()))
                .help("Color mode, color or grayscale"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the renderer"),
        )
        .get_matches()
}

fn build_viewport(matches: &ArgMatches) -> Viewport {
    let width = i64::from_str(matches.value_of(WIDTH).unwrap()).expect("Error parsing picture width");
    let mut viewport = Viewport::new(width);

    match matches.value_of(LIMITS) {
        Some(limits) => {
            let l = parse_list::<f64>(limits, ',', 4).expect("Error parsing limits");
            viewport.set_limits(l[0], l[1], l[2], l[3]);
        }
        None => {
            let center = parse_pair::<f64>(matches.value_of(CENTER).unwrap(), ',')
                .expect("Error parsing center point");
            let zoom =
                f64::from_str(matches.value_of(ZOOM).unwrap()).expect("Error parsing zoom factor");
            viewport.set_center(center.0, center.1);
            viewport.scale(zoom);
        }
    }

    if let Some(pans) = matches.values_of(PAN) {
        for pan in pans {
            let index = pan.find(',').expect("Error parsing pan");
            let delta = f64::from_str(&pan[index + 1..]).expect("Error parsing pan distance");
            viewport.move_axis(&pan[..index], delta);
        }
    }
    viewport
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = args();
    let viewport = build_viewport(&matches);
    let threads =
        usize::from_str(matches.value_of(THREADS).unwrap()).expect("Could not parse thread count.");
    let mode = ColorMode::from_str(matches.value_of(MODE).unwrap()).expect("Error parsing color mode");

    let (re_min, re_max, im_min, im_max) = viewport.limits();
    info!(
        "Rendering {}x{} pixels of re [{}, {}], im [{}, {}]",
        viewport.width(),
        viewport.height(),
        re_min,
        re_max,
        im_min,
        im_max
    );

    let grid = if threads > 1 {
        render_threaded(&viewport, viewport.width(), threads)
    } else {
        render(&viewport, viewport.width())
    };
    let inside = grid.histogram()[MAX_ITERATION as usize];
    info!("{} of {} pixels are in the set", inside, grid.len());

    let output = matches.value_of(OUTPUT).unwrap();
    let image = colorize_with(&grid, mode);
    match encode_png(&image, output) {
        Ok(()) => info!("Saved {}", output),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
