// SPDX-License-Identifier: MPL-2.0
use iced_svg_icon::config::{self, Config};
use iced_svg_icon::module::{Module, ModuleDescriptor, ModuleRegistry, WIDGET_MODULE};
use iced_svg_icon::render::Canvas;
use iced_svg_icon::resource::{DirectoryResources, ResourceTable};
use iced_svg_icon::widget::{Icon, PaintOutcome};
use std::path::PathBuf;

const HELP: &str = "\
iced_svg_icon renders an embedded SVG icon the way the icon widget does.

USAGE:
  iced_svg_icon [OPTIONS] <RESOURCE-ID>

OPTIONS:
  -h, --help              Prints help information
  -c, --config FILE       Reads settings from FILE instead of the user config
  -m, --module DESCRIPTOR Module owning the resources, e.g. 'MyApp, Version=1.0'
  -a, --assets DIR        Directory exposed as the module's embedded resources
  -s, --size WxH          Canvas size in pixels
  -o, --output FILE       PNG file to write [default: icon.png]
  -l, --list              Lists the resource names of the module and exits
  -v, --verbose           Logs every paint step

ARGS:
  <RESOURCE-ID>           Resource path relative to the module, e.g. icons/star.svg
";

struct Args {
    config: Option<PathBuf>,
    module: Option<String>,
    assets: Option<PathBuf>,
    size: Option<(u32, u32)>,
    output: PathBuf,
    list: bool,
    verbose: bool,
    resource_id: Option<String>,
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}.", e);
            std::process::exit(1);
        }
    };

    if let Ok(()) = log::set_logger(&LOGGER) {
        let level = if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        };
        log::set_max_level(level);
    }

    if let Err(e) = run(args) {
        eprintln!("Error: {}.", e);
        std::process::exit(1);
    }
}

fn parse_args() -> Result<Args, String> {
    let mut input = pico_args::Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        std::process::exit(0);
    }

    let args = Args {
        config: input
            .opt_value_from_str(["-c", "--config"])
            .map_err(|e| e.to_string())?,
        module: input
            .opt_value_from_str(["-m", "--module"])
            .map_err(|e| e.to_string())?,
        assets: input
            .opt_value_from_str(["-a", "--assets"])
            .map_err(|e| e.to_string())?,
        size: input
            .opt_value_from_fn(["-s", "--size"], parse_size)
            .map_err(|e| e.to_string())?,
        output: input
            .opt_value_from_str(["-o", "--output"])
            .map_err(|e| e.to_string())?
            .unwrap_or_else(|| PathBuf::from("icon.png")),
        list: input.contains(["-l", "--list"]),
        verbose: input.contains(["-v", "--verbose"]),
        resource_id: input.opt_free_from_str().map_err(|e| e.to_string())?,
    };

    let remaining = input.finish();
    if !remaining.is_empty() {
        return Err(format!("unexpected arguments: {:?}", remaining));
    }

    Ok(args)
}

fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (width, height) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("'{}' is not in WxH form", s))?;
    let width = width.parse().map_err(|_| format!("invalid width '{}'", width))?;
    let height = height
        .parse()
        .map_err(|_| format!("invalid height '{}'", height))?;
    Ok((width, height))
}

fn run(args: Args) -> Result<(), String> {
    let config = match &args.config {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    }
    .map_err(|e| e.to_string())?;

    let assets = args
        .assets
        .clone()
        .or_else(|| config.assets_dir.clone())
        .ok_or("no assets directory given (use --assets or 'assets_dir')")?;

    let registry = build_registry(&args, &config, &assets)?;
    let host = registry.entry().clone();

    if args.list {
        for name in host.resources().names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let resource_id = args
        .resource_id
        .ok_or("no resource id given (see --help)")?;

    let (width, height) = match args.size {
        Some(size) => size,
        None => config.canvas_size(),
    };

    let chain = [Module::without_resources(WIDGET_MODULE), host];
    let mut icon = Icon::with_surface(&registry, &chain, Canvas::new(width, height));
    icon.set_resource_id(resource_id);

    match icon.paint().map_err(|e| e.to_string())? {
        PaintOutcome::Drawn(fit) => log::debug!("Drawn at scale {}", fit.scale),
        PaintOutcome::Skipped => log::warn!("Icon has no drawable area."),
        PaintOutcome::Cleared => {}
    }

    let pixmap = icon
        .surface()
        .pixmap()
        .ok_or("canvas has no area")?;
    pixmap
        .save_png(&args.output)
        .map_err(|e| format!("failed to write '{}': {}", args.output.display(), e))?;

    Ok(())
}

/// The module owning the assets becomes the entry module; with `--module`
/// (or `host_module`) it is named explicitly, otherwise `entry_module` is
/// used.
fn build_registry(
    args: &Args,
    config: &Config,
    assets: &std::path::Path,
) -> Result<ModuleRegistry, String> {
    let descriptor = args
        .module
        .clone()
        .or_else(|| config.host_module.clone())
        .unwrap_or_else(|| config.entry_module.clone());

    let name = ModuleDescriptor::parse(&descriptor).name;
    let table = DirectoryResources::scan(assets, &name).map_err(|e| e.to_string())?;

    Ok(ModuleRegistry::new(Module::new(descriptor, table)).with_locator(config.locator()))
}

static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error ({}): {}", target, args),
                log::Level::Warn => eprintln!("Warning ({}): {}", target, args),
                log::Level::Info => eprintln!("Info ({}): {}", target, args),
                log::Level::Debug => eprintln!("Debug ({}): {}", target, args),
                log::Level::Trace => eprintln!("Trace ({}): {}", target, args),
            }
        }
    }

    fn flush(&self) {}
}
