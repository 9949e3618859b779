use anyhow::{Context, Result};
use log::info;
use triplot::cli::parse_cli;
use triplot::plot_file;
use triplot::show::{BrowserViewer, SvgFileViewer, Viewer};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = parse_cli();
    info!("read data from {}", config.input.display());
    let mut viewer: Box<dyn Viewer> = match &config.svgout {
        Some(path) => Box::new(SvgFileViewer { path: path.clone() }),
        None => Box::new(BrowserViewer::default()),
    };
    plot_file(&config.input, viewer.as_mut())
        .with_context(|| format!("could not plot {}", config.input.display()))?;
    Ok(())
}
