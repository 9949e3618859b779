use super::VERSION;
use clap::{App, Arg};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    /// save the chart here instead of opening it
    pub svgout: Option<PathBuf>,
}

fn app<'a, 'b>() -> App<'a, 'b> {
    let arg_file = Arg::with_name("file")
        .help("the input file name, one x;y1;y2;y3 row per line")
        .index(1)
        .required(true);
    let arg_svgout = Arg::with_name("output_svgfile")
        .help("write the chart to this svg file instead of opening it")
        .short("o")
        .long("svgfile")
        .takes_value(true);
    App::new("triplot")
        .version(VERSION.unwrap_or("unknown"))
        .author("Luca Peruzzo")
        .about("Plot data from a file: three series against a shared x column")
        .arg(arg_file)
        .arg(arg_svgout)
}

/// Takes the CLI arguments from the process; exits on usage errors, help and version.
pub fn parse_cli() -> Config {
    match parse_cli_from(std::env::args_os()) {
        Ok(config) => config,
        Err(e) => e.exit(),
    }
}

pub fn parse_cli_from<I, T>(args: I) -> Result<Config, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli_args = app().get_matches_from_safe(args)?;
    let input = cli_args
        .value_of_os("file")
        .map(PathBuf::from)
        .ok_or_else(|| clap::Error::argument_not_found_auto("file"))?;
    let svgout = cli_args.value_of_os("output_svgfile").map(PathBuf::from);
    Ok(Config { input, svgout })
}
