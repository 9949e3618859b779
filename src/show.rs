use super::chart::Figure;
use super::{Error, Result};
use log::{info, warn};
use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Displays a finished figure; a run calls `show` once.
pub trait Viewer {
    fn show(&mut self, figure: &Figure) -> Result<()>;
}

/// Writes the figure to a kept temporary html page and hands it to the system opener.
/// `BROWSER`, when set, replaces the opener.
#[derive(Debug, Default)]
pub struct BrowserViewer {
    pub page: Option<PathBuf>,
}

impl Viewer for BrowserViewer {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let svg = figure.to_svg()?;
        let mut tmp = tempfile::Builder::new()
            .prefix("triplot-")
            .suffix(".html")
            .tempfile()
            .map_err(|e| Error::io(std::env::temp_dir(), e))?;
        tmp.write_all(html_page(&figure.title, &svg).as_bytes())
            .map_err(|e| Error::io(tmp.path(), e))?;
        // the browser reads the page after we exit
        let (_, page) = tmp.keep().map_err(|e| Error::io(e.file.path(), e.error))?;
        info!("opening {}", page.display());
        let (program, args) = opener();
        open_or_discard(&program, &args, &page)?;
        self.page = Some(page);
        Ok(())
    }
}

/// Saves the svg instead of opening it.
#[derive(Debug)]
pub struct SvgFileViewer {
    pub path: PathBuf,
}

impl Viewer for SvgFileViewer {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        let svg = figure.to_svg()?;
        std::fs::write(&self.path, svg).map_err(|e| Error::io(&self.path, e))?;
        info!("chart saved to {}", self.path.display());
        Ok(())
    }
}

pub fn html_page(title: &str, svg: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}\n</body>\n</html>\n",
        escape(title),
        svg
    )
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Program and leading arguments for the opener; the page path is appended.
fn opener() -> (OsString, Vec<OsString>) {
    if let Some(browser) = std::env::var_os("BROWSER").filter(|b| !b.is_empty()) {
        return (browser, Vec::new());
    }
    if cfg!(target_os = "macos") {
        ("open".into(), Vec::new())
    } else if cfg!(target_os = "windows") {
        ("cmd".into(), vec!["/C".into(), "start".into(), "".into()])
    } else {
        ("xdg-open".into(), Vec::new())
    }
}

/// Runs the opener on `page`; the page is removed if nothing could open it.
fn open_or_discard(program: &OsStr, args: &[OsString], page: &Path) -> Result<()> {
    let opened = open(program, args, page);
    if opened.is_err() {
        if let Err(e) = std::fs::remove_file(page) {
            warn!("could not remove {}: {}", page.display(), e);
        }
    }
    opened
}

fn open(program: &OsStr, args: &[OsString], page: &Path) -> Result<()> {
    let status = Command::new(program)
        .args(args)
        .arg(page)
        .status()
        .map_err(|e| Error::Render(format!("could not run {:?}: {}", program, e)))?;
    if !status.success() {
        return Err(Error::Render(format!(
            "{:?} exited with {} while opening {}",
            program,
            status,
            page.display()
        )));
    }
    Ok(())
}
