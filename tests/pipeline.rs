use std::io::Write;
use tempfile::NamedTempFile;
use triplot::chart::Figure;
use triplot::show::{SvgFileViewer, Viewer};
use triplot::{plot_file, Error, Result, Series};

#[derive(Default)]
struct Recorder {
    shown: Vec<Figure>,
}

impl Viewer for Recorder {
    fn show(&mut self, figure: &Figure) -> Result<()> {
        self.shown.push(figure.clone());
        Ok(())
    }
}

fn data_file(content: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(content.as_bytes()).unwrap();
    f.flush().unwrap();
    f
}

#[test]
fn three_rows_are_plotted_once() {
    let f = data_file("0;1;2;3\n1;2;4;6\n2;3;6;9\n");
    let mut rec = Recorder::default();
    plot_file(f.path(), &mut rec).unwrap();
    assert_eq!(rec.shown.len(), 1);
    let fig = &rec.shown[0];
    assert_eq!(fig.title, "My Plot");
    assert_eq!(fig.x_title, "X");
    assert_eq!(fig.y_title, "Y");
    let names: Vec<&str> = fig.traces.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["y1", "y2", "y3"]);
    assert_eq!(fig.traces[0].x, vec![0., 1., 2.]);
    assert_eq!(fig.traces[0].y, vec![1., 2., 3.]);
    assert_eq!(fig.traces[1].y, vec![2., 4., 6.]);
    assert_eq!(fig.traces[2].y, vec![3., 6., 9.]);
}

#[test]
fn crlf_file_and_extra_fields() {
    let f = data_file("0;1;2;3;99\r\n1;2;4;6\r\n");
    let s = Series::from_file(f.path()).unwrap();
    assert_eq!(s.len(), 2);
    assert_eq!(s.y3, vec![3., 6.]);
}

#[test]
fn header_line_is_not_skipped() {
    let f = data_file("x;y1;y2;y3\n0;1;2;3\n");
    let mut rec = Recorder::default();
    let err = plot_file(f.path(), &mut rec).unwrap_err();
    assert!(matches!(err, Error::ParseFloat { line_no: 1, field: 1, .. }));
    assert!(rec.shown.is_empty());
}

#[test]
fn short_line_shows_nothing() {
    let f = data_file("0;1;2;3\n1;2\n");
    let mut rec = Recorder::default();
    let err = plot_file(f.path(), &mut rec).unwrap_err();
    assert!(matches!(err, Error::FieldCount { line_no: 2, found: 2, .. }));
    assert!(rec.shown.is_empty());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.txt");
    let mut rec = Recorder::default();
    let err = plot_file(&missing, &mut rec).unwrap_err();
    match err {
        Error::Io { path, .. } => assert_eq!(path, missing),
        e => panic!("unexpected error {:?}", e),
    }
    assert!(rec.shown.is_empty());
}

#[test]
fn empty_file_still_shows_an_empty_chart() {
    let f = data_file("");
    let mut rec = Recorder::default();
    plot_file(f.path(), &mut rec).unwrap();
    assert_eq!(rec.shown.len(), 1);
    assert!(rec.shown[0].traces.iter().all(|t| t.x.is_empty()));
}

#[test]
fn svg_viewer_writes_the_chart_file() {
    let f = data_file("0;1;2;3\n1;2;4;6\n2;3;6;9\n");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("plot.svg");
    let mut viewer = SvgFileViewer { path: out.clone() };
    plot_file(f.path(), &mut viewer).unwrap();
    let svg = std::fs::read_to_string(&out).unwrap();
    for text in ["My Plot", "y1", "y2", "y3"].iter() {
        assert!(svg.contains(text), "missing {} in svg", text);
    }
}

#[test]
fn svg_viewer_writes_nothing_on_bad_data() {
    let f = data_file("0;1;2;3\n1;2\n");
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("plot.svg");
    let mut viewer = SvgFileViewer { path: out.clone() };
    assert!(plot_file(f.path(), &mut viewer).is_err());
    assert!(!out.exists());
}
