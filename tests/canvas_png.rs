use polycanvas::{io, BlendMode, Canvas, Paint, Point, Rect, Rgba, Surface};
use std::path::PathBuf;

fn tmp_path(name: &str) -> PathBuf {
    let dir = PathBuf::from("tests/tmp");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn surface_png_roundtrip() {
    let mut surface = Surface::new(64, 48);
    {
        let mut canvas = Canvas::new(&mut surface);
        canvas.fill_all(&Paint::with_mode(Rgba::opaque(0.1, 0.2, 0.3), BlendMode::Src));
        canvas.fill_rect(
            &Rect::new(8.0, 8.0, 40.0, 30.0),
            &Paint::new(Rgba::new(0.9, 0.4, 0.1, 0.8)),
        );
        let tri = [Point::new(30.0, 4.0), Point::new(60.0, 44.0), Point::new(10.0, 40.0)];
        canvas.fill_convex_polygon(
            &tri,
            &Paint::with_mode(Rgba::new(0.2, 0.8, 0.4, 0.5), BlendMode::SrcATop),
        );
    }

    let path = tmp_path("roundtrip.png");
    io::write_file(&surface, &path).unwrap();

    let loaded = io::read_file(&path).unwrap();
    assert_eq!(loaded.width(), surface.width());
    assert_eq!(loaded.height(), surface.height());
    assert_eq!(loaded.pixels(), surface.pixels());

    assert!(io::img_diff(&path, &path).unwrap());
}

#[test]
fn nonexistent_file_is_an_error() {
    assert!(io::read_file("tests/tmp/definitely_missing.png").is_err());
}
