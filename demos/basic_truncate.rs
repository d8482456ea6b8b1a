use lastrim::{truncate_file, TruncateOutcome, TruncateRequest};
use lastrim_io::read_las;

fn main() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("synthetic.las");

    // Create a synthetic 100 x 50 tile with 1000 points
    let mut builder = las::Builder::from((1, 2));
    builder.point_format = las::point::Format::new(0)?;
    let header = builder.into_header()?;
    let mut writer = las::Writer::from_path(&path, header)?;
    for i in 0..1000 {
        let point = las::Point {
            x: (i as f64 * 7.31) % 100.0,
            y: (i as f64 * 4.19) % 50.0,
            z: (i as f64 * 2.57) % 10.0,
            intensity: i as u16,
            ..Default::default()
        };
        writer.write_point(point)?;
    }
    writer.close()?;
    println!("Original cloud: {} points", read_las(&path)?.len());

    // Keep a 20 x 10 box at the lower-right corner
    match truncate_file(&path, &TruncateRequest::new(20.0, 10.0))? {
        TruncateOutcome::Written {
            kept, rect, backup, ..
        } => {
            println!(
                "Kept {} points in x=[{}, {}], y=[{}, {}]",
                kept, rect.x0, rect.x1, rect.y0, rect.y1
            );
            println!("Original preserved at {}", backup.display());
        }
        TruncateOutcome::NoMatches { .. } => println!("No points in the requested box"),
    }

    Ok(())
}
