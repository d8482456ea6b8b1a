//! LAS fixtures shared by the integration tests.

#![allow(dead_code)]

use std::path::Path;

use las::point::{Classification, Format};
use las::{Builder, Color, Point, Transform, Vector, Writer};

/// LAS 1.2, point format 3 (GPS time + RGB), centimetre resolution.
pub fn fixture_header() -> las::Header {
    let mut builder = Builder::from((1, 2));
    builder.point_format = Format::new(3).unwrap();
    builder.transforms = Vector {
        x: Transform {
            scale: 0.01,
            offset: 0.0,
        },
        y: Transform {
            scale: 0.01,
            offset: 0.0,
        },
        z: Transform {
            scale: 0.01,
            offset: 0.0,
        },
    };
    builder.into_header().unwrap()
}

/// A point whose non-coordinate attributes all derive from `i`, so each
/// point in a fixture is distinguishable after filtering.
pub fn fixture_point(i: usize, x: f64, y: f64) -> Point {
    let i16 = (i % 65_536) as u16;
    Point {
        x,
        y,
        z: (i % 100) as f64 * 0.25,
        intensity: i16.wrapping_mul(7),
        return_number: 1,
        number_of_returns: 1,
        classification: if i % 2 == 0 {
            Classification::Ground
        } else {
            Classification::HighVegetation
        },
        user_data: (i % 256) as u8,
        point_source_id: 42,
        gps_time: Some(1000.0 + i as f64 * 0.5),
        color: Some(Color {
            red: i16,
            green: i16.wrapping_add(1),
            blue: i16.wrapping_add(2),
        }),
        ..Default::default()
    }
}

pub fn write_fixture(path: &Path, coords: &[(f64, f64)]) {
    let mut writer = Writer::from_path(path, fixture_header()).unwrap();
    for (i, &(x, y)) in coords.iter().enumerate() {
        writer.write_point(fixture_point(i, x, y)).unwrap();
    }
    writer.close().unwrap();
}

/// Regular grid over `[0, x_max] x [0, y_max]` with spacing `step`.
pub fn grid(x_max: f64, y_max: f64, step: f64) -> Vec<(f64, f64)> {
    let nx = (x_max / step).round() as usize;
    let ny = (y_max / step).round() as usize;
    let mut coords = Vec::with_capacity((nx + 1) * (ny + 1));
    for j in 0..=ny {
        for i in 0..=nx {
            coords.push((i as f64 * step, j as f64 * step));
        }
    }
    coords
}
