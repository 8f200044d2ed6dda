use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::signal_generator::SineSamples;

pub const HEADER: &str = "t,sine_value";

// `{:?}` keeps the decimal point on whole angles (`0.0`, `1.0`).
pub fn format_row(x: f64, y: f64) -> String {
    format!("{:?},{:.4}", x, y)
}

pub fn write_csv<W: Write>(writer: W, samples: &SineSamples) -> io::Result<usize> {
    let mut w = BufWriter::new(writer);
    writeln!(w, "{}", HEADER)?;
    let mut rows = 0;
    for (x, y) in samples.iter() {
        writeln!(w, "{}", format_row(x, y))?;
        rows += 1;
    }
    w.flush()?;
    Ok(rows)
}

pub fn write_csv_file<P: AsRef<Path>>(path: P, samples: &SineSamples) -> io::Result<usize> {
    let file = File::create(path)?;
    write_csv(file, samples)
}
