use std::f64::consts::PI;

use plotters::prelude::*;

use sinecsv::{SineSamples, Variant};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = "sine.png";
    let root = BitMapBackend::new(path, (1200, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("sin(x)", ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0.0..2.0 * PI, -1.1..1.1)?;
    chart.configure_mesh().x_desc("x").y_desc("sin(x)").draw()?;

    for (i, variant) in Variant::ALL.into_iter().enumerate() {
        let samples = SineSamples::generate(variant);
        let color = Palette99::pick(i);
        chart
            .draw_series(LineSeries::new(samples.iter(), color.stroke_width(2)))?
            .label(format!("{} ({} samples)", variant, samples.len()))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], Palette99::pick(i)));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    root.present()?;

    Ok(())
}
