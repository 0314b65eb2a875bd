use streamline::svg::SVG;
use streamline::{streamline_plot, Color, StreamlineStyle};

/// Draws three particles leaving the origin, each with a different color bias.
fn main() {
    let mut svg = SVG::new((-120.0, -120.0, 240.0, 240.0));

    for (i, power) in [0.5, 1.0, 3.0].into_iter().enumerate() {
        let direction = i as f64 * 2.0 * std::f64::consts::PI / 3.0;
        let (x, y): (Vec<f64>, Vec<f64>) = (0..60)
            .map(|step| {
                let t = step as f64 / 59.0;
                let angle = direction + t * 2.0;
                (100.0 * t * angle.cos(), 100.0 * t * angle.sin())
            })
            .unzip();

        let style = StreamlineStyle::default()
            .with_colors(Color::from((0.1, 0.1, 0.5)), Color::from((1.0, 0.65, 0.0)))
            .with_color_power(power)
            .with_linewidth(8.0);
        if let Err(err) = streamline_plot(&mut svg, &x, &y, &style) {
            eprintln!("{}", err);
            return;
        }
    }

    println!("{}", svg);
}
