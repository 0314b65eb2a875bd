use nalgebra::Vector2;
use streamline::{
    streamline_plot, DrawSegments, LineCollection, StreamlineError, StreamlineStyle,
};

fn close(actual: &[f64], expected: &[f64]) -> bool {
    actual.len() == expected.len()
        && actual
            .iter()
            .zip(expected.iter())
            .all(|(a, e)| (a - e).abs() < 1e-9)
}

/// Counts additions instead of storing them
#[derive(Default)]
struct Counter(usize);

impl DrawSegments for Counter {
    fn add_collection(&mut self, _: LineCollection) {
        self.0 += 1;
    }
}

#[test]
fn one_object_per_call() {
    let mut counter = Counter::default();
    let style = StreamlineStyle::default();
    for n in 2..20 {
        let x: Vec<f64> = (0..n).map(|i| i as f64).collect();
        let y: Vec<f64> = x.iter().map(|x| x.sin()).collect();
        streamline_plot(&mut counter, &x, &y, &style).unwrap();
        assert_eq!(counter.0, n - 1);
    }
}

#[test]
fn four_point_scenario() {
    let mut surface: Vec<LineCollection> = Vec::new();
    streamline_plot(
        &mut surface,
        &[0.0, 1.0, 2.0, 3.0],
        &[0.0, 1.0, 0.0, 1.0],
        &StreamlineStyle::default(),
    )
    .unwrap();
    assert_eq!(surface.len(), 1);

    let collection = &surface[0];
    assert_eq!(collection.len(), 3);
    assert_eq!(
        collection.segments()[1],
        [Vector2::new(1.0, 1.0), Vector2::new(2.0, 0.0)]
    );
    assert!(close(collection.widths(), &[5.0, 10.0 / 3.0, 5.0 / 3.0, 0.0]));
    assert!(close(collection.keys(), &[0.0, 1.0 / 9.0, 4.0 / 9.0, 1.0]));
}

#[test]
fn two_points() {
    let mut surface: Vec<LineCollection> = Vec::new();
    let style = StreamlineStyle::default().with_linewidth(3.0);
    streamline_plot(&mut surface, &[0.0, 1.0], &[1.0, 0.0], &style).unwrap();

    let collection = &surface[0];
    assert_eq!(collection.len(), 1);
    assert_eq!(collection.widths(), &[3.0, 0.0]);
    assert_eq!(collection.keys(), &[0.0, 1.0]);
    assert_eq!(collection.segment_widths(), vec![3.0]);
}

#[test]
fn keys_and_widths_are_monotonic() {
    let x: Vec<f64> = (0..50).map(|i| i as f64 * 0.3).collect();
    let y: Vec<f64> = x.iter().map(|x| x.cos()).collect();
    for power in [0.25, 0.5, 1.0, 2.0, 4.0, 8.0] {
        let mut surface: Vec<LineCollection> = Vec::new();
        let style = StreamlineStyle::default()
            .with_color_power(power)
            .with_linewidth(7.5);
        streamline_plot(&mut surface, &x, &y, &style).unwrap();

        let keys = surface[0].keys();
        assert_eq!(keys.len(), 50);
        assert_eq!(keys[0], 0.0);
        assert_eq!(keys[49], 1.0);
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));

        let widths = surface[0].widths();
        assert_eq!(widths.len(), 50);
        assert_eq!(widths[0], 7.5);
        assert_eq!(widths[49], 0.0);
        assert!(widths.windows(2).all(|w| w[0] >= w[1]));
    }
}

#[test]
fn color_power_biases_gradient() {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0; 5];
    let middle_gray = |power: f64| {
        let mut surface: Vec<LineCollection> = Vec::new();
        let style = StreamlineStyle::default().with_color_power(power);
        streamline_plot(&mut surface, &x, &y, &style).unwrap();
        surface[0].segment_colors()[2].r
    };
    // Higher powers stay close to black (color1) for longer
    assert!(middle_gray(3.0) < middle_gray(1.0));
    assert!(middle_gray(1.0) < middle_gray(0.3));
}

#[test]
fn repeated_calls_are_identical() {
    let x = [0.0, 0.5, 2.0, 2.5, 4.0];
    let y = [1.0, 3.0, 2.0, 0.0, 1.0];
    let style = StreamlineStyle::from_specs("navy", "#ffa500", 1.5, 4.0).unwrap();

    let mut first: Vec<LineCollection> = Vec::new();
    let mut second: Vec<LineCollection> = Vec::new();
    streamline_plot(&mut first, &x, &y, &style).unwrap();
    streamline_plot(&mut second, &x, &y, &style).unwrap();
    assert_eq!(first, second);
    assert_eq!(first[0].segments(), second[0].segments());
}

#[test]
fn errors_leave_surface_untouched() {
    let mut surface: Vec<LineCollection> = Vec::new();
    let style = StreamlineStyle::default();

    assert_eq!(
        streamline_plot(&mut surface, &[0.0, 1.0, 2.0], &[0.0, 1.0], &style),
        Err(StreamlineError::LengthMismatch { x: 3, y: 2 })
    );
    assert_eq!(
        streamline_plot(&mut surface, &[1.0], &[1.0], &style),
        Err(StreamlineError::TooFewPoints(1))
    );
    assert_eq!(
        streamline_plot(&mut surface, &[], &[], &style),
        Err(StreamlineError::TooFewPoints(0))
    );
    assert!(surface.is_empty());
}

#[test]
fn out_of_range_colors_are_rejected() {
    let mut surface: Vec<LineCollection> = Vec::new();
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0, 0.0];

    let style = StreamlineStyle::default().with_colors((2.0, -1.0, 0.0), (0.0, 0.0, 1.0));
    assert!(matches!(
        streamline_plot(&mut surface, &x, &y, &style),
        Err(StreamlineError::InvalidColor(_))
    ));

    let style = StreamlineStyle::default().with_colors((0.0, 0.0, 0.0), (0.0, 0.0, f64::NAN));
    assert!(matches!(
        streamline_plot(&mut surface, &x, &y, &style),
        Err(StreamlineError::InvalidColor(_))
    ));
    assert!(surface.is_empty());

    let style = StreamlineStyle::default().with_colors((0.2, 0.4, 0.6, 0.5), (1.0, 1.0, 1.0));
    assert!(streamline_plot(&mut surface, &x, &y, &style).is_ok());
    assert_eq!(surface.len(), 1);
}

#[cfg(feature = "draw-svg")]
#[test]
fn svg_surface() {
    use streamline::svg::SVG;

    let mut svg = SVG::new((0.0, 0.0, 10.0, 10.0));
    let style = StreamlineStyle::from_specs("k", "w", 2.0, 5.0).unwrap();
    streamline_plot(&mut svg, &[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 0.0, 1.0], &style).unwrap();
    assert_eq!(svg.elements.len(), 1);

    let text = svg.to_string();
    assert_eq!(text.matches("<line").count(), 3);
    assert!(text.contains("stroke=\"#000000\" stroke-width=\"5\""));
}
