use once_cell::sync::Lazy;

/// (x, y) coordinates of trajectories of increasing length
pub static TRAJECTORIES: Lazy<Vec<(Vec<f64>, Vec<f64>)>> = Lazy::new(|| {
    [2, 10, 100, 1_000, 10_000]
        .into_iter()
        .map(|n: usize| {
            (0..n)
                .map(|i| {
                    let t = i as f64 / (n - 1) as f64;
                    let angle = t * 6.0 * std::f64::consts::PI;
                    let radius = 1.0 + 10.0 * t;
                    (radius * angle.cos(), radius * angle.sin())
                })
                .unzip()
        })
        .collect()
});
