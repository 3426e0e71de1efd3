//! numeric helpers backing the finite-difference validation of symbolic
//! derivatives

/// Creates a uniform grid of `num_values` points from `start` to `end`.
pub fn linspace(start: f64, end: f64, num_values: usize) -> Vec<f64> {
    let mut values = Vec::with_capacity(num_values);
    let step = (end - start) / (num_values as f64 - 1.0);
    for i in 0..num_values {
        values.push(start + (i as f64) * step);
    }
    values
}

/// Central finite difference of `f` at every point of `x_values` with step `h`.
pub fn numerical_derivative<F>(f: F, x_values: Vec<f64>, h: f64) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    let mut derivatives = Vec::with_capacity(x_values.len());
    for &x in &x_values {
        let f_x_plus_h = f(x + h);
        let f_x_minus_h = f(x - h);
        derivatives.push((f_x_plus_h - f_x_minus_h) / (2.0 * h));
    }
    derivatives
}

/// Length-scaled euclidean distance between two equally sized samples.
pub fn norm(x: Vec<f64>, y: Vec<f64>) -> f64 {
    assert_eq!(x.len(), y.len(), "norm expects samples of equal length");
    (1.0 / x.len() as f64)
        * x.iter()
            .zip(y.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
}
