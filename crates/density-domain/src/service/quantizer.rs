//! Snap a measured density onto the fixed grade grid

/// Allowed density grades in kg/m³, strictly ascending
pub const DENSITY_GRADES: [f64; 14] = [
    20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0, 100.0, 105.0, 110.0, 120.0, 125.0, 130.0,
];

/// Nearest grade to `x`.
///
/// Equidistant values resolve to the lower grade: the scan only replaces the
/// current best on a strictly smaller distance. NaN and infinities yield the
/// first grade, since every grade is at the same (NaN or infinite) distance.
pub fn quantize(x: f64) -> f64 {
    // DENSITY_GRADES is non-empty
    quantize_with(x, &DENSITY_GRADES).unwrap_or(DENSITY_GRADES[0])
}

/// Nearest element of an arbitrary ascending grade list, `None` if it is empty
pub fn quantize_with(x: f64, grades: &[f64]) -> Option<f64> {
    let (&first, rest) = grades.split_first()?;
    let mut best = first;
    let mut best_distance = (x - first).abs();
    for &grade in rest {
        let distance = (x - grade).abs();
        if distance < best_distance {
            best = grade;
            best_distance = distance;
        }
    }
    Some(best)
}

/// True if `x` is exactly one of the grades
pub fn is_grade(x: f64) -> bool {
    DENSITY_GRADES.contains(&x)
}
