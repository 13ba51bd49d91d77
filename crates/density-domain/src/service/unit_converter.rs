//! Density and mass conversion for rectangular samples

use density_types::VolumeZeroError;

/// Volume in m³ of a length × width × height block
pub fn volume(length: f64, width: f64, height: f64) -> f64 {
    length * width * height
}

/// Density in kg/m³ from mass in kg
pub fn density_from_mass(
    mass: f64,
    length: f64,
    width: f64,
    height: f64,
) -> Result<f64, VolumeZeroError> {
    let volume_m3 = volume(length, width, height);
    if volume_m3 == 0.0 {
        return Err(VolumeZeroError);
    }
    Ok(mass / volume_m3)
}

/// Mass in kg from density in kg/m³. Zero volume gives zero mass.
pub fn mass_from_density(density: f64, length: f64, width: f64, height: f64) -> f64 {
    density * volume(length, width, height)
}
