// тип данных: f64 или f32
pub type F = f64;

// константы
pub const PI: F = std::f64::consts::PI;
pub const SQRT_2: F = std::f64::consts::SQRT_2;
