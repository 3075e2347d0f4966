/// # Два фермиона в бесконечной прямоугольной яме
///
/// Антисимметричная пространственная волновая функция двух невзаимодействующих
/// фермионов:
///
/// \\[ \psi(x_1, x_2) = \frac{1}{\sqrt{2}}\left[ \sin\frac{n_1 \pi x_1}{L}\sin\frac{n_2 \pi x_2}{L} - \sin\frac{n_2 \pi x_1}{L}\sin\frac{n_1 \pi x_2}{L} \right] \\]
///
/// Плотность вероятности \\( |\psi|^2 \\) вычисляется на сетке и рисуется
/// коллажем 3D-поверхностей в pdf.
pub mod collage;
pub mod config;
pub mod heatmap;
pub mod macros;
pub mod space;
pub mod surface;
pub mod wave_function;

#[cfg(test)]
mod tests;
