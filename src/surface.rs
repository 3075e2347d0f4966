use crate::config::F;
use crate::heatmap::Colorbar;
use colorous::INFERNO;
use ndarray::{Array1, Array2};
use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;

/// Одна 3D-поверхность плотности вероятности rho(x1, x2) на своей панели.
/// Цветовая шкала нормируется на максимум панели, как cmap="inferno"
/// у matplotlib. Углы камеры задаются в градусах (elev, azim).
pub fn draw_surface_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    x_arr: &Array1<F>,
    rho: &Array2<F>,
    title: &str,
    elev_deg: F,
    azim_deg: F,
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    assert_eq!(
        rho.dim(),
        (x_arr.len(), x_arr.len()),
        "Density and grid dimensions must match"
    );

    let x0 = x_arr[0];
    let dx = x_arr[1] - x_arr[0];
    let x_end = x_arr[x_arr.len() - 1];

    // вырожденный случай n1 == n2 дает плоский ноль
    let rho_max = rho
        .iter()
        .cloned()
        .fold(F::NEG_INFINITY, F::max)
        .max(1e-12);

    let colorbar = Colorbar {
        min: 0.0,
        max: rho_max,
        gradient: INFERNO,
    };

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 20).into_font())
        .margin(10)
        .build_cartesian_3d(x0..x_end, 0.0..rho_max * 1.05, x0..x_end)?;

    chart.with_projection(|mut pb| {
        pb.pitch = elev_deg.to_radians();
        pb.yaw = azim_deg.to_radians();
        pb.scale = 0.8;
        pb.into_matrix()
    });

    chart
        .configure_axes()
        .light_grid_style(BLACK.mix(0.15))
        .max_light_lines(3)
        .draw()?;

    chart.draw_series(
        SurfaceSeries::xoz(x_arr.iter().cloned(), x_arr.iter().cloned(), |x1, x2| {
            // ближайшие узлы сетки: rho[[i, j]] отвечает точке (x[j], x[i])
            let j = ((x1 - x0) / dx).round() as usize;
            let i = ((x2 - x0) / dx).round() as usize;
            rho[[i, j]]
        })
        .style_func(&|&v| colorbar.color(v).filled()),
    )?;

    // подписи осей
    let (w, h) = area.dim_in_pixel();
    let label_font = ("sans-serif", 15).into_font();
    area.draw(&Text::new(
        "x1",
        (w as i32 - 55, h as i32 - 40),
        label_font.clone(),
    ))?;
    area.draw(&Text::new("x2", (25, h as i32 - 40), label_font.clone()))?;
    area.draw(&Text::new("|psi|^2", (15, 35), label_font))?;

    Ok(())
}
