use crate::config::F;
use crate::macros::check_path;
use crate::space::Xspace1D;
use crate::surface::draw_surface_panel;
use ndarray::Array2;
use plotters::prelude::*;
use printpdf::image_crate::{DynamicImage, RgbImage};
use printpdf::{Image, ImageTransform, Mm, PdfDocument};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;

// размеры растровой страницы коллажа и разрешение pdf
const WIDTH: u32 = 1800;
const HEIGHT: u32 = 1200;
const DPI: F = 150.0;

/// Рисует коллаж rows x cols из 3D-поверхностей плотностей вероятности
/// и сохраняет его одной страницей pdf.
///
/// Все панели используют общую координатную сетку x; каждая панель
/// подписана своей парой (n1, n2).
pub fn plot_collage_pdf(
    x: &Xspace1D,
    panels: &[((usize, usize), Array2<F>)],
    rows: usize,
    cols: usize,
    elev_deg: F,
    azim_deg: F,
    path: &str,
) -> Result<(), Box<dyn Error>> {
    assert!(panels.len() <= rows * cols, "Collage layout is too small");

    let mut buf = vec![0u8; (WIDTH * HEIGHT * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buf, (WIDTH, HEIGHT)).into_drawing_area();
        root.fill(&WHITE)?;

        let titled = root.titled(
            "Probability density |psi(x1, x2)|^2 for different (n1, n2)",
            ("sans-serif", 30).into_font(),
        )?;

        let areas = titled.split_evenly((rows, cols));
        for (area, ((n1, n2), rho)) in areas.iter().zip(panels.iter()) {
            let title = format!("(n1, n2) = ({}, {})", n1, n2);
            draw_surface_panel(area, &x.grid, rho, &title, elev_deg, azim_deg)?;
        }
        root.present()?;
    }

    check_path!(path);
    let page_w = Mm((WIDTH as F * 25.4 / DPI) as f32);
    let page_h = Mm((HEIGHT as F * 25.4 / DPI) as f32);
    let (doc, page, layer) = PdfDocument::new("fermions_3D_collage", page_w, page_h, "collage");

    let raster = RgbImage::from_raw(WIDTH, HEIGHT, buf).expect("raster buffer has wrong size");
    let image = Image::from_dynamic_image(&DynamicImage::ImageRgb8(raster));
    image.add_to_layer(
        doc.get_page(page).get_layer(layer),
        ImageTransform {
            dpi: Some(DPI as f32),
            ..Default::default()
        },
    );

    let mut writer = BufWriter::new(File::create(path)?);
    doc.save(&mut writer)?;
    Ok(())
}
