use crate::config::F;
use colorous::{Gradient, INFERNO};
use ndarray::{prelude::*, Zip};
use plotters::{coord::types::RangedCoordf64, prelude::*};
use std::error::Error;

fn filled_style<C: Into<RGBAColor>>(color: C) -> ShapeStyle {
    ShapeStyle {
        color: color.into(),
        filled: true,
        stroke_width: 0,
    }
}

pub(crate) struct Colorbar {
    pub(crate) min: F,
    pub(crate) max: F,
    pub(crate) gradient: Gradient,
}

impl Colorbar {
    pub(crate) fn color(&self, value: F) -> RGBColor {
        let &Self {
            min,
            max,
            gradient: colormap,
        } = self;
        let value = value.max(min).min(max);
        // вырожденный диапазон (плоская нулевая поверхность при n1 == n2)
        let range = (max - min).max(F::EPSILON);
        let (r, g, b) = colormap.eval_continuous((value - min) / range).as_tuple();
        RGBColor(r, g, b)
    }

    fn draw<DB: DrawingBackend>(&self, text_color: RGBColor, mut chart_builder: ChartBuilder<DB>) {
        let &Self { min, max, .. } = self;
        let step = (max - min) / 256.0;
        let mut chart_context = chart_builder
            .margin_top(10)
            .x_label_area_size(30)
            .y_label_area_size(0)
            .right_y_label_area_size(45)
            .build_cartesian_2d(0.0..1.0, min..max)
            .unwrap()
            .set_secondary_coord(0.0..1.0, min..max);

        chart_context
            .configure_mesh()
            .set_all_tick_mark_size(0)
            .disable_x_axis()
            .disable_y_axis()
            .disable_x_mesh()
            .disable_y_mesh()
            .axis_style(&text_color)
            .label_style("sans-serif".into_font().color(&text_color))
            .draw()
            .unwrap();

        chart_context
            .configure_secondary_axes()
            .axis_style(&text_color)
            .label_style("sans-serif".into_font().color(&text_color))
            .draw()
            .unwrap();

        let plotting_area = chart_context.plotting_area();
        let values = Array1::range(min, max + step, step);
        for value in values {
            let color = self.color(value);
            let rectangle = Rectangle::new(
                [(0.0, (value - step / 2.0)), (1.0, (value + step / 2.0))],
                filled_style(color),
            );
            plotting_area.draw(&rectangle).unwrap();
        }
    }
}

fn heatmap<'b, 'c, DB: DrawingBackend>(
    function: &Array2<F>,
    x_arr: &Array1<F>,
    y_arr: &Array1<F>,
    colorbar: &Colorbar,
    text_color: RGBAColor,
    mut chart_builder: ChartBuilder<'b, 'c, DB>,
) -> Result<ChartContext<'b, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>, Box<dyn Error>> {
    let mut chart_context = chart_builder
        .margin_top(10)
        .x_label_area_size(25)
        .right_y_label_area_size(0)
        .y_label_area_size(25)
        .build_cartesian_2d(
            x_arr[0]..x_arr[x_arr.len() - 1],
            y_arr[0]..y_arr[y_arr.len() - 1],
        )
        .unwrap();

    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .set_all_tick_mark_size(5)
        .axis_style(&text_color)
        .label_style("sans-serif".into_font().color(&text_color))
        .draw()
        .unwrap();

    let plotting_area = chart_context.plotting_area();
    let step = x_arr[1] - x_arr[0];

    // function[[i, j]] отвечает точке (x_arr[j], y_arr[i]), как в meshgrid
    Zip::indexed(function).for_each(|(i, j), &f| {
        let (x, y) = (x_arr[j], y_arr[i]);
        let rectangle = Rectangle::new(
            [
                (x - step / 2.0, y - step / 2.0),
                (x + step / 2.0, y + step / 2.0),
            ],
            filled_style(colorbar.color(f)),
        );
        plotting_area.draw(&rectangle).unwrap();
    });

    Ok(chart_context)
}

pub fn plot_heatmap(
    x_arr: &Array1<F>,
    y_arr: &Array1<F>,
    func: &Array2<F>,
    size_x: u32,
    size_y: u32,
    size_colorbar: u32,
    colorbar_min: F,
    colorbar_max: F,
    save_path: &str,
) {
    let drawing_area =
        BitMapBackend::new(save_path, (size_x + size_colorbar, size_y)).into_drawing_area();
    drawing_area.fill(&WHITE).unwrap();

    let (left, right) = drawing_area.split_horizontally(size_x);
    let colorbar = Colorbar {
        min: colorbar_min,
        max: colorbar_max,
        gradient: INFERNO,
    };
    colorbar.draw(BLACK, ChartBuilder::on(&right));

    let mut chart_builder = ChartBuilder::on(&left);
    chart_builder.margin(10);

    heatmap(func, x_arr, y_arr, &colorbar, BLACK.into(), chart_builder)
        .expect("failure while drawing heatmap");

    drawing_area.present().expect("failure while writing file");
}
