use crate::config::{F, PI, SQRT_2};
use crate::heatmap;
use crate::macros::check_path;
use crate::space::Xspace1D;
use ndarray::prelude::*;
use ndarray::{Array2, Zip};
use ndarray_npy::{WriteNpyError, WriteNpyExt};
use rayon::prelude::*;
use std::fs::File;
use std::io::BufWriter;

/// Антисимметричная пространственная волновая функция в точке (x1, x2):
/// psi меняет знак при перестановке частиц, psi == 0 при n1 == n2
/// и на границах ямы x = 0, x = l.
pub fn psi_spatial(x1: F, x2: F, n1: usize, n2: usize, l: F) -> F {
    let term1 = (n1 as F * PI * x1 / l).sin() * (n2 as F * PI * x2 / l).sin();
    let term2 = (n2 as F * PI * x1 / l).sin() * (n1 as F * PI * x2 / l).sin();
    (term1 - term2) / SQRT_2
}

/// Структура для вычисления антисимметризованной двухэлектронной волновой функции
/// двух невзаимодействующих фермионов в бесконечной прямоугольной яме
/// и ее плотности вероятности.
pub struct AntisymWF2e1d {
    pub n1: usize,
    pub n2: usize,
    pub psi: Array2<F>,
    pub x: Xspace1D, // сетки обеих частиц обязаны быть одинаковыми
}

impl AntisymWF2e1d {
    pub fn new(x: Xspace1D, n1: usize, n2: usize) -> Self {
        assert!(n1 >= 1 && n2 >= 1, "Quantum numbers must be positive");
        let psi: Array2<F> = Array::zeros((x.n, x.n));
        Self { n1, n2, psi, x }
    }

    /// Заполняет psi по координатным сеткам (x1, x2)
    pub fn compute_psi(&mut self) {
        let (x1_grid, x2_grid) = self.x.meshgrid();
        let l = self.x.length();
        let (n1, n2) = (self.n1, self.n2);

        Zip::from(&mut self.psi)
            .and(&x1_grid)
            .and(&x2_grid)
            .par_for_each(|psi_elem, &x1, &x2| {
                *psi_elem = psi_spatial(x1, x2, n1, n2, l);
            });
    }

    /// Плотность вероятности |psi|^2 (psi вещественная)
    pub fn density(&self) -> Array2<F> {
        let mut rho: Array2<F> = Array::zeros(self.psi.raw_dim());

        self.psi
            .axis_iter(Axis(0))
            .zip(rho.axis_iter_mut(Axis(0)))
            .par_bridge()
            .for_each(|(psi_row, mut rho_row)| {
                psi_row
                    .iter()
                    .zip(rho_row.iter_mut())
                    .for_each(|(psi_elem, rho_elem)| {
                        *rho_elem = psi_elem.powi(2);
                    })
            });
        rho
    }

    pub fn save_as_npy(&self, path: &str) -> Result<(), WriteNpyError> {
        check_path!(path);
        let writer = BufWriter::new(File::create(path)?);
        self.psi.write_npy(writer)?;
        Ok(())
    }

    /// Плоский график плотности вероятности
    pub fn plot(&self, path: &str, colorbar_limits: [F; 2]) {
        let rho = self.density();

        let (size_x, size_y, size_colorbar) = (500, 500, 60);
        let [colorbar_min, colorbar_max] = colorbar_limits;

        check_path!(path);
        heatmap::plot_heatmap(
            &self.x.grid,
            &self.x.grid,
            &rho,
            size_x,
            size_y,
            size_colorbar,
            colorbar_min,
            colorbar_max,
            path,
        );
    }
}
