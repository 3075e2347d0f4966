use crate::config::F;
use crate::macros::check_path;
use ndarray::prelude::*;
use ndarray::{stack, Array1, Array2};
use ndarray_npy::{ReadNpyExt, WriteNpyError, WriteNpyExt};
use std::fs::File;
use std::io::BufWriter;

/// Одномерная координатная сетка ямы
#[derive(Debug, Clone)]
pub struct Xspace1D {
    pub x0: F,
    pub dx: F,
    pub n: usize,
    pub grid: Array1<F>,
}

impl Xspace1D {
    pub const PREFIX: &'static str = "x";

    pub fn new(x0: F, dx: F, n: usize) -> Self {
        assert!(n >= 1, "Grid must contain at least one point");
        let grid = Array::linspace(x0, x0 + dx * (n - 1) as F, n);
        Self { x0, dx, n, grid }
    }

    /// Равномерная сетка из n узлов на отрезке [0, l] включительно
    pub fn uniform(l: F, n: usize) -> Self {
        assert!(l > 0.0, "Well length must be positive");
        assert!(n >= 2, "Grid must contain at least two points");
        Self::new(0.0, l / (n - 1) as F, n)
    }

    /// Правая граница сетки (длина ямы при x0 = 0)
    pub fn length(&self) -> F {
        self.grid[self.n - 1]
    }

    /// Координатные сетки (x1, x2) для всех пар узлов:
    /// x1[[i, j]] = grid[j], x2[[i, j]] = grid[i]
    pub fn meshgrid(&self) -> (Array2<F>, Array2<F>) {
        let x = &self.grid;
        (
            stack(Axis(0), &vec![x.view(); x.len()]).unwrap(),
            stack(Axis(1), &vec![x.view(); x.len()]).unwrap(),
        )
    }

    pub fn save_as_npy(&self, dir_path: &str) -> Result<(), WriteNpyError> {
        let x_path = String::from(dir_path) + "/" + Self::PREFIX + "0.npy";
        check_path!(x_path.as_str());
        let writer = BufWriter::new(File::create(x_path)?);
        self.grid.write_npy(writer)?;
        Ok(())
    }

    pub fn load_from_npy(dir_path: &str) -> Self {
        let x_path = String::from(dir_path) + "/" + Self::PREFIX + "0.npy";
        let reader = File::open(x_path).unwrap();
        let grid = Array1::<F>::read_npy(reader).unwrap();
        let x0 = grid[[0]];
        let dx = grid[[1]] - grid[[0]];
        let n = grid.len();
        Self { x0, dx, n, grid }
    }
}
