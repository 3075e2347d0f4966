use crate::config::F;
use crate::space::Xspace1D;

#[test]
fn uniform_grid_values() {
    let x = Xspace1D::uniform(2.0, 5);
    let expected: [F; 5] = [0.0, 0.5, 1.0, 1.5, 2.0];

    assert_eq!(x.n, 5);
    assert!((x.dx - 0.5).abs() < 1e-12);
    assert!((x.length() - 2.0).abs() < 1e-12);
    for (value, want) in x.grid.iter().zip(expected.iter()) {
        assert!((value - want).abs() < 1e-12, "grid point mismatch");
    }
}

#[test]
fn uniform_grid_spans_well_inclusive() {
    let x = Xspace1D::uniform(1.0, 100);
    assert_eq!(x.grid[0], 0.0);
    assert!((x.grid[x.n - 1] - 1.0).abs() < 1e-12);
}

#[test]
fn grid_survives_npy_save_and_load() {
    let dir = "src/tests/out/space";
    let x = Xspace1D::uniform(1.5, 7);
    x.save_as_npy(dir).unwrap();

    let loaded = Xspace1D::load_from_npy(dir);
    assert_eq!(loaded.n, x.n);
    assert_eq!(loaded.x0, x.x0);
    assert!((loaded.dx - x.dx).abs() < 1e-12);
    for (a, b) in loaded.grid.iter().zip(x.grid.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn meshgrid_replication() {
    let x = Xspace1D::uniform(2.0, 5);
    let (x1, x2) = x.meshgrid();

    assert_eq!(x1.dim(), (5, 5));
    assert_eq!(x2.dim(), (5, 5));
    // x1 меняется вдоль столбцов, x2 вдоль строк
    for i in 0..5 {
        for j in 0..5 {
            assert_eq!(x1[[i, j]], x.grid[j]);
            assert_eq!(x2[[i, j]], x.grid[i]);
        }
    }
}
