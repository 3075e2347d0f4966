use crate::collage::plot_collage_pdf;
use crate::config::F;
use crate::measure_time;
use crate::space::Xspace1D;
use crate::wave_function::AntisymWF2e1d;
use ndarray::Array2;

#[test]
fn collage_pdf_smoke() {
    let x = Xspace1D::uniform(1.0, 60);
    let configs: [(usize, usize); 6] = [(1, 2), (1, 3), (2, 3), (2, 4), (3, 4), (1, 4)];

    let panels: Vec<((usize, usize), Array2<F>)> = configs
        .iter()
        .map(|&(n1, n2)| {
            let mut wf = AntisymWF2e1d::new(x.clone(), n1, n2);
            wf.compute_psi();
            ((n1, n2), wf.density())
        })
        .collect();

    let path = "src/tests/out/collage/fermions_3D_collage.pdf";
    measure_time!("collage", {
        plot_collage_pdf(&x, &panels, 2, 3, 30.0, 45.0, path).unwrap();
    });

    let meta = std::fs::metadata(path).unwrap();
    assert!(meta.len() > 0, "pdf must not be empty");
}

#[test]
fn heatmap_png_smoke() {
    let x = Xspace1D::uniform(1.0, 80);
    let mut wf = AntisymWF2e1d::new(x, 1, 2);
    wf.compute_psi();

    wf.save_as_npy("src/tests/out/heatmap/psi_1_2.npy").unwrap();
    wf.plot("src/tests/out/heatmap/density_1_2.png", [0.0, 2.0]);
}
