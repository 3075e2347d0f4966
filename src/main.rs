use fermibox::collage::plot_collage_pdf;
use fermibox::config::F;
use fermibox::space::Xspace1D;
use fermibox::wave_function::AntisymWF2e1d;
use ndarray::Array2;
use rayon::prelude::*;

fn main() {
    // параметры ямы и сетки
    const L: F = 1.0;
    const N: usize = 100;
    // конфигурации (n1, n2)
    const CONFIGS: [(usize, usize); 6] = [(1, 2), (1, 3), (2, 3), (2, 4), (3, 4), (1, 4)];
    // камера и файл коллажа
    const ELEV: F = 30.0;
    const AZIM: F = 45.0;
    const OUT_PATH: &str = "fermions_3D_collage.pdf";

    // координатная сетка [0, L]
    let x = Xspace1D::uniform(L, N);

    //============================================================
    //             плотности вероятности |psi|^2
    //============================================================
    let panels: Vec<((usize, usize), Array2<F>)> = CONFIGS
        .par_iter()
        .map(|&(n1, n2)| {
            let mut wf = AntisymWF2e1d::new(x.clone(), n1, n2);
            wf.compute_psi();
            ((n1, n2), wf.density())
        })
        .collect();

    //============================================================
    //                  коллаж 2 x 3 в pdf
    //============================================================
    plot_collage_pdf(&x, &panels, 2, 3, ELEV, AZIM, OUT_PATH).unwrap();

    println!("PDF file generated: {OUT_PATH}");
}
