use algae::{dot, literal as lit, range, IntoCursors, Matrix, Vec3, Vector};
use anyhow::{ensure, Context};

fn main() -> anyhow::Result<()> {
    algae_demo::init_logger!();

    let mat = Matrix::new([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
    log::info!("matrix: {:?}", mat);

    let corner = mat.get(2, 2).context("3x3 matrix has no element at (2, 2)")?;
    ensure!(*corner == 8, "matrix rows were stored out of order: {:?}", mat);

    let v: Vec3<i32> = lit::vec | 3 | 2 | 1 | lit::end;
    let u: Vec3<i32> = lit::vec | 4 | 5 | 6 | lit::end;
    let product = dot(&v, &u);
    log::info!("{} . {} = {}", v, u, product);
    ensure!(product == 28, "unexpected dot product {}", product);

    for (i, row) in (&mat).walk().enumerate() {
        let row = Vector::new(*row.as_array());
        log::debug!("row {}: {} . {} = {}", i, row, v, row.dot(&v));
    }

    let mixed = lit::vec | 1u8 | 0.5f32 | -2i16 | lit::end;
    log::info!("mixed literal: {:?}", mixed);

    let shorter = range::accumulate(range::zip(&v, &[1, 2]), 0, |steps, _| steps + 1);
    ensure!(shorter == 2, "zip walked {} pairs", shorter);

    Ok(())
}
