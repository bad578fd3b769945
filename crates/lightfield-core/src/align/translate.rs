use ndarray::Array2;

/// Shift an image by `(dx, dy)` pixels with wrap-around addressing.
///
/// Pixels pushed past one edge reappear at the opposite edge. `dx` moves
/// columns, `dy` moves rows; shifts of any sign and magnitude are accepted
/// and reduced modulo the corresponding dimension.
pub fn translate(data: &Array2<f32>, dx: i64, dy: i64) -> Array2<f32> {
    let (h, w) = data.dim();
    let mut result = Array2::<f32>::zeros((h, w));
    if h == 0 || w == 0 {
        return result;
    }

    let dy = dy.rem_euclid(h as i64) as usize;
    let dx = dx.rem_euclid(w as i64) as usize;

    for row in 0..h {
        let dst_row = (row + dy) % h;
        for col in 0..w {
            let dst_col = (col + dx) % w;
            result[[dst_row, dst_col]] = data[[row, col]];
        }
    }

    result
}
