pub mod info;
pub mod refocus;

/// Parse a `WIDTHxHEIGHT` grid dimension argument.
pub fn parse_grid_size(s: &str) -> Result<(usize, usize), String> {
    let (w, h) = s
        .split_once('x')
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{s}'"))?;
    let w: usize = w.parse().map_err(|_| format!("invalid grid width '{w}'"))?;
    let h: usize = h.parse().map_err(|_| format!("invalid grid height '{h}'"))?;
    if w == 0 || h == 0 {
        return Err("grid dimensions must be positive".into());
    }
    Ok((w, h))
}

/// Parse an `X,Y` signed integer pair argument.
pub fn parse_point(s: &str) -> Result<(i64, i64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x '{x}'"))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y '{y}'"))?;
    Ok((x, y))
}

/// Parse an `X,Y` unsigned integer pair argument.
pub fn parse_grid_pos(s: &str) -> Result<(usize, usize), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y, got '{s}'"))?;
    let x = x.trim().parse().map_err(|_| format!("invalid x '{x}'"))?;
    let y = y.trim().parse().map_err(|_| format!("invalid y '{y}'"))?;
    Ok((x, y))
}

/// Parse a `DX,DY` float pair argument.
pub fn parse_rate(s: &str) -> Result<(f64, f64), String> {
    let (dx, dy) = s
        .split_once(',')
        .ok_or_else(|| format!("expected DX,DY, got '{s}'"))?;
    let dx = dx.trim().parse().map_err(|_| format!("invalid dx '{dx}'"))?;
    let dy = dy.trim().parse().map_err(|_| format!("invalid dy '{dy}'"))?;
    Ok((dx, dy))
}
