use super::vtest::VTest;

pub fn unit_square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (1.0, 0.0).into(),
        (1.0, 1.0).into(),
        (0.0, 1.0).into(),
    ]
}

pub fn pentagon() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (2.0, 0.0).into(),
        (3.0, 2.0).into(),
        (1.0, 3.0).into(),
        (-1.0, 2.0).into(),
    ]
}

/// A 4x4 square with a 2x2 hole, joined at (0, 0)-(1, 1)
pub fn square_disk() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(), (4.0, 0.0).into(), (4.0, 4.0).into(), (0.0, 4.0).into(),
        (0.0, 0.0).into(), (1.0, 1.0).into(),
        (1.0, 3.0).into(), (3.0, 3.0).into(), (3.0, 1.0).into(),
        (1.0, 1.0).into(),
    ]
}

/// A 2x2 square with an extra vertex halfway along the bottom edge
pub fn collinear_square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (1.0, 0.0).into(),
        (2.0, 0.0).into(),
        (2.0, 2.0).into(),
        (0.0, 2.0).into(),
    ]
}

pub fn l_shape() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (2.0, 0.0).into(),
        (2.0, 1.0).into(),
        (1.0, 1.0).into(),
        (1.0, 2.0).into(),
        (0.0, 2.0).into(),
    ]
}

pub fn star() -> Vec<VTest> {
    vec![
        (1.0, 0.0).into(),
        (2.0, 2.0).into(),
        (0.0, 1.0).into(),
        (-2.0, 2.0).into(),
        (-1.0, 0.0).into(),
        (-2.0, -2.0).into(),
        (0.0, -1.0).into(),
        (2.0, -2.0).into(),
    ]
}

pub fn half_frame() -> Vec<VTest> {
    vec![
        (0., 0.).into(), (0.05, 0.05).into(), (0.95, 0.05).into(), (0.95, 0.95).into(), (1., 1.).into(), (1., 0.).into()
    ]
}

/// A 4x4 square with a zero-width spike poking out of its right side
pub fn spiked_square() -> Vec<VTest> {
    vec![
        (0.0, 0.0).into(),
        (4.0, 0.0).into(),
        (4.0, 2.0).into(),
        (6.0, 2.0).into(),
        (4.0, 2.0).into(),
        (4.0, 4.0).into(),
        (0.0, 4.0).into(),
    ]
}

/// A comb with `teeth` teeth pointing up, every gap between them a concave notch
pub fn comb(teeth: usize) -> Vec<VTest> {
    let mut p: Vec<VTest> = vec![(0.0, 0.0).into()];
    let right = (2 * teeth - 1) as f64;
    p.push((right, 0.0).into());
    for tooth in (0..teeth).rev() {
        let x = (2 * tooth) as f64;
        p.push((x + 1.0, 3.0).into());
        p.push((x, 3.0).into());
        if tooth > 0 {
            p.push((x, 1.0).into());
            p.push((x - 1.0, 1.0).into());
        }
    }
    p
}

/// `n` points evenly spaced on a circle, counter-clockwise
pub fn regular(n: usize, radius: f64) -> Vec<[f64; 2]> {
    (0..n).map(|i| {
        let theta = std::f64::consts::PI * 2. * (i as f64) / (n as f64);
        let (y, x) = theta.sin_cos();
        [x * radius, y * radius]
    }).collect()
}

pub fn all() -> Vec<Vec<VTest>> {
    vec![unit_square(), pentagon(), square_disk(), collinear_square(), l_shape(), star(), half_frame(), spiked_square(), comb(5)]
}
