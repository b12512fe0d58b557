use num_traits::PrimInt;

/// Greatest common divisor (Euclid).
pub fn gcd<T: PrimInt>(mut a: T, mut b: T) -> T {
    while b != T::zero() {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// Least common multiple. Zero if either argument is zero.
pub fn lcm<T: PrimInt>(a: T, b: T) -> T {
    if a == T::zero() || b == T::zero() {
        return T::zero();
    }
    a / gcd(a, b) * b
}

/// Least common multiple of every value, or `None` if there are none.
pub fn lcm_all<T: PrimInt>(values: impl IntoIterator<Item = T>) -> Option<T> {
    values.into_iter().reduce(lcm)
}

/// Twice the signed area of the polygon through `vertices` (shoelace formula).
///
/// The polygon is closed implicitly; the last vertex connects to the first.
pub fn shoelace_double_area(vertices: &[(i64, i64)]) -> i64 {
    let n = vertices.len();
    (0..n)
        .map(|i| {
            let (x0, y0) = vertices[i];
            let (x1, y1) = vertices[(i + 1) % n];
            x0 * y1 - x1 * y0
        })
        .sum()
}

/// Number of lattice points strictly inside a lattice polygon (Pick's
/// theorem), given its vertices and the number of lattice points on its
/// boundary.
pub fn interior_points(vertices: &[(i64, i64)], boundary: i64) -> i64 {
    let double_area = shoelace_double_area(vertices).abs();
    (double_area - boundary + 2) / 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd_lcm() {
        assert_eq!(gcd(12_u64, 18), 6);
        assert_eq!(gcd(7_u32, 0), 7);
        assert_eq!(lcm(4_u64, 6), 12);
        assert_eq!(lcm(0_u64, 6), 0);
        assert_eq!(lcm_all([2_u64, 3, 4]), Some(12));
        assert_eq!(lcm_all(Vec::<u64>::new()), None);
    }

    #[test]
    fn test_square() {
        // 2x2 square: 9 lattice points, 8 on the boundary, 1 inside.
        let square = [(0, 0), (2, 0), (2, 2), (0, 2)];
        assert_eq!(shoelace_double_area(&square), 8);
        assert_eq!(interior_points(&square, 8), 1);
    }

    #[test]
    fn test_orientation() {
        let clockwise = [(0, 0), (0, 2), (2, 2), (2, 0)];
        assert_eq!(shoelace_double_area(&clockwise), -8);
        assert_eq!(interior_points(&clockwise, 8), 1);
    }
}
