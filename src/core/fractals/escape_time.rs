use crate::core::data::complex::Complex;

pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Counts iterations of `z ← z² + c` from `start` until `|z|² > 4`.
///
/// Returns a value in `[0, max_iterations]`; `max_iterations` means the orbit
/// stayed bounded for the whole run. Mandelbrot passes the pixel as `c` with
/// `start = 0`, Julia passes the pixel as `start` with a fixed `c`.
#[must_use]
pub fn iterate(start: Complex, c: Complex, max_iterations: u32) -> u32 {
    let mut z = start;
    let mut iteration = 0;

    while z.magnitude_squared() <= ESCAPE_RADIUS_SQUARED && iteration < max_iterations {
        z = z.square() + c;
        iteration += 1;
    }

    iteration
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX: u32 = 150;

    #[test]
    fn start_outside_escape_radius_returns_zero() {
        let starts = [
            Complex::new(2.1, 0.0),
            Complex::new(0.0, -3.0),
            Complex::new(-1.5, 1.5),
            Complex::new(100.0, 100.0),
        ];

        for start in starts {
            assert_eq!(iterate(start, Complex::ZERO, MAX), 0, "start {:?}", start);
            assert_eq!(iterate(start, Complex::new(-0.7, 0.27), MAX), 0);
        }
    }

    #[test]
    fn start_on_escape_radius_is_not_escaped() {
        // |z|² == 4 is still inside; z = 2 maps to 4 and escapes next round.
        assert_eq!(iterate(Complex::new(2.0, 0.0), Complex::ZERO, MAX), 1);
    }

    #[test]
    fn origin_is_bounded() {
        assert_eq!(iterate(Complex::ZERO, Complex::ZERO, MAX), MAX);
    }

    #[test]
    fn period_two_bulb_is_bounded() {
        assert_eq!(iterate(Complex::ZERO, Complex::new(-1.0, 0.0), MAX), MAX);
    }

    #[test]
    fn one_plus_i_escapes_within_two_iterations() {
        let iterations = iterate(Complex::ZERO, Complex::new(1.0, 1.0), MAX);

        assert!(iterations <= 2);
        assert_eq!(iterations, 2);
    }

    #[test]
    fn result_never_exceeds_cap() {
        for i in -20..=20 {
            for j in -20..=20 {
                let c = Complex::new(i as f64 / 10.0, j as f64 / 10.0);
                let mandelbrot = iterate(Complex::ZERO, c, 40);
                let julia = iterate(c, Complex::new(-0.8, 0.156), 40);

                assert!(mandelbrot <= 40);
                assert!(julia <= 40);
            }
        }
    }

    #[test]
    fn cap_of_one_stops_after_single_step() {
        assert_eq!(iterate(Complex::ZERO, Complex::ZERO, 1), 1);
        assert_eq!(iterate(Complex::new(3.0, 0.0), Complex::ZERO, 1), 0);
    }

    #[test]
    fn real_axis_point_outside_set_escapes_quickly() {
        // 0 → 1 → 2 → 5: escapes on the third step.
        assert_eq!(iterate(Complex::ZERO, Complex::new(1.0, 0.0), MAX), 3);
    }

    #[test]
    fn julia_orbit_uses_previous_real_part_for_imaginary_update() {
        // z = 1 + i, c = 0: z² = 2i, so a correct step lands on |z|² = 4 (not escaped),
        // then 2i → -4 escapes. Updating re before im would give a different path.
        assert_eq!(iterate(Complex::new(1.0, 1.0), Complex::ZERO, MAX), 2);
    }
}
