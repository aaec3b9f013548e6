//! End-to-end checks: key presses and idle ticks driving the drawn wireframe.

use nalgebra::Point3;
use std::f32::consts::PI;
use std::time::{Duration, Instant};
use tetra_core::{AnimationState, Axis, FrameRenderer, LineSink, Matrix, MatrixError, RotationAngles};

#[derive(Default)]
struct Lines(Vec<(Point3<f32>, Point3<f32>)>);

impl LineSink for Lines {
    fn clear(&mut self) {
        self.0.clear();
    }

    fn draw_line(&mut self, from: &Point3<f32>, to: &Point3<f32>) {
        self.0.push((*from, *to));
    }

    fn flush(&mut self) {}
}

fn close(a: &Point3<f32>, b: &Point3<f32>) -> bool {
    (a - b).norm() < 1e-4
}

#[test]
fn zero_rotation_draws_k4_between_input_points() {
    let input = [
        Point3::new(-0.5, -0.433, -0.375),
        Point3::new(0.5, -0.433, -0.375),
        Point3::new(0.0, 0.433, -0.375),
        Point3::new(0.0, 0.0, 0.375),
    ];

    let mut lines = Lines::default();
    FrameRenderer::default()
        .render(&RotationAngles::zero(), &mut lines)
        .unwrap();
    assert_eq!(lines.0.len(), 6);

    for i in 0..4 {
        for j in i + 1..4 {
            let found = lines.0.iter().any(|(a, b)| {
                ((a - input[i]).norm() < 1e-3 && (b - input[j]).norm() < 1e-3)
                    || ((a - input[j]).norm() < 1e-3 && (b - input[i]).norm() < 1e-3)
            });
            assert!(found, "missing edge {i}-{j}");
        }
    }
}

#[test]
fn spinning_x_for_one_second_flips_y_and_z() {
    let start = Instant::now();
    let mut state = AnimationState::new(start);
    assert!(state.handle_key('x'));

    // Two half-second ticks at π rad/s: a half turn about x.
    assert!(state.tick(start + Duration::from_millis(500)));
    assert!(state.tick(start + Duration::from_millis(1000)));
    assert!((state.angles().x - PI).abs() < 1e-3);

    let renderer = FrameRenderer::default();
    let mut still = Lines::default();
    let mut turned = Lines::default();
    renderer.render(&RotationAngles::zero(), &mut still).unwrap();
    renderer.render(&state.angles(), &mut turned).unwrap();

    for ((a0, b0), (a1, b1)) in still.0.iter().zip(&turned.0) {
        assert!(close(a1, &Point3::new(a0.x, -a0.y, -a0.z)));
        assert!(close(b1, &Point3::new(b0.x, -b0.y, -b0.z)));
    }
}

#[test]
fn stopping_every_axis_stops_redraw_requests() {
    let start = Instant::now();
    let mut state = AnimationState::new(start);
    state.handle_key('z');
    assert!(state.tick(start + Duration::from_millis(10)));

    state.handle_key('z');
    let frozen = state.angles();
    assert!(!state.tick(start + Duration::from_millis(20)));
    assert_eq!(state.angles(), frozen);
    assert!(!state.spin(Axis::Z).is_spinning());
}

#[test]
fn incompatible_multiply_is_reported() {
    let a = Matrix::from_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    let b = Matrix::from_array([[1.0, 2.0], [3.0, 4.0]]);
    assert!(matches!(
        a.multiply(&b),
        Err(MatrixError::DimensionMismatch {
            left_rows: 2,
            left_cols: 3,
            right_rows: 2,
            right_cols: 2
        })
    ));
}
