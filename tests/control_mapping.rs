use glam::Vec2;
use tron::controller::{compute_velocity, InputState};

fn all_inputs() -> impl Iterator<Item = InputState> {
    (0u8..16).map(|bits| InputState {
        up: bits & 1 != 0,
        down: bits & 2 != 0,
        left: bits & 4 != 0,
        right: bits & 8 != 0,
    })
}

#[test]
fn unambiguous_inputs_map_to_matching_axes() {
    let speed = 300.0;
    for input in all_inputs().filter(|i| !(i.up && i.down) && !(i.left && i.right)) {
        let v = compute_velocity(input, speed);
        let expected_y = if input.up { -speed } else if input.down { speed } else { 0.0 };
        let expected_x = if input.left { -speed } else if input.right { speed } else { 0.0 };
        assert_eq!(v, Vec2::new(expected_x, expected_y), "{input:?}");
    }
}

#[test]
fn opposing_inputs_resolve_to_first_checked() {
    let both_vertical = InputState { up: true, down: true, ..Default::default() };
    assert_eq!(compute_velocity(both_vertical, 300.0), Vec2::new(0.0, -300.0));

    let both_horizontal = InputState { left: true, right: true, ..Default::default() };
    assert_eq!(compute_velocity(both_horizontal, 300.0), Vec2::new(-300.0, 0.0));

    let everything = InputState { up: true, down: true, left: true, right: true };
    assert_eq!(compute_velocity(everything, 300.0), Vec2::new(-300.0, -300.0));
}

#[test]
fn components_never_exceed_speed() {
    for input in all_inputs() {
        let v = compute_velocity(input, 42.0);
        assert!(v.x.abs() == 0.0 || v.x.abs() == 42.0);
        assert!(v.y.abs() == 0.0 || v.y.abs() == 42.0);
    }
}
