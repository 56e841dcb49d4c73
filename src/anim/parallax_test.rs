use super::*;

#[test]
fn pattern_moves_opposite_at_half_speed() {
    assert_eq!(offset(0.0), 0.0);
    assert_eq!(offset(200.0), -100.0);
    assert_eq!(offset(-100.0), 50.0);
}

#[test]
fn transform_renders_pixel_translate() {
    assert_eq!(transform(200.0), "translateY(-100px)");
    assert_eq!(transform(-100.0), "translateY(50px)");
}

#[test]
fn still_page_renders_plain_zero() {
    assert_eq!(transform(0.0), "translateY(0px)");
}
