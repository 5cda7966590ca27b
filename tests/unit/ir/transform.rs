use super::*;
use crate::animatables::animatable::KeyFrame;
use crate::animatables::easing::Easing;

#[test]
fn identity_is_identity() {
    let t = Transform::identity();
    assert!(t.has_identity_geometry());
    assert!(t.is_identity());
    assert!(t.is_static());
    assert_eq!(t, Transform::default());
}

#[test]
fn opacity_does_not_affect_geometry_identity() {
    let t = Transform {
        opacity: Animatable::new_static(Opacity::from_fraction(0.5)),
        ..Transform::identity()
    };
    assert!(t.has_identity_geometry());
    assert!(!t.is_identity());
}

#[test]
fn animated_component_makes_transform_non_static() {
    let t = Transform {
        rotation: Animatable::new(vec![
            KeyFrame::new(0.0, Rotation::NONE, Easing::Linear),
            KeyFrame::new(10.0, Rotation::from_degrees(90.0), Easing::Linear),
        ])
        .unwrap(),
        ..Transform::identity()
    };
    assert!(!t.is_static());
    assert!(!t.has_identity_geometry());
}
