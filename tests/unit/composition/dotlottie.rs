use super::*;

#[test]
fn manifest_parses_with_defaults() {
    let json = serde_json::json!({
        "version": "1.0",
        "generator": "hand",
        "author": "someone",
        "animations": [
            { "id": "intro" },
            { "id": "spinner", "speed": 2.0, "themeColor": "#112233", "loop": true }
        ]
    });

    let manifest: ManifestDef = serde_json::from_value(json).unwrap();
    assert_eq!(manifest.animations.len(), 2);
    assert_eq!(manifest.animations[0].speed, 1.0);
    assert!(!manifest.animations[0].is_looping);
    assert_eq!(
        manifest.animations[1].theme_color.as_deref(),
        Some("#112233")
    );
    assert!(manifest.animations[1].is_looping);
}
