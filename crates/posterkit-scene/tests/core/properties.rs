use posterkit_scene::geometry::{normalize_rotation, snap_rotation};
use posterkit_scene::{NewElement, SceneStore, Size};
use proptest::prelude::*;

proptest! {
    #[test]
    fn stored_rotation_is_normalized(r in -1.0e6f64..1.0e6) {
        let mut store = SceneStore::new();
        let id = store.add_rect();
        store.rotate_element(id, r);
        let stored = store.element(id).unwrap().rotation;
        prop_assert_eq!(stored, ((r % 360.0) + 360.0) % 360.0);
        prop_assert!((0.0..360.0).contains(&stored));
    }

    #[test]
    fn resize_never_goes_below_minimum(w in -100.0f64..100.0, h in -100.0f64..100.0) {
        let mut store = SceneStore::new();
        let id = store.add_rect();
        store.resize_element(id, Size::new(w, h));
        let size = store.element(id).unwrap().size;
        prop_assert_eq!(size.width, if w < 5.0 { 5.0 } else { w });
        prop_assert_eq!(size.height, if h < 5.0 { 5.0 } else { h });
    }

    #[test]
    fn opacity_and_view_scale_stay_in_range(v in -10.0f64..10.0) {
        let mut store = SceneStore::new();
        let id = store.add_rect();
        store.update_opacity(id, v);
        store.set_view_scale(v);
        let opacity = store.element(id).unwrap().opacity;
        prop_assert!((0.0..=1.0).contains(&opacity));
        prop_assert!((0.5..=3.0).contains(&store.view_scale()));
    }

    #[test]
    fn add_element_selects_result(kind in 0u8..3) {
        let mut store = SceneStore::new();
        store.add_rect();
        let kind = match kind {
            0 => NewElement::Rect,
            1 => NewElement::Text,
            _ => NewElement::Image { src: "a.png".into(), size: Size::new(10.0, 10.0) },
        };
        let id = store.add_element(kind, None);
        prop_assert_eq!(store.selected_id(), Some(id));
    }

    #[test]
    fn snapped_rotation_is_normalized(r in -720.0f64..720.0) {
        let snapped = snap_rotation(r, 45.0, 15.0);
        prop_assert!((0.0..360.0).contains(&snapped));
        let diff = (normalize_rotation(r) - snapped).abs();
        prop_assert!(diff <= 15.0 + 1e-9 || diff >= 345.0 - 1e-9);
    }
}
