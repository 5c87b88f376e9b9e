use posterkit_core::shared;
use posterkit_scene::{Anchor, Outcome, Point, SceneStore, Size};
use posterkit_ui::{EditorCanvas, Handle, HitTarget};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn test_corner_resize_commits_and_resets_scale() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_rect();
    let canvas = EditorCanvas::new(store.clone());

    // Bottom-right corner of the centered 100x100 rect
    assert_eq!(
        canvas.pointer_down(Point::new(450.0, 350.0)),
        HitTarget::Handle(Handle::Resize(Anchor::BottomRight))
    );
    assert!(canvas.is_transforming());
    canvas.pointer_move(Point::new(500.0, 400.0));

    let node = canvas.node(id).unwrap();
    assert_eq!(node.transform.scale_x, 1.5);
    assert_eq!(node.transform.scale_y, 1.5);
    assert_eq!(store.borrow().element(id).unwrap().size, Size::new(100.0, 100.0));

    assert_eq!(canvas.pointer_up(), Some(Outcome::Applied));
    let element = store.borrow().element(id).cloned().unwrap();
    assert_eq!(element.size, Size::new(150.0, 150.0));
    assert_eq!(element.position, Point::new(350.0, 250.0));
    assert!(canvas.node(id).unwrap().transform.is_unscaled());
    // Selection survives the handle press
    assert_eq!(store.borrow().selected_id(), Some(id));
}

#[test]
fn test_resize_below_minimum_keeps_previous_box() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_rect();
    let canvas = EditorCanvas::new(store.clone());

    assert!(canvas.begin_transform(Handle::Resize(Anchor::BottomRight), Point::new(450.0, 350.0)));
    canvas.transform_to(Point::new(352.0, 352.0));
    assert!(canvas.node(id).unwrap().transform.is_unscaled());

    canvas.transform_to(Point::new(360.0, 360.0));
    canvas.transform_to(Point::new(300.0, 300.0));
    assert!(approx(canvas.node(id).unwrap().transform.scale_x, 0.1));

    canvas.end_transform();
    let size = store.borrow().element(id).unwrap().size;
    assert!(approx(size.width, 10.0));
    assert!(approx(size.height, 10.0));
}

#[test]
fn test_top_left_resize_moves_origin() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_rect();
    let canvas = EditorCanvas::new(store.clone());

    assert!(canvas.begin_transform(Handle::Resize(Anchor::TopLeft), Point::new(350.0, 250.0)));
    canvas.transform_to(Point::new(330.0, 240.0));
    canvas.end_transform();

    let element = store.borrow().element(id).cloned().unwrap();
    assert_eq!(element.position, Point::new(330.0, 240.0));
    assert!(approx(element.size.width, 120.0));
    assert!(approx(element.size.height, 110.0));
}

#[test]
fn test_rotation_handle_snaps_and_keeps_center() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_rect();
    let canvas = EditorCanvas::new(store.clone());

    // Rotation handle sits 40 units above the top edge center
    assert_eq!(
        canvas.pointer_down(Point::new(400.0, 210.0)),
        HitTarget::Handle(Handle::Rotate)
    );
    // Straight right of the center (400, 300)
    canvas.pointer_move(Point::new(500.0, 300.0));
    canvas.pointer_up();

    let element = store.borrow().element(id).cloned().unwrap();
    assert_eq!(element.rotation, 90.0);
    assert_eq!(element.size, Size::new(100.0, 100.0));
    let center = element.frame().center();
    assert!(approx(center.x, 400.0));
    assert!(approx(center.y, 300.0));
}

#[test]
fn test_rotation_outside_tolerance_is_free() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_rect();
    let canvas = EditorCanvas::new(store.clone());

    let angle = 70.0f64.to_radians();
    let pointer = Point::new(400.0 + 100.0 * angle.sin(), 300.0 - 100.0 * angle.cos());
    assert!(canvas.begin_transform(Handle::Rotate, Point::new(400.0, 210.0)));
    canvas.transform_to(pointer);
    canvas.end_transform();

    assert!(approx(store.borrow().element(id).unwrap().rotation, 70.0));
}

#[test]
fn test_transform_needs_selection() {
    let store = shared(SceneStore::new());
    store.borrow_mut().add_rect();
    store.borrow_mut().set_selected_id(None);
    let canvas = EditorCanvas::new(store.clone());

    assert!(canvas.overlay().is_none());
    assert!(!canvas.begin_transform(Handle::Rotate, Point::new(0.0, 0.0)));
    assert_eq!(canvas.end_transform(), None);
}
