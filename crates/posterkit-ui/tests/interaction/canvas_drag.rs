use posterkit_core::{shared, thread_safe, EventFilter};
use posterkit_scene::{ElementChange, Outcome, Point, SceneEvent, SceneStore};
use posterkit_ui::{EditorCanvas, HitTarget};

#[test]
fn test_drag_commits_single_move() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_rect();
    let canvas = EditorCanvas::new(store.clone());

    let moves = thread_safe(0usize);
    let counter = moves.clone();
    store.borrow().subscribe(EventFilter::All, move |event| {
        if let SceneEvent::ElementChanged {
            change: ElementChange::Position,
            ..
        } = event
        {
            *counter.lock() += 1;
        }
    });

    // Rect sits centered at (350, 250) with size 100x100
    assert_eq!(canvas.pointer_down(Point::new(400.0, 300.0)), HitTarget::Element(id));
    assert!(canvas.is_dragging());
    canvas.pointer_move(Point::new(410.0, 310.0));
    canvas.pointer_move(Point::new(420.0, 330.0));

    assert_eq!(
        canvas.node(id).unwrap().transform.position(),
        Point::new(370.0, 280.0)
    );
    assert_eq!(
        store.borrow().element(id).unwrap().position,
        Point::new(350.0, 250.0)
    );
    assert_eq!(*moves.lock(), 0);

    assert_eq!(canvas.pointer_up(), Some(Outcome::Applied));
    assert_eq!(
        store.borrow().element(id).unwrap().position,
        Point::new(370.0, 280.0)
    );
    assert_eq!(*moves.lock(), 1);
    assert!(!canvas.is_dragging());
}

#[test]
fn test_drag_of_deleted_element_is_dropped() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_rect();
    let canvas = EditorCanvas::new(store.clone());

    assert!(canvas.begin_drag(id, Point::new(400.0, 300.0)));
    store.borrow_mut().delete_element(id);
    canvas.sync_if_needed();

    assert!(!canvas.is_dragging());
    assert_eq!(canvas.end_drag(), None);
}

#[test]
fn test_second_gesture_refused_while_dragging() {
    let store = shared(SceneStore::new());
    let a = store.borrow_mut().add_rect();
    let b = store.borrow_mut().add_rect();
    let canvas = EditorCanvas::new(store.clone());

    assert!(canvas.begin_drag(a, Point::new(0.0, 0.0)));
    assert!(!canvas.begin_drag(b, Point::new(0.0, 0.0)));
}
