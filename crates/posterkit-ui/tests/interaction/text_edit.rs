use posterkit_core::shared;
use posterkit_scene::{Outcome, SceneStore};
use posterkit_ui::EditorCanvas;

#[test]
fn test_each_keystroke_commits() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_text();
    let canvas = EditorCanvas::new(store.clone());

    let overlay = canvas.double_click(id).expect("text overlay");
    assert_eq!(overlay.text, "Double-click to edit");
    assert_eq!(overlay.font_size, 20.0);
    assert_eq!(overlay.font_family, "Arial");
    assert!(!canvas.node(id).unwrap().visible);

    assert_eq!(canvas.edit_input("H"), Some(Outcome::Applied));
    assert_eq!(store.borrow().element(id).unwrap().as_text().unwrap().text, "H");
    canvas.edit_input("Hi");
    assert_eq!(store.borrow().element(id).unwrap().as_text().unwrap().text, "Hi");

    canvas.edit_blur();
    assert_eq!(canvas.editing(), None);
    assert!(canvas.node(id).unwrap().visible);
    assert_eq!(store.borrow().element(id).unwrap().as_text().unwrap().text, "Hi");
    assert_eq!(canvas.edit_input("ignored"), None);
}

#[test]
fn test_overlay_follows_view_scale() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_text();
    store.borrow_mut().set_view_scale(2.0);
    let canvas = EditorCanvas::new(store.clone());

    let position = store.borrow().element(id).unwrap().position;
    let overlay = canvas.double_click(id).unwrap();
    assert_eq!(overlay.position, position.scaled(2.0));
    assert_eq!(overlay.font_size, 40.0);
}

#[test]
fn test_double_click_on_rect_does_nothing() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_rect();
    let canvas = EditorCanvas::new(store.clone());

    assert!(canvas.double_click(id).is_none());
    assert_eq!(canvas.editing(), None);
}

#[test]
fn test_deleting_edited_element_ends_session() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_text();
    let canvas = EditorCanvas::new(store.clone());

    canvas.double_click(id).unwrap();
    store.borrow_mut().delete_element(id);
    canvas.sync_if_needed();

    assert_eq!(canvas.editing(), None);
    assert_eq!(canvas.edit_input("late"), None);
}
