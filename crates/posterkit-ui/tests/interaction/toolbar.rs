use posterkit_core::{shared, EventFilter};
use posterkit_scene::{ElementType, Outcome, SceneStore, TextAlign, VerticalAlign};
use posterkit_ui::{Toolbar, ToolbarAction, VariantControls, SCALE_UP_FACTOR};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[test]
fn test_each_action_is_one_mutation() {
    let store = shared(SceneStore::new());
    store.borrow_mut().add_rect();
    let toolbar = Toolbar::new(store.clone());

    let count = Arc::new(AtomicUsize::new(0));
    let counter = count.clone();
    store.borrow().subscribe(EventFilter::All, move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    let actions = [
        ToolbarAction::RotateBy(90.0),
        ToolbarAction::SetScale(2.0),
        ToolbarAction::SetOpacity(0.5),
        ToolbarAction::SetCornerRadius(8.0),
        ToolbarAction::SetFill("#ff0000".to_string()),
        ToolbarAction::SetStroke("#00ff00".to_string()),
    ];
    for (i, action) in actions.into_iter().enumerate() {
        assert_eq!(toolbar.dispatch(action), Outcome::Applied);
        assert_eq!(count.load(Ordering::SeqCst), i + 1);
    }
}

#[test]
fn test_rotate_buttons_accumulate() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_rect();
    let toolbar = Toolbar::new(store.clone());

    let step = toolbar.rotate_step();
    assert_eq!(step, 90.0);
    toolbar.dispatch(ToolbarAction::RotateBy(-step));
    assert_eq!(store.borrow().element(id).unwrap().rotation, 270.0);
    toolbar.dispatch(ToolbarAction::RotateBy(step));
    toolbar.dispatch(ToolbarAction::RotateBy(step));
    assert_eq!(store.borrow().element(id).unwrap().rotation, 90.0);
}

#[test]
fn test_scale_buttons() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_image("a.png", 40.0, 40.0);
    let toolbar = Toolbar::new(store.clone());

    toolbar.dispatch(ToolbarAction::ScaleBy(SCALE_UP_FACTOR));
    assert_eq!(store.borrow().element(id).unwrap().scale, 1.1);
    assert_eq!(toolbar.model().unwrap().controls, VariantControls::Image);
}

#[test]
fn test_variant_actions_respect_kind() {
    let store = shared(SceneStore::new());
    store.borrow_mut().add_rect();
    let toolbar = Toolbar::new(store.clone());

    assert_eq!(toolbar.dispatch(ToolbarAction::SetFontSize(30.0)), Outcome::WrongKind);
    assert_eq!(
        toolbar.dispatch(ToolbarAction::SetTextColor("#333".to_string())),
        Outcome::WrongKind
    );

    let text = store.borrow_mut().add_text();
    assert_eq!(toolbar.dispatch(ToolbarAction::SetCornerRadius(4.0)), Outcome::WrongKind);
    toolbar.dispatch(ToolbarAction::SetAlign(TextAlign::Right));
    toolbar.dispatch(ToolbarAction::SetVerticalAlign(VerticalAlign::Bottom));
    toolbar.dispatch(ToolbarAction::SetFontFamily("Georgia".to_string()));
    toolbar.dispatch(ToolbarAction::SetTextColor("#333333".to_string()));

    let model = toolbar.model().unwrap();
    assert_eq!(model.id, text);
    assert_eq!(model.element_type, ElementType::Text);
    assert_eq!(
        model.controls,
        VariantControls::Text {
            font_size: 20.0,
            font_family: "Georgia".to_string(),
            align: TextAlign::Right,
            vertical_align: VerticalAlign::Bottom,
            fill: "#333333".to_string(),
        }
    );
}

#[test]
fn test_delete_clears_model() {
    let store = shared(SceneStore::new());
    store.borrow_mut().add_rect();
    let toolbar = Toolbar::new(store.clone());

    assert_eq!(toolbar.dispatch(ToolbarAction::Delete), Outcome::Applied);
    assert!(store.borrow().is_empty());
    assert!(toolbar.model().is_none());
}

#[test]
fn test_slider_echo_resyncs_on_selection_change() {
    let store = shared(SceneStore::new());
    let a = store.borrow_mut().add_rect();
    let toolbar = Toolbar::new(store.clone());

    toolbar.slide(ToolbarAction::SetOpacity(0.3));
    toolbar.slide(ToolbarAction::SetCornerRadius(12.0));
    let echo = toolbar.echo().unwrap();
    assert_eq!(echo.id, a);
    assert_eq!(echo.opacity, 0.3);
    assert_eq!(echo.corner_radius, Some(12.0));
    assert_eq!(store.borrow().element(a).unwrap().opacity, 0.3);

    let b = store.borrow_mut().add_text();
    assert!(toolbar.resync());
    let echo = toolbar.echo().unwrap();
    assert_eq!(echo.id, b);
    assert_eq!(echo.opacity, 1.0);
    assert_eq!(echo.corner_radius, None);
    assert_eq!(echo.font_size, Some(20.0));
    assert!(!toolbar.resync());
}

#[test]
fn test_model_follows_button_actions() {
    let store = shared(SceneStore::new());
    store.borrow_mut().add_rect();
    let toolbar = Toolbar::new(store.clone());
    assert_eq!(toolbar.model().unwrap().rotation, 0.0);

    toolbar.dispatch(ToolbarAction::RotateBy(90.0));
    assert_eq!(toolbar.model().unwrap().rotation, 90.0);

    toolbar.dispatch(ToolbarAction::ScaleBy(SCALE_UP_FACTOR));
    assert_eq!(toolbar.model().unwrap().scale, 1.1);
}

#[test]
fn test_slide_shows_clamped_value() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_rect();
    let toolbar = Toolbar::new(store.clone());

    assert_eq!(toolbar.slide(ToolbarAction::SetScale(100.0)), Outcome::Applied);
    assert_eq!(store.borrow().element(id).unwrap().scale, 10.0);
    assert_eq!(toolbar.model().unwrap().scale, 10.0);
    assert_eq!(toolbar.echo().unwrap().scale, 10.0);

    // Already at the upper bound: nothing changes, slider snaps back
    assert_eq!(toolbar.slide(ToolbarAction::SetScale(50.0)), Outcome::Unchanged);
    assert_eq!(toolbar.model().unwrap().scale, 10.0);

    toolbar.slide(ToolbarAction::SetOpacity(-1.0));
    assert_eq!(toolbar.model().unwrap().opacity, 0.0);
}

#[test]
fn test_model_follows_changes_made_elsewhere() {
    let store = shared(SceneStore::new());
    let id = store.borrow_mut().add_text();
    let toolbar = Toolbar::new(store.clone());
    toolbar.slide(ToolbarAction::SetFontSize(30.0));

    store.borrow_mut().rotate_element(id, 45.0);
    store.borrow_mut().update_opacity(id, 0.25);
    store.borrow_mut().update_text_style(
        id,
        posterkit_scene::TextStylePatch {
            font_size: Some(12.0),
            ..Default::default()
        },
    );

    let model = toolbar.model().unwrap();
    assert_eq!(model.rotation, 45.0);
    assert_eq!(model.opacity, 0.25);
    match model.controls {
        VariantControls::Text { font_size, .. } => assert_eq!(font_size, 12.0),
        other => panic!("unexpected controls {:?}", other),
    }
}
