use posterkit_core::shared;
use posterkit_scene::{ElementType, SceneStore, UploadApplied, UploadBlob};
use posterkit_ui::MaterialBar;
use std::io::Cursor;

fn png(width: u32, height: u32) -> UploadBlob {
    let mut bytes = Vec::new();
    image::RgbaImage::new(width, height)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode png");
    UploadBlob::new("image/png", bytes)
}

#[tokio::test]
async fn test_first_upload_sets_background_then_layers() {
    let store = shared(SceneStore::new());
    let bar = MaterialBar::new(store.clone());

    assert!(!bar.is_enabled());
    assert_eq!(bar.add_image(png(4, 4)).await.unwrap(), None);

    let applied = bar.upload(png(800, 600)).await.unwrap();
    assert_eq!(applied, Some(UploadApplied::Background));
    assert!(bar.is_enabled());
    assert!(store.borrow().is_empty());

    let Some(UploadApplied::Layer(id)) = bar.add_image(png(100, 50)).await.unwrap() else {
        panic!("expected an image layer");
    };
    let store = store.borrow();
    assert_eq!(store.element(id).unwrap().element_type(), ElementType::Image);
    assert_eq!(store.selected_id(), Some(id));
}

#[tokio::test]
async fn test_non_image_upload_ignored() {
    let store = shared(SceneStore::new());
    let bar = MaterialBar::new(store.clone());

    let result = bar
        .upload(UploadBlob::new("application/pdf", b"%PDF".to_vec()))
        .await
        .unwrap();
    assert_eq!(result, None);
    assert!(!store.borrow().has_background());
}
