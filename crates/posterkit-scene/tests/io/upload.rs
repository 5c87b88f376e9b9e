use posterkit_scene::upload::decode;
use posterkit_scene::{
    ElementType, SceneStore, Size, UploadApplied, UploadBlob, UploadCoordinator, UploadError,
    UploadTarget,
};
use std::io::Cursor;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = image::RgbaImage::new(width, height);
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("encode png");
    bytes
}

#[tokio::test]
async fn test_first_upload_becomes_background() {
    let mut store = SceneStore::new();
    let mut coordinator = UploadCoordinator::new();

    let pending = coordinator
        .submit(&store, UploadBlob::new("image/png", png_bytes(64, 32)))
        .expect("accepted");
    assert_eq!(pending.target, UploadTarget::Background);

    let decoded = decode(pending.blob).await;
    let applied = coordinator
        .complete(&mut store, pending.target, decoded)
        .expect("applied");
    assert_eq!(applied, UploadApplied::Background);

    let background = store.background().expect("background");
    assert_eq!(background.original_size, Size::new(64.0, 32.0));
    assert!(background.src.starts_with("data:image/png;base64,"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_concurrent_first_uploads_yield_one_background() {
    let mut store = SceneStore::new();
    let mut coordinator = UploadCoordinator::new();

    let first = coordinator
        .submit(&store, UploadBlob::new("image/png", png_bytes(10, 10)))
        .unwrap();
    let second = coordinator
        .submit(&store, UploadBlob::new("image/png", png_bytes(20, 10)))
        .unwrap();
    assert_eq!(first.target, UploadTarget::Background);
    assert_eq!(second.target, UploadTarget::Layer);

    let (a, b) = tokio::join!(decode(first.blob), decode(second.blob));
    // Completion order is the reverse of submission
    let layer = coordinator.complete(&mut store, second.target, b).unwrap();
    let background = coordinator.complete(&mut store, first.target, a).unwrap();

    assert!(matches!(layer, UploadApplied::Layer(_)));
    assert_eq!(background, UploadApplied::Background);
    assert_eq!(store.background().unwrap().original_size, Size::new(10.0, 10.0));
    assert_eq!(store.len(), 1);
    assert_eq!(store.elements()[0].element_type(), ElementType::Image);
}

#[tokio::test]
async fn test_failed_background_releases_claim() {
    let mut store = SceneStore::new();
    let mut coordinator = UploadCoordinator::new();

    let broken = coordinator
        .submit(&store, UploadBlob::new("image/png", b"garbage".to_vec()))
        .unwrap();
    let result = decode(broken.blob).await;
    let err = coordinator
        .complete(&mut store, broken.target, result)
        .unwrap_err();
    assert!(matches!(err, UploadError::Decode(_)));
    assert!(!store.has_background());
    assert!(!coordinator.background_claimed());

    let retry = coordinator
        .submit(&store, UploadBlob::new("image/png", png_bytes(8, 8)))
        .unwrap();
    assert_eq!(retry.target, UploadTarget::Background);
}

#[tokio::test]
async fn test_layer_upload_is_fitted_and_selected() {
    let mut store = SceneStore::new();
    store.set_background("bg.png", 800.0, 600.0);
    let mut coordinator = UploadCoordinator::new();

    let pending = coordinator
        .submit(&store, UploadBlob::new("image/png", png_bytes(1600, 400)))
        .unwrap();
    assert_eq!(pending.target, UploadTarget::Layer);
    let decoded = decode(pending.blob).await;
    let UploadApplied::Layer(id) = coordinator
        .complete(&mut store, pending.target, decoded)
        .unwrap()
    else {
        panic!("expected an image layer");
    };

    let element = store.element(id).unwrap();
    assert_eq!(element.size, Size::new(400.0, 100.0));
    assert_eq!(store.selected_id(), Some(id));
}
