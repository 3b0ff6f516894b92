use xpoz_core::carousel::{Carousel, CarouselConfig};
use xpoz_core::gallery::GalleryList;
use xpoz_model::asset::Asset;
use xpoz_model::geometry::Size;
use xpoz_model::ids::AssetUuid;

fn assets(keys: &[&str]) -> Vec<Asset> {
    keys.iter()
        .map(|k| Asset::photo(AssetUuid::new(*k).unwrap(), 3000, 2000))
        .collect()
}

fn order(gallery: &GalleryList<Asset>) -> Vec<String> {
    gallery.iter().map(|a| a.uuid.to_string()).collect()
}

#[test]
fn forward_and_backward_walks_mirror_each_other() {
    let mut gallery = GalleryList::new();
    gallery
        .append(assets(&["c", "d"]))
        .prepend(assets(&["a", "b"]))
        .append(assets(&["e"]));

    let forward: Vec<_> = gallery.iter_forward().map(|n| n.item().uuid.clone()).collect();
    let mut backward: Vec<_> = gallery.iter_backward().map(|n| n.item().uuid.clone()).collect();
    backward.reverse();

    assert_eq!(forward, backward);
    assert_eq!(order(&gallery), ["a", "b", "c", "d", "e"]);
    assert!(gallery.first().unwrap().prev().is_none());
    assert!(gallery.last().unwrap().next().is_none());
}

#[test]
fn prepend_batch_with_repeats_inserts_each_key_once() {
    let mut gallery = GalleryList::new();
    gallery.append(assets(&["x"]));
    gallery.prepend(assets(&["a", "b", "a", "x"]));

    assert_eq!(gallery.size(), 3);
    assert_eq!(order(&gallery), ["b", "a", "x"].map(String::from));
}

#[test]
fn stepping_through_a_long_gallery_keeps_slides_contiguous() {
    let mut gallery = GalleryList::new();
    gallery.append(assets(&["a", "b", "c", "d", "e", "f", "g"]));

    let viewport = Size::new(800.0, 600.0);
    let mut carousel = Carousel::new(CarouselConfig::default(), viewport);
    carousel.show(0, &gallery);

    let stride = 820.0;
    while carousel.next(&gallery) {
        let index = carousel.index();
        let current = carousel.current_slide().x;
        assert_eq!(current, index as f64 * stride);
        if index + 1 < gallery.size() {
            assert_eq!(carousel.slide_for(index + 1).x - current, stride);
        }
        assert_eq!(current - carousel.slide_for(index - 1).x, stride);
        assert_eq!(carousel.offset(), -current);
    }
    assert_eq!(carousel.index(), 6);
}
