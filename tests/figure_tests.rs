// Host-side tests for figure resolution and lightbox state.

#![allow(dead_code)]
mod core {
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod lightbox {
        include!("../src/core/lightbox.rs");
    }
}

use crate::core::catalog::*;
use crate::core::lightbox::*;

#[test]
fn lightbox_starts_closed_and_toggles() {
    let mut lb = Lightbox::new();
    assert_eq!(lb.state(), LightboxState::Closed);
    assert!(lb.open());
    assert!(lb.is_open());
    assert!(!lb.open(), "opening twice changes nothing");
    assert!(lb.close());
    assert!(!lb.close());
    assert!(!lb.is_open());
}

#[test]
fn lightboxes_are_independent() {
    let mut a = Lightbox::new();
    let b = Lightbox::new();
    a.open();
    assert!(a.is_open());
    assert!(!b.is_open());
}

#[test]
fn standard_catalog_has_every_figure() {
    let catalog = ImageCatalog::standard();
    assert_eq!(catalog.len(), 9);
    let img = catalog.get("hippocampus").unwrap();
    assert_eq!(img.src, "assets/figures/hippocampus.png");
    assert_eq!(img.label, "Hippocampus Embeddings");
}

#[test]
fn missing_key_has_no_source_and_no_caption() {
    let catalog = ImageCatalog::standard();
    let view = FigureView::resolve(&catalog, "nonexistent", None, false);
    assert_eq!(view.src, None);
    assert_eq!(view.caption, None);
    assert_eq!(view.alt, "");
    assert!(!view.wide);
}

#[test]
fn missing_key_keeps_an_explicit_caption() {
    let catalog = ImageCatalog::new();
    assert!(catalog.is_empty());
    let view = FigureView::resolve(&catalog, "nonexistent", Some("Fig. 1"), true);
    assert_eq!(view.src, None);
    assert_eq!(view.caption, Some("Fig. 1"));
    assert_eq!(view.alt, "Fig. 1");
    assert!(view.wide);
}

#[test]
fn alt_prefers_caption_then_label() {
    let catalog = ImageCatalog::standard();
    let captioned = FigureView::resolve(&catalog, "decoding", Some("Position decoding"), false);
    assert_eq!(captioned.alt, "Position decoding");
    assert_eq!(captioned.src, Some("assets/figures/decoding.png"));

    let bare = FigureView::resolve(&catalog, "decoding", None, false);
    assert_eq!(bare.alt, "Decoding Performance");
    assert_eq!(bare.caption, None);

    let empty = FigureView::resolve(&catalog, "decoding", Some(""), false);
    assert_eq!(empty.caption, None);
    assert_eq!(empty.alt, "Decoding Performance");
}

#[test]
fn inserted_entries_override() {
    let mut catalog = ImageCatalog::standard();
    catalog.insert(
        "circular",
        ImageRef {
            src: "alt/circular.webp",
            label: "Circle",
        },
    );
    assert_eq!(catalog.len(), 9);
    assert_eq!(catalog.get("circular").unwrap().src, "alt/circular.webp");
}
