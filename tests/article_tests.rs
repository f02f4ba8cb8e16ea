// Host-side tests for the article model and hero parallax.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod article {
        include!("../src/core/article.rs");
    }
    pub mod catalog {
        include!("../src/core/catalog.rs");
    }
    pub mod content {
        include!("../src/core/content.rs");
    }
    pub mod hero {
        include!("../src/core/hero.rs");
    }
}

use crate::core::article::ARTICLE;
use crate::core::catalog::{FigureView, ImageCatalog};
use crate::core::content::*;
use crate::core::hero::*;

#[test]
fn every_article_figure_resolves() {
    let catalog = ImageCatalog::standard();
    let keys: Vec<&str> = ARTICLE.figure_keys().collect();
    assert_eq!(keys.len(), 9);
    for key in keys {
        let view = FigureView::resolve(&catalog, key, None, false);
        assert!(view.src.is_some(), "figure {key} has no image");
        assert!(!view.alt.is_empty());
    }
}

#[test]
fn only_dividers_and_footer_skip_the_reveal() {
    assert!(!Block::Divider(None).reveals());
    assert!(!Block::Footer(&["x"]).reveals());
    // a stat grid fades in as one block
    assert!(Block::StatGrid(&[Stat {
        value: "1",
        label: "x"
    }])
    .reveals());
    assert!(Block::Heading("h").reveals());
    assert!(Block::Figure {
        key: "synthetic",
        caption: None,
        wide: false
    }
    .reveals());
}

#[test]
fn article_has_hero_and_closing_blocks() {
    assert!(!ARTICLE.hero.title.is_empty());
    assert_eq!(ARTICLE.hero.author_initial.chars().count(), 1);
    assert!(matches!(ARTICLE.blocks.last(), Some(Block::Footer(_))));
    assert!(ARTICLE
        .blocks
        .iter()
        .any(|b| matches!(b, Block::References { .. })));
    let grids = ARTICLE
        .blocks
        .iter()
        .filter(|b| matches!(b, Block::StatGrid(_)))
        .count();
    assert_eq!(grids, 2);
}

#[test]
fn links_have_targets() {
    let spans = ARTICLE.blocks.iter().flat_map(|b| match b {
        Block::Paragraph(s) | Block::PullQuote(s) => s.to_vec(),
        Block::DebugNote { body, .. } => body.to_vec(),
        Block::References { entries, .. } => entries.iter().flat_map(|e| e.to_vec()).collect(),
        _ => Vec::new(),
    });
    for span in spans {
        if let Inline::Link { text, href } = span {
            assert!(!text.is_empty());
            assert!(href.starts_with("http"), "bad href {href}");
        }
    }
}

#[test]
fn glow_drifts_up_with_scroll() {
    assert_eq!(glow_offset(0.0), 0.0);
    assert!((glow_offset(100.0) + 6.0).abs() < 1e-9);
    assert_eq!(
        glow_transform(100.0),
        format!("translate(-50%,-50%) translateY({}px)", glow_offset(100.0))
    );
}

#[test]
fn overscroll_keeps_glow_centred() {
    assert_eq!(glow_transform(-40.0), "translate(-50%,-50%) translateY(0px)");
}
