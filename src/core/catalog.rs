use fnv::FnvHashMap;

/// A displayable image and its default label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageRef {
    pub src: &'static str,
    pub label: &'static str,
}

/// Read-only lookup from a short logical key to an image.
#[derive(Clone, Debug, Default)]
pub struct ImageCatalog {
    entries: FnvHashMap<&'static str, ImageRef>,
}

// Figures of the article, in reading order
const STANDARD_FIGURES: [(&str, &str, &str); 9] = [
    (
        "synthetic",
        "assets/figures/synthetic.png",
        "Synthetic Latent Recovery",
    ),
    (
        "reconstruction",
        "assets/figures/reconstruction.png",
        "Reconstruction Scores",
    ),
    (
        "hippocampus",
        "assets/figures/hippocampus.png",
        "Hippocampus Embeddings",
    ),
    (
        "decoding",
        "assets/figures/decoding.png",
        "Decoding Performance",
    ),
    (
        "trajectory",
        "assets/figures/trajectory.png",
        "Decoded Trajectory",
    ),
    (
        "consistency",
        "assets/figures/consistency.png",
        "Cross-Subject Consistency",
    ),
    (
        "persistence",
        "assets/figures/persistence.png",
        "Persistence Diagrams",
    ),
    (
        "lifespans",
        "assets/figures/lifespans.png",
        "Cohomology Lifespans",
    ),
    (
        "circular",
        "assets/figures/circular.png",
        "Circular Coordinates",
    ),
];

impl ImageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The catalog the article is written against.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        for (key, src, label) in STANDARD_FIGURES {
            catalog.insert(key, ImageRef { src, label });
        }
        catalog
    }

    pub fn insert(&mut self, key: &'static str, image: ImageRef) {
        self.entries.insert(key, image);
    }

    #[inline]
    pub fn get(&self, key: &str) -> Option<&ImageRef> {
        self.entries.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Everything a figure needs to render, resolved against a catalog.
///
/// An unknown key resolves to no source and no label instead of failing;
/// only an explicit caption is ever shown under the thumbnail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FigureView<'a> {
    pub src: Option<&'a str>,
    pub alt: &'a str,
    pub caption: Option<&'a str>,
    pub wide: bool,
}

impl<'a> FigureView<'a> {
    pub fn resolve(
        catalog: &'a ImageCatalog,
        key: &str,
        caption: Option<&'a str>,
        wide: bool,
    ) -> Self {
        let image = catalog.get(key);
        if image.is_none() {
            log::debug!("[figure] no image for key {:?}", key);
        }
        let caption = caption.filter(|c| !c.is_empty());
        let alt = caption
            .or_else(|| image.map(|i| i.label))
            .unwrap_or("");
        Self {
            src: image.map(|i| i.src),
            alt,
            caption,
            wide,
        }
    }
}
