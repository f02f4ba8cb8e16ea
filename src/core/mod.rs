pub mod article;
pub mod catalog;
pub mod content;
pub mod field;
pub mod hero;
pub mod lifecycle;
pub mod lightbox;
pub mod reveal;
pub mod stats;

pub use catalog::{FigureView, ImageCatalog};
pub use content::{Article, Block, Hero, Inline, Spans, Stat};
pub use field::{FieldConfig, ParticleField, Surface, Viewport};
pub use lifecycle::{FieldLoop, FrameHandle, FrameScheduler, ListenerId, ResizeEvents};
pub use lightbox::Lightbox;
pub use reveal::{RevealSet, Visibility};
pub use stats::FrameStats;
