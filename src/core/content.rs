/// Inline run of article text. Styling is applied by the page, never here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inline {
    Text(&'static str),
    Em(&'static str),
    Strong(&'static str),
    Code(&'static str),
    Link {
        text: &'static str,
        href: &'static str,
    },
}

pub type Spans = &'static [Inline];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Block {
    Paragraph(Spans),
    Heading(&'static str),
    PullQuote(Spans),
    Divider(Option<&'static str>),
    DebugNote {
        title: &'static str,
        body: Spans,
    },
    Figure {
        key: &'static str,
        caption: Option<&'static str>,
        wide: bool,
    },
    StatGrid(&'static [Stat]),
    References {
        title: &'static str,
        entries: &'static [Spans],
    },
    Footer(&'static [&'static str]),
}

impl Block {
    /// Whether the block fades in on scroll. Dividers and the footer are
    /// always visible.
    #[inline]
    pub fn reveals(&self) -> bool {
        !matches!(self, Block::Divider(_) | Block::Footer(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Hero {
    pub kicker: &'static str,
    pub title: &'static str,
    pub title_emphasis: &'static str,
    pub subtitle: &'static str,
    pub author: &'static str,
    pub author_initial: &'static str,
    pub meta: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct Article {
    pub hero: Hero,
    pub blocks: &'static [Block],
}

impl Article {
    /// Keys of every figure, in reading order.
    pub fn figure_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.blocks.iter().filter_map(|b| match b {
            Block::Figure { key, .. } => Some(*key),
            _ => None,
        })
    }
}
