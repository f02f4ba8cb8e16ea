use crate::core::{Article, Block, Hero, ImageCatalog, Inline, Spans, Stat};
use crate::dom;
use crate::error::MountError;
use crate::figure::{self, FigureBinding};
use crate::observer::RevealController;
use crate::theme;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The mounted article. Dropping it removes everything it added to the
/// document and detaches its listeners and observer.
pub struct Page {
    pub canvas: web::HtmlCanvasElement,
    pub glow: web::HtmlElement,
    pub reveals: RevealController,
    root: web::Element,
    stylesheet: web::Element,
    _figures: Vec<FigureBinding>,
}

impl Drop for Page {
    fn drop(&mut self) {
        self.root.remove();
        self.stylesheet.remove();
    }
}

struct Builder<'a> {
    doc: &'a web::Document,
    body: &'a web::Element,
    catalog: &'a ImageCatalog,
    reveals: RevealController,
    figures: Vec<FigureBinding>,
}

pub fn build(
    doc: &web::Document,
    body: &web::Element,
    article: &Article,
    catalog: &ImageCatalog,
) -> Result<Page, MountError> {
    let stylesheet = dom::text_element(doc, "style", "", theme::GLOBAL_CSS)?;
    match doc.head() {
        Some(head) => dom::append(&head, &stylesheet)?,
        None => dom::append(body, &stylesheet)?,
    }

    let root = dom::element(doc, "div", &theme::root_style())?;
    let canvas = dom::element(doc, "canvas", theme::CANVAS_STYLE)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::Dom("canvas element has wrong type".into()))?;
    dom::append(&root, &canvas)?;

    let content = dom::element(doc, "div", theme::CONTENT_STYLE)?;
    let (hero, glow) = build_hero(doc, &article.hero)?;
    dom::append(&content, &hero)?;

    let mut builder = Builder {
        doc,
        body,
        catalog,
        reveals: RevealController::new(),
        figures: Vec::new(),
    };
    let article_el = dom::element(doc, "article", theme::ARTICLE_STYLE)?;
    for block in article.blocks {
        builder.block(&article_el, block)?;
    }
    dom::append(&content, &article_el)?;
    dom::append(&root, &content)?;
    dom::append(body, &root)?;

    log::info!(
        "[page] {} blocks, {} figures",
        article.blocks.len(),
        builder.figures.len()
    );
    Ok(Page {
        canvas,
        glow,
        reveals: builder.reveals,
        root,
        stylesheet,
        _figures: builder.figures,
    })
}

fn build_hero(doc: &web::Document, hero: &Hero) -> Result<(web::Element, web::HtmlElement), MountError> {
    let header = dom::element(doc, "header", theme::HERO_STYLE)?;
    let glow = dom::element(doc, "div", theme::HERO_GLOW_STYLE)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| MountError::Dom("glow element has wrong type".into()))?;
    dom::append(&header, &glow)?;

    let inner = dom::element(doc, "div", theme::HERO_INNER_STYLE)?;
    let kicker = dom::text_element(doc, "div", &theme::hero_kicker_style(), hero.kicker)?;
    dom::append(&inner, &kicker)?;

    let title = dom::element(doc, "h1", &theme::hero_title_style())?;
    dom::append_text(doc, &title, hero.title)?;
    let emphasis = dom::text_element(doc, "em", &theme::hero_emphasis_style(), hero.title_emphasis)?;
    dom::append(&title, &emphasis)?;
    dom::append(&inner, &title)?;

    let subtitle = dom::text_element(doc, "p", &theme::hero_subtitle_style(), hero.subtitle)?;
    dom::append(&inner, &subtitle)?;

    let byline = dom::element(doc, "div", theme::BYLINE_STYLE)?;
    let avatar = dom::text_element(doc, "div", &theme::avatar_style(), hero.author_initial)?;
    dom::append(&byline, &avatar)?;
    let who = dom::element(doc, "div", "text-align:left")?;
    dom::append(&who, &dom::text_element(doc, "div", &theme::author_style(), hero.author)?)?;
    dom::append(&who, &dom::text_element(doc, "div", &theme::author_meta_style(), hero.meta)?)?;
    dom::append(&byline, &who)?;
    dom::append(&inner, &byline)?;
    dom::append(&header, &inner)?;

    let hint = dom::element(doc, "div", theme::SCROLL_HINT_STYLE)?;
    hint.set_inner_html(theme::SCROLL_HINT_SVG);
    dom::append(&header, &hint)?;

    Ok((header, glow))
}

impl<'a> Builder<'a> {
    fn block(&mut self, parent: &web::Element, block: &Block) -> Result<(), MountError> {
        let doc = self.doc;
        let node = match *block {
            Block::Paragraph(spans) => {
                let p = dom::element(doc, "p", &theme::paragraph_style())?;
                spans_into(doc, &p, spans)?;
                p
            }
            Block::Heading(text) => dom::text_element(doc, "h2", &theme::heading_style(), text)?,
            Block::PullQuote(spans) => {
                let q = dom::element(doc, "blockquote", &theme::pull_quote_style())?;
                spans_into(doc, &q, spans)?;
                q
            }
            Block::Divider(label) => divider(doc, label)?,
            Block::DebugNote { title, body } => debug_note(doc, title, body)?,
            Block::Figure { key, caption, wide } => {
                let (el, binding) = figure::build(doc, self.body, self.catalog, key, caption, wide)?;
                self.figures.push(binding);
                el
            }
            Block::StatGrid(stats) => self.stat_grid(stats)?,
            Block::References { title, entries } => references(doc, title, entries)?,
            Block::Footer(lines) => footer(doc, lines)?,
        };
        if block.reveals() {
            let wrapper = self.reveals.wrap(doc, &node, 0.0)?;
            dom::append(parent, &wrapper)
        } else {
            dom::append(parent, &node)
        }
    }

    fn stat_grid(&self, stats: &[Stat]) -> Result<web::Element, MountError> {
        let doc = self.doc;
        let grid = dom::element(doc, "div", &theme::stat_grid_style(stats.len()))?;
        for stat in stats {
            let card = dom::element(doc, "div", &theme::stat_card_style())?;
            dom::append(&card, &dom::text_element(doc, "div", &theme::stat_value_style(), stat.value)?)?;
            dom::append(&card, &dom::text_element(doc, "div", &theme::stat_label_style(), stat.label)?)?;
            dom::append(&grid, &card)?;
        }
        Ok(grid)
    }
}

fn spans_into(doc: &web::Document, parent: &web::Element, spans: Spans) -> Result<(), MountError> {
    for span in spans {
        match *span {
            Inline::Text(text) => dom::append_text(doc, parent, text)?,
            Inline::Em(text) => dom::append(parent, &dom::text_element(doc, "em", "", text)?)?,
            Inline::Strong(text) => {
                dom::append(parent, &dom::text_element(doc, "strong", &theme::strong_style(), text)?)?
            }
            Inline::Code(text) => {
                dom::append(parent, &dom::text_element(doc, "code", &theme::code_style(), text)?)?
            }
            Inline::Link { text, href } => {
                let a = dom::text_element(doc, "a", &theme::link_style(), text)?;
                a.set_attribute("href", href).map_err(dom::js_err)?;
                dom::append(parent, &a)?
            }
        }
    }
    Ok(())
}

fn divider(doc: &web::Document, label: Option<&str>) -> Result<web::Element, MountError> {
    let row = dom::element(doc, "div", theme::DIVIDER_STYLE)?;
    dom::append(&row, &dom::element(doc, "div", theme::DIVIDER_RULE_STYLE)?)?;
    if let Some(label) = label {
        dom::append(&row, &dom::text_element(doc, "span", &theme::divider_label_style(), label)?)?;
    }
    dom::append(&row, &dom::element(doc, "div", theme::DIVIDER_RULE_STYLE)?)?;
    Ok(row)
}

fn debug_note(doc: &web::Document, title: &str, body: Spans) -> Result<web::Element, MountError> {
    let note = dom::element(doc, "div", theme::DEBUG_NOTE_STYLE)?;
    let head = dom::element(doc, "div", &theme::debug_note_title_style())?;
    dom::append(&head, &dom::text_element(doc, "span", "font-size:.85rem", theme::DEBUG_NOTE_ICON)?)?;
    dom::append_text(doc, &head, " ")?;
    dom::append_text(doc, &head, title)?;
    dom::append(&note, &head)?;
    let text = dom::element(doc, "div", &theme::debug_note_body_style())?;
    spans_into(doc, &text, body)?;
    dom::append(&note, &text)?;
    Ok(note)
}

fn references(doc: &web::Document, title: &str, entries: &[Spans]) -> Result<web::Element, MountError> {
    let card = dom::element(doc, "div", theme::REFERENCES_STYLE)?;
    dom::append(&card, &dom::text_element(doc, "div", &theme::references_title_style(), title)?)?;
    let list = dom::element(doc, "div", &theme::references_body_style())?;
    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            dom::append(&list, &dom::element(doc, "br", "")?)?;
        }
        spans_into(doc, &list, entry)?;
    }
    dom::append(&card, &list)?;
    Ok(card)
}

fn footer(doc: &web::Document, lines: &[&str]) -> Result<web::Element, MountError> {
    let el = dom::element(doc, "div", &theme::footer_style())?;
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            dom::append(&el, &dom::element(doc, "br", "")?)?;
        }
        dom::append_text(doc, &el, line)?;
    }
    Ok(el)
}
