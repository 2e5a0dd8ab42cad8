//! Default component catalog.
//!
//! One render function per block kind. Each decodes the node's scalar fields
//! into a typed struct up front (lenient, defaulting on bad data) and builds
//! its markup from the typed form, pulling pre-rendered nested blocks out of
//! the props by field name.

use serde::Deserialize;

use super::output::{Element, RenderResult};
use super::registry::{BlockKind, Registry};
use super::render::Props;

/// Wire the full default catalog into a registry.
pub fn register_defaults(registry: &mut Registry) {
    registry.register(BlockKind::Page, render_page);
    registry.register(BlockKind::Section, render_section);
    registry.register(BlockKind::Grid, render_grid);
    registry.register(BlockKind::Card, render_card);
    registry.register(BlockKind::Hero, render_hero);
    registry.register(BlockKind::Heading, render_heading);
    registry.register(BlockKind::Text, render_text);
    registry.register(BlockKind::Button, render_button);
    registry.register(BlockKind::Image, render_image);
    registry.register(BlockKind::Divider, render_divider);
}

// =============================================================================
// PAGE / CONTAINERS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageFields {
    title: String,
}

/// `page` — top-level container. Children live in the `body` field.
fn render_page(id: &str, props: &Props) -> RenderResult {
    let fields: PageFields = props.fields();
    let mut root = Element::new("main").class("page");
    if !fields.title.is_empty() {
        root = root.child(Element::new("h1").class("page-title").text(&fields.title));
    }
    RenderResult::rendered(id, root.blocks(props.children("body")))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SectionFields {
    heading: String,
}

/// `section` — grouping container with an optional heading. Children live
/// in the `children` field.
fn render_section(id: &str, props: &Props) -> RenderResult {
    let fields: SectionFields = props.fields();
    let mut root = Element::new("section").class("section");
    if !fields.heading.is_empty() {
        root = root.child(Element::new("h2").class("section-heading").text(&fields.heading));
    }
    RenderResult::rendered(id, root.blocks(props.children("children")))
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct GridFields {
    columns: u32,
}

impl Default for GridFields {
    fn default() -> Self {
        Self { columns: 2 }
    }
}

/// `grid` — column layout container. Children live in the `children` field.
fn render_grid(id: &str, props: &Props) -> RenderResult {
    let fields: GridFields = props.fields();
    let columns = fields.columns.clamp(1, 12);
    let root = Element::new("div")
        .class(format!("grid grid-cols-{columns}"))
        .blocks(props.children("children"));
    RenderResult::rendered(id, root)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CardFields {
    title: String,
}

/// `card` — bordered content card. Children live in the `body` field.
fn render_card(id: &str, props: &Props) -> RenderResult {
    let fields: CardFields = props.fields();
    let mut root = Element::new("article").class("card");
    if !fields.title.is_empty() {
        root = root.child(Element::new("h3").class("card-title").text(&fields.title));
    }
    RenderResult::rendered(id, root.blocks(props.children("body")))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HeroFields {
    headline: String,
    subline: String,
    image: String,
}

/// `hero` — page banner with headline, optional subline, optional background
/// image URL, and an optional single `cta` block (typically a button).
fn render_hero(id: &str, props: &Props) -> RenderResult {
    let fields: HeroFields = props.fields();
    let mut root = Element::new("header").class("hero");
    if !fields.image.is_empty() {
        root = root.attr("style", format!("background-image:url({})", fields.image));
    }
    root = root.child(Element::new("h1").class("hero-headline").text(&fields.headline));
    if !fields.subline.is_empty() {
        root = root.child(Element::new("p").class("hero-subline").text(&fields.subline));
    }
    if let Some(cta) = props.child("cta") {
        root = root.blocks([cta]);
    }
    RenderResult::rendered(id, root)
}

// =============================================================================
// LEAF BLOCKS
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(default)]
struct HeadingFields {
    text: String,
    level: u8,
}

impl Default for HeadingFields {
    fn default() -> Self {
        Self { text: String::new(), level: 2 }
    }
}

/// `heading` — `<h1>`..`<h6>`, level clamped into range.
fn render_heading(id: &str, props: &Props) -> RenderResult {
    let fields: HeadingFields = props.fields();
    let tag = match fields.level.clamp(1, 6) {
        1 => "h1",
        3 => "h3",
        4 => "h4",
        5 => "h5",
        6 => "h6",
        _ => "h2",
    };
    RenderResult::rendered(id, Element::new(tag).text(&fields.text))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TextFields {
    text: String,
}

/// `text` — a paragraph of plain text.
fn render_text(id: &str, props: &Props) -> RenderResult {
    let fields: TextFields = props.fields();
    RenderResult::rendered(id, Element::new("p").text(&fields.text))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ButtonFields {
    label: String,
    href: Option<String>,
    style: ButtonStyle,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ButtonStyle {
    #[default]
    Primary,
    Secondary,
    Ghost,
}

impl ButtonStyle {
    fn class(self) -> &'static str {
        match self {
            ButtonStyle::Primary => "btn btn-primary",
            ButtonStyle::Secondary => "btn btn-secondary",
            ButtonStyle::Ghost => "btn btn-ghost",
        }
    }
}

/// `button` — an anchor when `href` is present, a plain button otherwise.
fn render_button(id: &str, props: &Props) -> RenderResult {
    let fields: ButtonFields = props.fields();
    let root = match fields.href {
        Some(href) if !href.is_empty() => Element::new("a")
            .class(fields.style.class())
            .attr("href", href)
            .text(&fields.label),
        _ => Element::new("button")
            .class(fields.style.class())
            .attr("type", "button")
            .text(&fields.label),
    };
    RenderResult::rendered(id, root)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ImageFields {
    src: String,
    alt: String,
}

/// `image` — a void `<img>` tag.
fn render_image(id: &str, props: &Props) -> RenderResult {
    let fields: ImageFields = props.fields();
    let root = Element::new("img")
        .attr("src", fields.src)
        .attr("alt", fields.alt);
    RenderResult::rendered(id, root)
}

/// `divider` — a horizontal rule. No fields.
fn render_divider(id: &str, _props: &Props) -> RenderResult {
    RenderResult::rendered(id, Element::new("hr").class("divider"))
}

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;
