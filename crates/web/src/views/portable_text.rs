//! Renders portable text blocks to HTML.
//!
//! Consecutive list items are grouped into one `<ul>` / `<ol>`. Blocks that
//! are not text (embedded images, custom objects) are skipped.

use folio_content::models::{PortableTextBlock, Span};
use maud::{html, Markup};

use super::links::{is_external, safe_href};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Number,
}

impl ListKind {
    fn of(block: &PortableTextBlock) -> Option<Self> {
        match block.list_item.as_deref()? {
            "number" => Some(ListKind::Number),
            _ => Some(ListKind::Bullet),
        }
    }
}

pub fn render(blocks: &[PortableTextBlock]) -> Markup {
    let mut groups: Vec<(Option<ListKind>, Vec<&PortableTextBlock>)> = Vec::new();
    for block in blocks.iter().filter(|b| b.is_text_block()) {
        let kind = ListKind::of(block);
        match groups.last_mut() {
            Some((Some(current), items)) if kind == Some(*current) => items.push(block),
            _ => groups.push((kind, vec![block])),
        }
    }

    html! {
        @for (kind, items) in &groups {
            @match kind {
                Some(ListKind::Bullet) => {
                    ul { @for item in items { li { (spans(item)) } } }
                }
                Some(ListKind::Number) => {
                    ol { @for item in items { li { (spans(item)) } } }
                }
                None => {
                    @for block in items { (text_block(block)) }
                }
            }
        }
    }
}

fn text_block(block: &PortableTextBlock) -> Markup {
    let inner = spans(block);
    html! {
        @match block.style() {
            "h1" => { h1 { (inner) } }
            "h2" => { h2 { (inner) } }
            "h3" => { h3 { (inner) } }
            "h4" => { h4 { (inner) } }
            "h5" => { h5 { (inner) } }
            "h6" => { h6 { (inner) } }
            "blockquote" => { blockquote { (inner) } }
            _ => { p { (inner) } }
        }
    }
}

fn spans(block: &PortableTextBlock) -> Markup {
    html! {
        @for span in &block.children {
            (marked(block, span, &span.marks))
        }
    }
}

/// Wrap `span` in its marks, outermost first.
fn marked(block: &PortableTextBlock, span: &Span, marks: &[String]) -> Markup {
    let Some((mark, rest)) = marks.split_first() else {
        return text(&span.text);
    };
    let inner = marked(block, span, rest);

    match mark.as_str() {
        "strong" => html! { strong { (inner) } },
        "em" => html! { em { (inner) } },
        "code" => html! { code { (inner) } },
        "underline" => html! { u { (inner) } },
        "strike-through" => html! { s { (inner) } },
        key => match block
            .mark_def(key)
            .and_then(|def| def.href.as_deref())
            .and_then(safe_href)
        {
            Some(href) if is_external(href) => html! {
                a href=(href) target="_blank" rel="noopener noreferrer" { (inner) }
            },
            Some(href) => html! { a href=(href) { (inner) } },
            None => inner,
        },
    }
}

fn text(value: &str) -> Markup {
    html! {
        @for (i, line) in value.split('\n').enumerate() {
            @if i > 0 { br; }
            (line)
        }
    }
}
