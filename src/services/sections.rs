//! Section builder.
//!
//! Walks the main container's elements in document order and partitions them
//! into a two-level heading hierarchy:
//!
//! ```text
//! h1 (walk starts after it)
//! ├── h2  → Section
//! │   ├── p / li / ul / ol → section content
//! │   ├── pre              → section code block
//! │   └── h3 → Subsection (receives content until the next h2/h3)
//! └── h2  → Section
//! ```
//!
//! Anything inside `nav`, `footer`, or `header` is ignored. Content that
//! appears before the first `h2` has no owner and is dropped.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::models::{Section, Subsection};
use crate::services::navigator::element_text;

static H1: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h1").expect("static selector is valid"));
static LI: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("li").expect("static selector is valid"));

/// The element kinds the builder reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `h2`
    SectionHeading,
    /// `h3`
    SubsectionHeading,
    /// `p`, `li`
    Paragraph,
    /// `ul`, `ol`
    List,
    /// `pre`
    Code,
    /// `nav`, `footer`, `header`: excluded along with everything inside
    Chrome,
    Other,
}

impl ElementKind {
    pub fn of(el: ElementRef<'_>) -> Self {
        match el.value().name() {
            "h2" => Self::SectionHeading,
            "h3" => Self::SubsectionHeading,
            "p" | "li" => Self::Paragraph,
            "ul" | "ol" => Self::List,
            "pre" => Self::Code,
            "nav" | "footer" | "header" => Self::Chrome,
            _ => Self::Other,
        }
    }
}

/// Which node currently receives content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum Cursor {
    #[default]
    NoSection,
    InSection,
    InSubsection,
}

/// Mutable view of the node receiving content.
struct OpenNode<'a> {
    content: &'a mut String,
    code_blocks: &'a mut Vec<String>,
}

impl OpenNode<'_> {
    fn append_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if !self.content.is_empty() {
            self.content.push('\n');
        }
        self.content.push_str(text);
    }

    fn push_code(&mut self, code: String) {
        if !code.is_empty() {
            self.code_blocks.push(code);
        }
    }
}

/// State carried through the element walk.
#[derive(Debug, Default)]
struct SectionBuilder {
    sections: Vec<Section>,
    cursor: Cursor,
}

impl SectionBuilder {
    fn feed(&mut self, el: ElementRef<'_>) {
        match ElementKind::of(el) {
            ElementKind::SectionHeading => {
                let heading = element_text(el, " ");
                if heading.is_empty() {
                    return;
                }
                self.sections.push(Section::new(heading));
                self.cursor = Cursor::InSection;
            }
            ElementKind::SubsectionHeading => {
                let heading = element_text(el, " ");
                if heading.is_empty() {
                    return;
                }
                // No open section: nothing to attach to.
                let Some(section) = self.sections.last_mut() else {
                    return;
                };
                section.subsections.push(Subsection::new(heading));
                self.cursor = Cursor::InSubsection;
            }
            ElementKind::Paragraph => {
                if let Some(mut node) = self.open_node() {
                    node.append_text(&element_text(el, " "));
                }
            }
            ElementKind::List => {
                let items: Vec<String> = el
                    .select(&LI)
                    .map(|li| element_text(li, " "))
                    .filter(|item| !item.is_empty())
                    .map(|item| format!("- {item}"))
                    .collect();
                if items.is_empty() {
                    return;
                }
                if let Some(mut node) = self.open_node() {
                    node.append_text(&items.join("\n"));
                }
            }
            ElementKind::Code => {
                if let Some(mut node) = self.open_node() {
                    node.push_code(element_text(el, "\n"));
                }
            }
            ElementKind::Chrome | ElementKind::Other => {}
        }
    }

    fn open_node(&mut self) -> Option<OpenNode<'_>> {
        let section = self.sections.last_mut()?;
        match self.cursor {
            Cursor::NoSection => None,
            Cursor::InSection => Some(OpenNode {
                content: &mut section.content,
                code_blocks: &mut section.code_blocks,
            }),
            Cursor::InSubsection => {
                let sub = section.subsections.last_mut()?;
                Some(OpenNode {
                    content: &mut sub.content,
                    code_blocks: &mut sub.code_blocks,
                })
            }
        }
    }
}

/// Whether `el` is, or sits inside, page chrome below `root`.
fn within_chrome(el: ElementRef<'_>, root: ElementRef<'_>) -> bool {
    if ElementKind::of(el) == ElementKind::Chrome {
        return true;
    }
    el.ancestors()
        .take_while(|node| node.id() != root.id())
        .filter_map(ElementRef::wrap)
        .any(|ancestor| ElementKind::of(ancestor) == ElementKind::Chrome)
}

/// Build the raw (uncleaned) section tree for a main container.
///
/// The walk starts after the first `h1` inside `main`, or at the start of
/// `main` when it has none.
pub fn extract_sections(main: ElementRef<'_>) -> Vec<Section> {
    let start = main.select(&H1).next().unwrap_or(main);

    main.descendants()
        .filter_map(ElementRef::wrap)
        .skip_while(|el| el.id() != start.id())
        .skip(1)
        .filter(|el| !within_chrome(*el, main))
        .fold(SectionBuilder::default(), |mut builder, el| {
            builder.feed(el);
            builder
        })
        .sections
}
