//! Tag vocabulary and element catalogs.
//!
//! `Tag` is a closed enumeration of the HTML tag names this crate knows
//! about. Elements whose name is outside the vocabulary carry `None` and
//! are treated as plain inline elements everywhere.
//!
//! The catalogs drive the indenting renderer: arrays for iteration and
//! `HashSet`s for O(1) lookup.

use std::collections::HashSet;
use std::fmt;
use std::sync::LazyLock;

macro_rules! tags {
    ($($variant:ident => $name:literal,)*) => {
        /// A known HTML tag name.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Tag {
            $(
                #[doc = concat!("`<", $name, ">`")]
                $variant,
            )*
        }

        impl Tag {
            /// Look up a lowercase tag name.
            ///
            /// The lookup is case-sensitive; parsers hand over lowercase names.
            #[must_use]
            pub fn from_name(name: &str) -> Option<Tag> {
                match name {
                    $($name => Some(Tag::$variant),)*
                    _ => None,
                }
            }

            /// The lowercase tag name.
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Tag::$variant => $name,)*
                }
            }
        }
    };
}

tags! {
    A => "a",
    Abbr => "abbr",
    Address => "address",
    Area => "area",
    Article => "article",
    Aside => "aside",
    Audio => "audio",
    B => "b",
    Base => "base",
    Bdi => "bdi",
    Bdo => "bdo",
    Blockquote => "blockquote",
    Body => "body",
    Br => "br",
    Button => "button",
    Canvas => "canvas",
    Caption => "caption",
    Center => "center",
    Cite => "cite",
    Code => "code",
    Col => "col",
    Colgroup => "colgroup",
    Data => "data",
    Datalist => "datalist",
    Dd => "dd",
    Del => "del",
    Details => "details",
    Dfn => "dfn",
    Dialog => "dialog",
    Div => "div",
    Dl => "dl",
    Dt => "dt",
    Em => "em",
    Embed => "embed",
    Fieldset => "fieldset",
    Figcaption => "figcaption",
    Figure => "figure",
    Font => "font",
    Footer => "footer",
    Form => "form",
    Frame => "frame",
    Frameset => "frameset",
    H1 => "h1",
    H2 => "h2",
    H3 => "h3",
    H4 => "h4",
    H5 => "h5",
    H6 => "h6",
    Head => "head",
    Header => "header",
    Hgroup => "hgroup",
    Hr => "hr",
    Html => "html",
    I => "i",
    Iframe => "iframe",
    Img => "img",
    Input => "input",
    Ins => "ins",
    Kbd => "kbd",
    Keygen => "keygen",
    Label => "label",
    Legend => "legend",
    Li => "li",
    Link => "link",
    Listing => "listing",
    Main => "main",
    Map => "map",
    Mark => "mark",
    Math => "math",
    Menu => "menu",
    Meta => "meta",
    Meter => "meter",
    Nav => "nav",
    Nobr => "nobr",
    Noembed => "noembed",
    Noframes => "noframes",
    Noscript => "noscript",
    Object => "object",
    Ol => "ol",
    Optgroup => "optgroup",
    Option => "option",
    Output => "output",
    P => "p",
    Param => "param",
    Picture => "picture",
    Plaintext => "plaintext",
    Pre => "pre",
    Progress => "progress",
    Q => "q",
    Rp => "rp",
    Rt => "rt",
    Ruby => "ruby",
    S => "s",
    Samp => "samp",
    Script => "script",
    Section => "section",
    Select => "select",
    Slot => "slot",
    Small => "small",
    Source => "source",
    Span => "span",
    Strike => "strike",
    Strong => "strong",
    Style => "style",
    Sub => "sub",
    Summary => "summary",
    Sup => "sup",
    Svg => "svg",
    Table => "table",
    Tbody => "tbody",
    Td => "td",
    Template => "template",
    Textarea => "textarea",
    Tfoot => "tfoot",
    Th => "th",
    Thead => "thead",
    Time => "time",
    Title => "title",
    Tr => "tr",
    Track => "track",
    Tt => "tt",
    U => "u",
    Ul => "ul",
    Var => "var",
    Video => "video",
    Wbr => "wbr",
    Xmp => "xmp",
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// === Catalogs (arrays for iteration) ===

/// Tags that sit on their own lines when indented.
///
/// `hr` and `meta` are also void.
pub static BLOCK_TAGS: [Tag; 37] = [
    Tag::Address, Tag::Article, Tag::Aside, Tag::Blockquote, Tag::Body,
    Tag::Details, Tag::Dialog, Tag::Dd, Tag::Div, Tag::Dl, Tag::Dt,
    Tag::Fieldset, Tag::Figcaption, Tag::Figure, Tag::Footer, Tag::Form,
    Tag::H1, Tag::H2, Tag::H3, Tag::H4, Tag::H5, Tag::H6, Tag::Head, Tag::Header, Tag::Hr, Tag::Html,
    Tag::Li, Tag::Main, Tag::Meta, Tag::Nav, Tag::Ol, Tag::P, Tag::Pre,
    Tag::Section, Tag::Summary, Tag::Table, Tag::Ul,
];

/// Tags that never have children or a closing tag.
pub static VOID_TAGS: [Tag; 15] = [
    Tag::Area, Tag::Base, Tag::Br, Tag::Col, Tag::Embed, Tag::Hr,
    Tag::Img, Tag::Input, Tag::Keygen, Tag::Link, Tag::Meta,
    Tag::Param, Tag::Source, Tag::Track, Tag::Wbr,
];

/// Tags whose children are raw text, passed through without escaping or indentation.
pub static LITERAL_CONTENT_TAGS: [Tag; 8] = [
    Tag::Iframe, Tag::Noembed, Tag::Noframes, Tag::Noscript,
    Tag::Plaintext, Tag::Script, Tag::Style, Tag::Xmp,
];

// === Catalog Sets (HashSets for O(1) lookup) ===

/// `BLOCK_TAGS` as a `HashSet`
pub static BLOCK_TAG_SET: LazyLock<HashSet<Tag>> = LazyLock::new(|| BLOCK_TAGS.into_iter().collect());

/// `VOID_TAGS` as a `HashSet`
pub static VOID_TAG_SET: LazyLock<HashSet<Tag>> = LazyLock::new(|| VOID_TAGS.into_iter().collect());

/// `LITERAL_CONTENT_TAGS` as a `HashSet`
pub static LITERAL_CONTENT_TAG_SET: LazyLock<HashSet<Tag>> =
    LazyLock::new(|| LITERAL_CONTENT_TAGS.into_iter().collect());

/// Check if a tag forces line breaks around itself and its content.
#[inline]
#[must_use]
pub fn is_block(tag: Option<Tag>) -> bool {
    tag.is_some_and(|t| BLOCK_TAG_SET.contains(&t))
}

/// Check if a tag is void (no children, no closing tag).
#[inline]
#[must_use]
pub fn is_void(tag: Option<Tag>) -> bool {
    tag.is_some_and(|t| VOID_TAG_SET.contains(&t))
}

/// Check if a tag's children are emitted verbatim.
#[inline]
#[must_use]
pub fn is_literal_content(tag: Option<Tag>) -> bool {
    tag.is_some_and(|t| LITERAL_CONTENT_TAG_SET.contains(&t))
}
