//! Canonical markup serializer.
//!
//! A `Serializer` is a per-element accumulator. It starts in the simple
//! layout, where attributes collect into one space-separated line:
//!
//! ```text
//! <rect id="r1" width=10 height=20></rect>
//! ```
//!
//! The first nested block or child switches it, irreversibly, to the complex
//! layout. Every attribute collected so far is re-emitted on its own line,
//! and everything after that also gets a line, one level deeper than the tag:
//!
//! ```text
//! <g>
//! 	id="root"
//! 	<rect id="r1" width=10 height=20></rect>
//! </g>
//! ```

use log::{debug, trace};

use super::registry::tag_name;
use super::serializable::{SerializableAtom, SerializableBlock, SerializableOption};
use crate::config::SerializeOptions;

/// Accumulates the attributes of one element at a given nesting level.
#[derive(Debug)]
pub struct Serializer<'o> {
    level: usize,
    options: &'o SerializeOptions,
    /// Simple-layout attributes, joined with spaces
    blocks: Vec<String>,
    simple_len: usize,
    /// Complex-layout lines
    text: String,
    children: String,
    complex: bool,
}

impl<'o> Serializer<'o> {
    /// Serialize a block and its descendants with the default options.
    ///
    /// See [`Serializer::serialize_with`] for how untagged blocks are written.
    pub fn serialize(block: &dyn SerializableBlock) -> String {
        Self::serialize_with(block, &SerializeOptions::default())
    }

    /// Serialize a block and its descendants.
    ///
    /// Returns an empty string when the block is an element whose kind has
    /// no tag name. A block without element identity is written with an
    /// empty tag, e.g. `< size=2></>`.
    pub fn serialize_with(block: &dyn SerializableBlock, options: &SerializeOptions) -> String {
        let mut markup = Self::serialize_at(block, 0, options);
        if options.trailing_newline && !markup.is_empty() {
            markup.push('\n');
        }
        markup
    }

    fn serialize_at(block: &dyn SerializableBlock, level: usize, options: &SerializeOptions) -> String {
        let mut serializer = Serializer::new(level, options);
        let mut tag = "";
        if let Some(element) = block.as_element() {
            match tag_name(element.kind()) {
                Some(name) => tag = name,
                None => {
                    debug!(
                        "skipping {:?} element {:?}: no tag name",
                        element.kind(),
                        element.id().unwrap_or_default()
                    );
                    return String::new();
                }
            }
            serializer.add("id", element.id().unwrap_or_default());
        }
        block.serialize_into(&mut serializer);
        serializer.finish(tag)
    }

    fn new(level: usize, options: &'o SerializeOptions) -> Self {
        Self {
            level,
            options,
            blocks: Vec::new(),
            simple_len: 0,
            text: String::new(),
            children: String::new(),
            complex: false,
        }
    }

    /// Always emits `key=value`, quoting textual values.
    pub fn add<A: SerializableAtom + ?Sized>(&mut self, key: &str, value: &A) -> &mut Self {
        let raw = value.atom();
        if value.needs_quotes() {
            self.add_pair(key, &quote(&raw))
        } else {
            self.add_pair(key, &raw)
        }
    }

    /// Emits `key=value` when a value is present.
    pub fn add_optional<A: SerializableAtom + ?Sized>(&mut self, key: &str, value: Option<&A>) -> &mut Self {
        if let Some(value) = value {
            self.add(key, value);
        }
        self
    }

    /// Emits `key="value"` only when `value` differs from `default`.
    pub fn add_default<A: SerializableAtom + PartialEq + ?Sized>(
        &mut self,
        key: &str,
        value: &A,
        default: &A,
    ) -> &mut Self {
        if value != default {
            self.add_pair(key, &quote(&value.atom()));
        }
        self
    }

    /// Emits `key="value"` only when the option is not at its default.
    pub fn add_option<O: SerializableOption + ?Sized>(&mut self, key: &str, value: &O) -> &mut Self {
        if !value.is_default() {
            self.add_pair(key, &quote(&value.option_value()));
        }
        self
    }

    /// Emits `key=<markup>` for a nested block, switching to the complex layout.
    ///
    /// Nothing is emitted when the block is absent or has no tag name.
    pub fn add_block(&mut self, key: &str, value: Option<&dyn SerializableBlock>) -> &mut Self {
        let Some(value) = value else { return self };
        let markup = Self::serialize_at(value, self.level + 1, self.options);
        if !markup.is_empty() {
            self.make_complex();
            self.add_pair(key, &markup);
        }
        self
    }

    /// Emits `key=[ ... ]` with one comma-separated item per line.
    pub fn add_blocks<B: SerializableBlock>(&mut self, key: &str, values: &[B]) -> &mut Self {
        let items: Vec<String> = values
            .iter()
            .map(|v| Self::serialize_at(v, self.level + 2, self.options))
            .filter(|markup| !markup.is_empty())
            .collect();
        if items.is_empty() {
            return self;
        }
        self.make_complex();
        let item_indent = self.indent(self.level + 2);
        let mut list = String::from("[");
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                list.push(',');
            }
            list.push('\n');
            list.push_str(&item_indent);
            list.push_str(item);
        }
        list.push('\n');
        list.push_str(&self.indent(self.level + 1));
        list.push(']');
        self.add_pair(key, &list)
    }

    /// Registers the ordered child list, rendered as nested elements after
    /// the attributes.
    pub fn add_children<B: SerializableBlock>(&mut self, nodes: &[B]) -> &mut Self {
        let indent = self.indent(self.level + 1);
        let mut rendered = false;
        for node in nodes {
            let markup = Self::serialize_at(node, self.level + 1, self.options);
            if markup.is_empty() {
                continue;
            }
            rendered = true;
            self.children.push('\n');
            self.children.push_str(&indent);
            self.children.push_str(&markup);
        }
        if rendered {
            self.make_complex();
        }
        self
    }

    fn add_pair(&mut self, key: &str, value: &str) -> &mut Self {
        self.push_block(format!("{}={}", key, value));
        self
    }

    fn push_block(&mut self, block: String) {
        if self.complex {
            self.push_line(&block);
            return;
        }
        if !self.blocks.is_empty() {
            self.simple_len += 1;
        }
        self.simple_len += block.len();
        self.blocks.push(block);
        if let Some(max) = self.options.max_simple_len {
            if self.simple_len > max {
                self.make_complex();
            }
        }
    }

    fn push_line(&mut self, line: &str) {
        self.text.push('\n');
        self.text.push_str(&self.indent(self.level + 1));
        self.text.push_str(line);
    }

    fn make_complex(&mut self) {
        if self.complex {
            return;
        }
        trace!("level {} switched to the multi-line layout", self.level);
        self.complex = true;
        for block in std::mem::take(&mut self.blocks) {
            self.push_line(&block);
        }
        self.simple_len = 0;
    }

    fn finish(self, tag: &str) -> String {
        if self.complex {
            format!(
                "<{tag}>{}{}\n{}</{tag}>",
                self.text,
                self.children,
                self.indent(self.level),
                tag = tag
            )
        } else if self.blocks.is_empty() {
            format!("<{tag}></{tag}>", tag = tag)
        } else {
            format!("<{tag} {}></{tag}>", self.blocks.join(" "), tag = tag)
        }
    }

    fn indent(&self, level: usize) -> String {
        self.options.indent.repeat(level)
    }
}

fn quote(raw: &str) -> String {
    format!("\"{}\"", escape_xml(raw))
}

/// Escape text for use inside a quoted attribute value.
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialize::serializable_enum;

    serializable_enum! {
        enum Finish {
            Matte => "matte",
            Gloss => "gloss",
        }
    }

    /// A block without identity, so it renders with an empty tag.
    struct Swatch {
        size: f64,
        label: &'static str,
        finish: Finish,
        inner: Option<Box<Swatch>>,
        samples: Vec<Swatch>,
    }

    impl Swatch {
        fn plain(size: f64) -> Self {
            Swatch {
                size,
                label: "s",
                finish: Finish::Matte,
                inner: None,
                samples: Vec::new(),
            }
        }
    }

    impl SerializableBlock for Swatch {
        fn serialize_into(&self, serializer: &mut Serializer<'_>) {
            serializer
                .add("size", &self.size)
                .add("label", self.label)
                .add_option("finish", &self.finish)
                .add_block("inner", self.inner.as_deref().map(|s| s as &dyn SerializableBlock))
                .add_blocks("samples", &self.samples);
        }
    }

    #[test]
    fn test_simple_layout_is_single_line() {
        let out = Serializer::serialize(&Swatch::plain(2.0));
        assert_eq!(out, "< size=2 label=\"s\"></>\n");
    }

    #[test]
    fn test_option_emitted_only_when_not_default() {
        let mut swatch = Swatch::plain(1.0);
        swatch.finish = Finish::Gloss;
        let out = Serializer::serialize(&swatch);
        assert_eq!(out, "< size=1 label=\"s\" finish=\"gloss\"></>\n");
    }

    #[test]
    fn test_nested_block_reflows_earlier_attributes() {
        let mut swatch = Swatch::plain(1.0);
        swatch.inner = Some(Box::new(Swatch::plain(3.0)));
        let out = Serializer::serialize(&swatch);
        assert_eq!(
            out,
            "<>\n\tsize=1\n\tlabel=\"s\"\n\tinner=< size=3 label=\"s\"></>\n</>\n"
        );
    }

    #[test]
    fn test_block_list_layout() {
        let mut swatch = Swatch::plain(1.0);
        swatch.samples = vec![Swatch::plain(4.0), Swatch::plain(5.0)];
        let out = Serializer::serialize(&swatch);
        assert_eq!(
            out,
            "<>\n\tsize=1\n\tlabel=\"s\"\n\tsamples=[\n\t\t< size=4 label=\"s\"></>,\n\t\t< size=5 label=\"s\"></>\n\t]\n</>\n"
        );
    }

    #[test]
    fn test_empty_block_list_stays_simple() {
        let out = Serializer::serialize(&Swatch::plain(1.0));
        assert!(!out.contains("samples"));
        assert_eq!(out.lines().count(), 1);
    }

    #[test]
    fn test_length_threshold_forces_complex_layout() {
        let options = SerializeOptions {
            max_simple_len: Some(8),
            ..Default::default()
        };
        let out = Serializer::serialize_with(&Swatch::plain(1.0), &options);
        assert_eq!(out, "<>\n\tsize=1\n\tlabel=\"s\"\n</>\n");
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"a<b & "c""#), "a&lt;b &amp; &quot;c&quot;");
    }
}
