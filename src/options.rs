//! Configuration options for the indenting renderer.

/// Configuration options for [`indent_with_options`](crate::indent_with_options).
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use rs_htree::Options;
///
/// let options = Options {
///     level: 1,
///     trailing_newline: true,
///     ..Options::default()
/// };
/// assert_eq!(options.indent_width, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Nesting level of the node being rendered.
    ///
    /// The node's own tags are indented by `level * indent_width` spaces.
    ///
    /// Default: `0`
    pub level: usize,

    /// Spaces per nesting level.
    ///
    /// Default: `2`
    pub indent_width: usize,

    /// Make sure the output ends with a newline.
    ///
    /// Default: `false`
    pub trailing_newline: bool,
}

impl Options {
    /// Indentation prefix for `level`.
    pub(crate) fn prefix(&self, level: usize) -> String {
        " ".repeat(level * self.indent_width)
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            level: 0,
            indent_width: 2,
            trailing_newline: false,
        }
    }
}
