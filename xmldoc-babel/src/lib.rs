//! Compiler documentation-comment XML to Markdown
//!
//!     Compilers for .NET languages write the `///` comments of an assembly into an XML file
//!     (`<doc><assembly>..</assembly><members>..</members></doc>`). This crate reads that
//!     file into a typed, immutable tree and renders the tree, or any part of it, as
//!     Markdown.
//!
//!     This is a pure lib: no file system access, no printing, no env vars. The xmldoc-cli
//!     crate is the shell around it.
//!
//! Architecture
//!
//!     XML text ──roxmltree──▶ parser ──▶ model ──render──▶ markdown tree ──comrak──▶ text
//!
//!     .
//!     ├── error.rs            # ParseError, SchemaError, RenderError
//!     ├── model               # The documentation tree and member ids
//!     ├── parser
//!     │   ├── indent.rs       # Compiler indentation removal
//!     │   ├── members.rs      # Member factories
//!     │   └── text.rs         # Mixed text content classification
//!     ├── render
//!     │   ├── visit.rs        # Traversal
//!     │   ├── block.rs        # Structural Markdown
//!     │   ├── span.rs         # Inline Markdown
//!     │   └── paragraph.rs    # Implicit paragraph state
//!     └── markdown            # Markdown tree and the comrak serializer
//!
//! Library Choices
//!
//!     We never parse XML or print Markdown ourselves. roxmltree gives us the XML tree with
//!     line/column positions for diagnostics, comrak owns CommonMark output (escaping, list
//!     markers, table alignment). The code here is the mapping between the two.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     ├── common              # Shared fixtures
//!     ├── parsing
//!     └── rendering
//!
//!     Rust does not discover tests in subdirectories by default, so tests/lib.rs
//!     includes them as modules.

pub mod error;
pub mod markdown;
pub mod model;
pub mod parser;
pub mod render;

pub use error::{Error, ParseError, Position, RenderError, SchemaError, SchemaErrorKind};
pub use markdown::{ListStyle, MarkdownOptions, MdBlock, MdSpan};
pub use model::{DocumentationFile, Member, MemberId, MemberKind};
pub use parser::{parse_document, parse_documentation};
pub use render::{
    convert_to_block, convert_to_block_with_resolver, convert_to_span,
    convert_to_span_with_resolver, CodeReferenceResolver, DocumentationElement, NoCodeLinks,
};

/// Parses documentation XML and renders the whole file as Markdown.
pub fn xml_to_markdown(source: &str, options: &MarkdownOptions) -> Result<String, Error> {
    let file = parse_documentation(source)?;
    let block = convert_to_block(&file)?;
    Ok(markdown::render_block(&block, options)?)
}

/// Looks up a member by its raw id (`T:Namespace.Type`, `M:Namespace.Type.Method`, ...).
pub fn select_member<'a>(file: &'a DocumentationFile, raw_id: &str) -> Option<&'a Member> {
    file.member(raw_id)
}
