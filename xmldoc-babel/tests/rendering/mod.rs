//! Documentation tree → Markdown.

mod lists;
mod members;
mod spans;
mod text;
