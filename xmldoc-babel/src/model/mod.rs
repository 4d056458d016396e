//! The documentation tree produced by the parser and consumed by the renderers.

pub mod member_id;
pub mod nodes;

pub use member_id::{InvalidMemberId, MemberId, MemberKind};
pub use nodes::*;
