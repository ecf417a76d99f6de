//! graph - fixture 关系推断
//!
//! 按属性值匹配和结构引用推断实体之间的关系，合并为可渲染的边

mod arrow;
mod attrs;
mod combine;
mod config;
mod diagram;
mod entity;
mod error;
mod identity;
mod infer;
mod slug;

pub use arrow::{Arrow, DotArrow, Node, LABEL_DELIMITER};
pub use attrs::{filter_synonymous_attrs, get_attrs};
pub use combine::combine_arrows;
pub use config::Configuration;
pub use diagram::{make_nodes, Diagram};
pub use entity::{ChildRef, Entity, Value};
pub use error::{GraphError, Result};
pub use identity::entity_name;
pub use infer::{make_arrows, make_explicit_arrows, make_guessed_arrows};
pub use slug::slugify;
