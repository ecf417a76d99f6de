//! dot - Graphviz 渲染
//!
//! 节点和合并后的边转为 DOT 文本，可选调用外部查看器

mod generator;
mod viewer;

pub use generator::DotGenerator;
pub use viewer::{ShowReport, Viewer, ViewerConfig, ViewerError};
