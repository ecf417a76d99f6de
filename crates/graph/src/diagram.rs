use crate::arrow::{DotArrow, Node};
use crate::combine::combine_arrows;
use crate::config::Configuration;
use crate::entity::Entity;
use crate::error::Result;
use crate::identity::entity_name;
use crate::infer::make_arrows;
use crate::slug::slugify;

/// 一次生成的完整图: 节点 + 合并后的边
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    pub nodes: Vec<Node>,
    pub arrows: Vec<DotArrow>,
}

impl Diagram {
    /// 推断 -> 合并 -> 节点；任何配置错误都中止整个构建
    pub fn build(config: &Configuration, entities: &[&dyn Entity]) -> Result<Self> {
        let arrows = make_arrows(config, entities)?;
        let arrows = combine_arrows(arrows);
        let nodes = make_nodes(config, entities)?;

        tracing::debug!("diagram: {} nodes, {} edges", nodes.len(), arrows.len());
        Ok(Self { nodes, arrows })
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.arrows.is_empty()
    }
}

/// 每个实体一个节点，与是否有边无关
pub fn make_nodes(config: &Configuration, entities: &[&dyn Entity]) -> Result<Vec<Node>> {
    entities
        .iter()
        .map(|entity| Ok(Node::new(slugify(&entity_name(config, *entity)?))))
        .collect()
}
