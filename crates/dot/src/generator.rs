use graph::{Diagram, DotArrow, Node};
use std::collections::BTreeSet;

/// DOT 图生成器
pub struct DotGenerator {
    graph_name: String,
}

impl DotGenerator {
    pub fn new() -> Self {
        Self {
            graph_name: "graphname".to_string(),
        }
    }

    pub fn with_graph_name(mut self, name: &str) -> Self {
        self.graph_name = name.to_string();
        self
    }

    /// 生成 DOT 语句行: 先节点 (去重、排序)，再边 (排序)
    pub fn render(&self, nodes: &[Node], arrows: &[DotArrow]) -> Vec<String> {
        let names: BTreeSet<&str> = nodes.iter().map(|n| n.name.as_str()).collect();
        let mut lines: Vec<String> = names.into_iter().map(str::to_string).collect();

        let mut sorted: Vec<&DotArrow> = arrows.iter().collect();
        sorted.sort();
        lines.extend(sorted.into_iter().map(Self::edge_line));

        lines
    }

    pub fn render_diagram(&self, diagram: &Diagram) -> Vec<String> {
        self.render(&diagram.nodes, &diagram.arrows)
    }

    /// 包装为完整的 digraph 文档
    pub fn document(&self, lines: &[String]) -> String {
        let mut out = format!("digraph {}{{\n", self.graph_name);
        for line in lines {
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("}\n");
        out
    }

    #[doc(hidden)]
    pub fn edge_line(arrow: &DotArrow) -> String {
        match (&arrow.label, arrow.bidirectional) {
            (None, false) => format!("{}->{}", arrow.src, arrow.dst),
            (None, true) => format!("{}->{} [ dir=\"both\"]", arrow.src, arrow.dst),
            (Some(label), false) => {
                format!("{}->{} [ label= <{}> ]", arrow.src, arrow.dst, label)
            }
            (Some(label), true) => format!(
                "{}->{} [ label= <{}> dir=\"both\" ]",
                arrow.src, arrow.dst, label
            ),
        }
    }
}

impl Default for DotGenerator {
    fn default() -> Self {
        Self::new()
    }
}
