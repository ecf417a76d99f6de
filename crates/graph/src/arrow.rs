use crate::error::{GraphError, Result};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// 合并标签中各属性名之间的分隔符
pub const LABEL_DELIMITER: &str = "<br/>";

/// 图节点 - 每个实体一个
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Node {
    pub name: String,
}

impl Node {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// 候选有向边 (合并前)
///
/// 不变量: `guessed == value.is_some()`。按字段顺序比较。
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Arrow {
    src_name: String,
    dst_name: String,
    key: String,
    value: Option<String>,
    guessed: bool,
    src_type: String,
    dst_type: String,
}

impl Arrow {
    pub fn new(
        src_name: String,
        dst_name: String,
        key: String,
        value: Option<String>,
        guessed: bool,
        src_type: String,
        dst_type: String,
    ) -> Result<Self> {
        if guessed != value.is_some() {
            return Err(GraphError::ArrowInvariant { key, guessed });
        }
        Ok(Self {
            src_name,
            dst_name,
            key,
            value,
            guessed,
            src_type,
            dst_type,
        })
    }

    /// 值匹配推断出的边
    pub fn guessed(
        src: (&str, &str),
        dst: (&str, &str),
        key: &str,
        value: &str,
    ) -> Self {
        Self {
            src_name: src.0.to_string(),
            dst_name: dst.0.to_string(),
            key: key.to_string(),
            value: Some(value.to_string()),
            guessed: true,
            src_type: src.1.to_string(),
            dst_type: dst.1.to_string(),
        }
    }

    /// 配置声明的结构引用边
    pub fn explicit(src: (&str, &str), dst: (&str, &str), key: &str) -> Self {
        Self {
            src_name: src.0.to_string(),
            dst_name: dst.0.to_string(),
            key: key.to_string(),
            value: None,
            guessed: false,
            src_type: src.1.to_string(),
            dst_type: dst.1.to_string(),
        }
    }

    pub fn src_name(&self) -> &str {
        &self.src_name
    }

    pub fn dst_name(&self) -> &str {
        &self.dst_name
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_guessed(&self) -> bool {
        self.guessed
    }

    pub fn src_type(&self) -> &str {
        &self.src_type
    }

    pub fn dst_type(&self) -> &str {
        &self.dst_type
    }
}

impl fmt::Display for Arrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) -> {} ({}) on attr {}",
            self.src_name, self.src_type, self.dst_name, self.dst_type, self.key
        )?;
        if let Some(value) = &self.value {
            write!(f, " matched on {}", value)?;
        }
        Ok(())
    }
}

/// 可渲染的边 (合并后)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DotArrow {
    pub src: String,
    pub dst: String,
    pub label: Option<String>,
    pub bidirectional: bool,
}

impl DotArrow {
    /// 双向边的端点按字典序排列，渲染器对声明顺序敏感
    pub fn new(src: &str, dst: &str, label: Option<String>, bidirectional: bool) -> Self {
        let (src, dst) = if bidirectional && dst < src {
            (dst, src)
        } else {
            (src, dst)
        };
        Self {
            src: src.to_string(),
            dst: dst.to_string(),
            label,
            bidirectional,
        }
    }
}

/// 比较顺序: src, dst, label (None 在前), bidirectional
impl Ord for DotArrow {
    fn cmp(&self, other: &Self) -> Ordering {
        self.src
            .cmp(&other.src)
            .then_with(|| self.dst.cmp(&other.dst))
            .then_with(|| self.label.cmp(&other.label))
            .then_with(|| self.bidirectional.cmp(&other.bidirectional))
    }
}

impl PartialOrd for DotArrow {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
