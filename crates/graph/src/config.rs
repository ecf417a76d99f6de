use crate::error::{GraphError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// 图配置 - 按类型名索引
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Configuration {
    /// 类型 -> 身份属性名 (字段或计算型访问器)
    pub id_attrs: BTreeMap<String, String>,
    /// 类型 -> 持有子实体引用的属性名 (有序)
    #[serde(default)]
    pub attrs_with_child_refs: BTreeMap<String, Vec<String>>,
    /// 类型 -> 同义属性名 (第一个为代表)
    #[serde(default)]
    pub synonymous_attrs: BTreeMap<String, Vec<String>>,
}

impl Configuration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id_attr(mut self, type_name: &str, attr: &str) -> Self {
        self.id_attrs.insert(type_name.to_string(), attr.to_string());
        self
    }

    pub fn with_child_refs(mut self, type_name: &str, attrs: &[&str]) -> Self {
        self.attrs_with_child_refs.insert(
            type_name.to_string(),
            attrs.iter().map(|a| a.to_string()).collect(),
        );
        self
    }

    pub fn with_synonyms(mut self, type_name: &str, attrs: &[&str]) -> Self {
        self.synonymous_attrs.insert(
            type_name.to_string(),
            attrs.iter().map(|a| a.to_string()).collect(),
        );
        self
    }

    pub fn id_attr(&self, type_name: &str) -> Result<&str> {
        self.id_attrs
            .get(type_name)
            .map(String::as_str)
            .ok_or_else(|| GraphError::MissingIdAttr {
                type_name: type_name.to_string(),
            })
    }

    pub fn child_ref_attrs(&self, type_name: &str) -> &[String] {
        self.attrs_with_child_refs
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn synonyms(&self, type_name: &str) -> &[String] {
        self.synonymous_attrs
            .get(type_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
