//! JSON fixture 文档 - CLI 输入
//!
//! ```json
//! { "config": { "id_attrs": { "Parent": "reference", "Child": "id" },
//!               "attrs_with_child_refs": { "Parent": ["children"] } },
//!   "entities": [
//!     { "type": "Parent", "attrs": { "reference": "ref", "children": [{"$ref": 1}] } },
//!     { "type": "Child", "attrs": { "id": "child1" } } ] }
//! ```

use anyhow::Context;
use graph::{ChildRef, Configuration, Entity, Value};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureDocument {
    #[serde(default)]
    pub config: Configuration,
    #[serde(default)]
    pub entities: Vec<Fixture>,
}

/// 单个实体；属性按名字排序迭代
#[derive(Debug, Clone, Deserialize)]
pub struct Fixture {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub attrs: serde_json::Map<String, serde_json::Value>,
}

impl FixtureDocument {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("loading {}", path.display()))
    }

    pub fn parse(content: &str) -> anyhow::Result<Self> {
        let doc: Self = serde_json::from_str(content)?;
        doc.validate()?;
        Ok(doc)
    }

    /// 所有 `$ref` 必须指向文档内的实体
    fn validate(&self) -> anyhow::Result<()> {
        for (i, fixture) in self.entities.iter().enumerate() {
            for (name, value) in &fixture.attrs {
                let mut pending = vec![value];
                while let Some(v) = pending.pop() {
                    if let Some(target) = ref_index(v) {
                        if target >= self.entities.len() {
                            anyhow::bail!(
                                "entity {} ({}) attribute {} references missing entity {}",
                                i,
                                fixture.type_name,
                                name,
                                target
                            );
                        }
                    } else if let Some(items) = v.as_array() {
                        pending.extend(items);
                    }
                }
            }
        }
        Ok(())
    }

    pub fn entities(&self) -> Vec<FixtureEntity<'_>> {
        self.entities
            .iter()
            .map(|fixture| FixtureEntity { doc: self, fixture })
            .collect()
    }
}

/// `{"$ref": n}`
fn ref_index(v: &serde_json::Value) -> Option<usize> {
    let obj = v.as_object()?;
    if obj.len() != 1 {
        return None;
    }
    obj.get("$ref")?.as_u64().map(|n| n as usize)
}

fn to_value(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::String(s) => Value::Str(s.clone()),
        serde_json::Value::Array(items) => Value::Seq(items.iter().map(to_value).collect()),
        _ => Value::Opaque,
    }
}

#[derive(Clone, Copy)]
pub struct FixtureEntity<'a> {
    doc: &'a FixtureDocument,
    fixture: &'a Fixture,
}

impl<'a> FixtureEntity<'a> {
    fn resolve(&self, index: usize) -> Option<FixtureEntity<'a>> {
        self.doc.entities.get(index).map(|fixture| FixtureEntity {
            doc: self.doc,
            fixture,
        })
    }
}

impl Entity for FixtureEntity<'_> {
    fn type_name(&self) -> &str {
        &self.fixture.type_name
    }

    fn attributes(&self) -> Vec<(String, Value)> {
        self.fixture
            .attrs
            .iter()
            .map(|(k, v)| (k.clone(), to_value(v)))
            .collect()
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        self.fixture.attrs.get(name).map(to_value)
    }

    fn child_refs(&self, name: &str) -> Option<ChildRef<'_>> {
        let value = self.fixture.attrs.get(name)?;
        if let Some(index) = ref_index(value) {
            return self.resolve(index).map(ChildRef::one);
        }
        let children = value
            .as_array()?
            .iter()
            .map(|item| ref_index(item).and_then(|i| self.resolve(i)))
            .collect::<Option<Vec<_>>>()?;
        Some(ChildRef::many(children))
    }
}
