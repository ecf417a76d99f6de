use crate::arrow::Arrow;
use crate::attrs::get_attrs;
use crate::config::Configuration;
use crate::entity::{ChildRef, Entity};
use crate::error::{GraphError, Result};
use crate::identity::entity_name;
use crate::slug::slugify;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// 推断全部候选边 (值匹配 + 结构引用)
pub fn make_arrows(config: &Configuration, entities: &[&dyn Entity]) -> Result<Vec<Arrow>> {
    let mut arrows = make_guessed_arrows(config, entities)?;
    arrows.extend(make_explicit_arrows(config, entities)?);
    Ok(arrows)
}

/// 值匹配边
///
/// 先建立 value -> 实体名 的索引，再从每个实体自身的 (key, value) 出发，
/// 向所有共享该值的其它实体各发一条边。方向不去重。
pub fn make_guessed_arrows(config: &Configuration, entities: &[&dyn Entity]) -> Result<Vec<Arrow>> {
    // 实体名 -> (类型名, 属性)；同名实体后者覆盖
    let mut attrs_by_name: BTreeMap<String, (String, Vec<(String, String)>)> = BTreeMap::new();
    let mut by_value: HashMap<String, BTreeSet<String>> = HashMap::new();

    for entity in entities {
        let name = entity_name(config, *entity)?;
        let attrs = get_attrs(config, *entity);
        for (_, value) in &attrs {
            by_value.entry(value.clone()).or_default().insert(name.clone());
        }
        attrs_by_name.insert(name, (entity.type_name().to_string(), attrs));
    }

    let mut arrows = BTreeSet::new();
    for (src_name, (src_type, attrs)) in &attrs_by_name {
        let src_slug = slugify(src_name);
        for (key, value) in attrs {
            let Some(dst_names) = by_value.get(value) else {
                continue;
            };
            for dst_name in dst_names {
                if dst_name == src_name {
                    continue;
                }
                let Some((dst_type, _)) = attrs_by_name.get(dst_name) else {
                    continue;
                };
                let dst_slug = slugify(dst_name);
                if dst_slug == src_slug {
                    tracing::debug!("{} and {} share a slug, skipping match on {}", src_name, dst_name, key);
                    continue;
                }
                arrows.insert(Arrow::guessed(
                    (src_slug.as_str(), src_type.as_str()),
                    (dst_slug.as_str(), dst_type.as_str()),
                    key,
                    value,
                ));
            }
        }
    }

    tracing::debug!("guessed {} arrows from {} entities", arrows.len(), attrs_by_name.len());
    Ok(arrows.into_iter().collect())
}

/// 结构引用边: parent -> child
pub fn make_explicit_arrows(config: &Configuration, entities: &[&dyn Entity]) -> Result<Vec<Arrow>> {
    let mut arrows = Vec::new();

    for entity in entities {
        let type_name = entity.type_name();
        for attr in config.child_ref_attrs(type_name) {
            let children = entity
                .child_refs(attr)
                .ok_or_else(|| GraphError::MissingAttribute {
                    type_name: type_name.to_string(),
                    attr: attr.clone(),
                })?;
            let parent = slugify(&entity_name(config, *entity)?);

            match children {
                ChildRef::One(child) => {
                    let child_name = slugify(&entity_name(config, child.as_ref())?);
                    arrows.push(Arrow::explicit(
                        (parent.as_str(), type_name),
                        (child_name.as_str(), child.type_name()),
                        attr,
                    ));
                }
                ChildRef::Many(items) => {
                    for (i, child) in items.iter().enumerate() {
                        let child_name = slugify(&entity_name(config, child.as_ref())?);
                        arrows.push(Arrow::explicit(
                            (parent.as_str(), type_name),
                            (child_name.as_str(), child.type_name()),
                            &format!("{}_{}", attr, i),
                        ));
                    }
                }
            }
        }
    }

    tracing::debug!("found {} reference arrows", arrows.len());
    Ok(arrows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Value;

    struct Item {
        kind: &'static str,
        attrs: Vec<(&'static str, &'static str)>,
    }

    impl Entity for Item {
        fn type_name(&self) -> &str {
            self.kind
        }

        fn attributes(&self) -> Vec<(String, Value)> {
            self.attrs
                .iter()
                .map(|(k, v)| (k.to_string(), Value::str(*v)))
                .collect()
        }

        fn child_refs(&self, _name: &str) -> Option<ChildRef<'_>> {
            None
        }
    }

    fn item(kind: &'static str, attrs: Vec<(&'static str, &'static str)>) -> Item {
        Item { kind, attrs }
    }

    fn config() -> Configuration {
        Configuration::new()
            .with_id_attr("A", "id")
            .with_id_attr("B", "id")
    }

    #[test]
    fn test_asymmetric_keys() {
        let a = item("A", vec![("id", "a"), ("x", "v")]);
        let b = item("B", vec![("id", "b"), ("y", "v"), ("z", "v")]);
        let arrows = make_guessed_arrows(&config(), &[&a, &b]).unwrap();

        let seen: Vec<_> = arrows
            .iter()
            .map(|a| (a.src_name(), a.dst_name(), a.key()))
            .collect();
        assert_eq!(
            seen,
            vec![("a_a", "b_b", "x"), ("b_b", "a_a", "y"), ("b_b", "a_a", "z")]
        );
    }

    #[test]
    fn test_no_self_loops() {
        let a = item("A", vec![("id", "same"), ("copy", "same")]);
        let arrows = make_guessed_arrows(&config(), &[&a]).unwrap();
        assert!(arrows.is_empty());
    }

    #[test]
    fn test_slug_collision_is_not_a_loop() {
        let a = item("A", vec![("id", "x y"), ("v", "1")]);
        let b = item("A", vec![("id", "x-y"), ("v", "1")]);
        let arrows = make_guessed_arrows(&config(), &[&a, &b]).unwrap();
        assert!(arrows.iter().all(|a| a.src_name() != a.dst_name()));
        assert!(arrows.is_empty());
    }

    #[test]
    fn test_guessed_arrows_carry_value() {
        let a = item("A", vec![("id", "1")]);
        let b = item("B", vec![("id", "1")]);
        let arrows = make_guessed_arrows(&config(), &[&a, &b]).unwrap();
        assert_eq!(arrows.len(), 2);
        assert!(arrows.iter().all(|a| a.is_guessed() && a.value() == Some("1")));
    }

    #[test]
    fn test_unregistered_type_fails() {
        let a = item("A", vec![("id", "1")]);
        let c = item("C", vec![("id", "1")]);
        let err = make_arrows(&config(), &[&a, &c]).unwrap_err();
        assert_eq!(err, GraphError::MissingIdAttr { type_name: "C".to_string() });
    }

    #[test]
    fn test_missing_child_ref_attr_fails() {
        let a = item("A", vec![("id", "1")]);
        let config = config().with_child_refs("A", &["children"]);
        let err = make_explicit_arrows(&config, &[&a]).unwrap_err();
        assert!(matches!(err, GraphError::MissingAttribute { .. }));
    }
}
