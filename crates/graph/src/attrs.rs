use crate::config::Configuration;
use crate::entity::{Entity, Value};
use std::collections::HashMap;

/// 提取实体的字符串属性 (key, value)
///
/// 字符串序列展开为 `{key}_{i}`；其它值不可见。
/// 结果已经过同义属性过滤。
pub fn get_attrs(config: &Configuration, entity: &dyn Entity) -> Vec<(String, String)> {
    let mut attrs = Vec::new();
    let mut positions = HashMap::new();

    for (name, value) in entity.attributes() {
        if name.starts_with("__") || name == "_fields" {
            continue;
        }
        let key = name.trim_start_matches('_');

        match &value {
            Value::Str(s) => put(&mut attrs, &mut positions, key.to_string(), s.clone()),
            Value::Seq(_) => {
                if let Some(items) = value.as_string_seq() {
                    for (i, item) in items.into_iter().enumerate() {
                        put(&mut attrs, &mut positions, format!("{}_{}", key, i), item.to_string());
                    }
                }
            }
            Value::Opaque => {}
        }
    }

    filter_synonymous_attrs(config.synonyms(entity.type_name()), attrs)
}

/// 同名 key 后写覆盖，但保留首次出现的位置
fn put(
    attrs: &mut Vec<(String, String)>,
    positions: &mut HashMap<String, usize>,
    key: String,
    value: String,
) {
    match positions.get(&key) {
        Some(&i) => attrs[i].1 = value,
        None => {
            positions.insert(key.clone(), attrs.len());
            attrs.push((key, value));
        }
    }
}

/// 同义属性只保留最先出现的一个
pub fn filter_synonymous_attrs(
    synonyms: &[String],
    attrs: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut seen = false;
    attrs
        .into_iter()
        .filter(|(k, _)| {
            if !synonyms.contains(k) {
                return true;
            }
            !std::mem::replace(&mut seen, true)
        })
        .collect()
}
