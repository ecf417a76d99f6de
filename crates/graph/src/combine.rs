use crate::arrow::{Arrow, DotArrow, LABEL_DELIMITER};
use crate::slug::slugify;
use std::collections::{BTreeMap, BTreeSet};

/// 合并候选边为最少的可渲染边
///
/// 第一阶段: 值匹配边按无序节点对合并为一条双向边 (不区分 key 和值)。
/// 第二阶段: 剩余的结构引用边按有序节点对合并。
/// 输出按 (src, dst, label, bidirectional) 排序，与输入顺序无关。
pub fn combine_arrows<I>(arrows: I) -> Vec<DotArrow>
where
    I: IntoIterator<Item = Arrow>,
{
    let arrows: BTreeSet<Arrow> = arrows.into_iter().collect();
    let (guessed, explicit): (Vec<&Arrow>, Vec<&Arrow>) =
        arrows.iter().partition(|a| a.is_guessed());

    let mut result = Vec::new();

    let mut undirected: BTreeMap<(&str, &str), Vec<&Arrow>> = BTreeMap::new();
    for arrow in guessed {
        undirected
            .entry(unordered(arrow.src_name(), arrow.dst_name()))
            .or_default()
            .push(arrow);
    }
    tracing::debug!("merged guessed arrows into {} undirected edges", undirected.len());
    for ((a, b), group) in &undirected {
        result.push(DotArrow::new(a, b, Some(make_label(group)), true));
    }

    let mut directed: BTreeMap<(&str, &str), Vec<&Arrow>> = BTreeMap::new();
    for arrow in explicit {
        directed
            .entry((arrow.src_name(), arrow.dst_name()))
            .or_default()
            .push(arrow);
    }
    for ((src, dst), group) in &directed {
        result.push(DotArrow::new(src, dst, Some(make_label(group)), false));
    }

    result.sort();
    result
}

fn unordered<'a>(a: &'a str, b: &'a str) -> (&'a str, &'a str) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// 去重排序后的 key，逐个 slugify 后用分隔符连接
fn make_label(group: &[&Arrow]) -> String {
    let keys: BTreeSet<String> = group.iter().map(|a| slugify(a.key())).collect();
    keys.into_iter().collect::<Vec<_>>().join(LABEL_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn g(src: &str, dst: &str, key: &str, value: &str) -> Arrow {
        Arrow::guessed((src, "T"), (dst, "T"), key, value)
    }

    fn e(src: &str, dst: &str, key: &str) -> Arrow {
        Arrow::explicit((src, "T"), (dst, "T"), key)
    }

    #[test]
    fn test_guessed_pair_collapses_to_one_edge() {
        let arrows = vec![
            g("b", "a", "x", "1"),
            g("a", "b", "y", "2"),
            g("a", "b", "x", "1"),
        ];
        let combined = combine_arrows(arrows);
        assert_eq!(
            combined,
            vec![DotArrow::new("a", "b", Some("x<br/>y".to_string()), true)]
        );
    }

    #[test]
    fn test_explicit_merges_only_same_direction() {
        let arrows = vec![
            e("p", "c", "left"),
            e("p", "c", "right"),
            e("c", "p", "parent"),
        ];
        let combined = combine_arrows(arrows);
        assert_eq!(
            combined,
            vec![
                DotArrow::new("c", "p", Some("parent".to_string()), false),
                DotArrow::new("p", "c", Some("left<br/>right".to_string()), false),
            ]
        );
    }

    #[test]
    fn test_guessed_and_explicit_kept_apart() {
        let arrows = vec![g("p", "c", "name", "n"), e("p", "c", "child")];
        let combined = combine_arrows(arrows);
        assert_eq!(combined.len(), 2);
        assert!(combined[0].bidirectional != combined[1].bidirectional);
    }

    #[test]
    fn test_label_keys_appear_once() {
        let arrows = vec![
            g("a", "b", "k", "1"),
            g("a", "b", "k", "2"),
            g("b", "a", "k", "1"),
        ];
        let combined = combine_arrows(arrows);
        assert_eq!(combined[0].label.as_deref(), Some("k"));
    }

    #[test]
    fn test_labels_are_slugified() {
        let arrows = vec![e("a", "b", "Child Refs"), e("a", "b", "child-refs")];
        let combined = combine_arrows(arrows);
        assert_eq!(combined[0].label.as_deref(), Some("child_refs"));
    }

    #[test]
    fn test_input_order_irrelevant() {
        let arrows = vec![
            g("a", "b", "x", "1"),
            e("a", "c", "k_0"),
            g("c", "b", "y", "2"),
            e("b", "c", "k"),
        ];
        let mut reversed = arrows.clone();
        reversed.reverse();
        assert_eq!(combine_arrows(arrows), combine_arrows(reversed));
    }

    #[test]
    fn test_empty() {
        assert!(combine_arrows(Vec::new()).is_empty());
    }
}
