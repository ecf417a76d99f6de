/// 把显示字符串规范化为小写、分隔符安全的标识符
///
/// 空格、`-`、`.`、`/` 视为分隔符；其余非单词字符丢弃；
/// 连续分隔符合并，首尾分隔符去掉。不同输入可能得到相同结果。
pub fn slugify(s: &str) -> String {
    let cleaned: String = s
        .to_lowercase()
        .chars()
        .map(|c| if matches!(c, ' ' | '-' | '.' | '/') { '_' } else { c })
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();

    cleaned
        .split('_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}
