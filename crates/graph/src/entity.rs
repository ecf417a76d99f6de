/// 属性值 - 推断只关心字符串和字符串序列
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Str(String),
    /// 有序序列 (list / tuple)
    Seq(Vec<Value>),
    /// 其它标量或结构值，对推断不可见
    Opaque,
}

impl Value {
    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    pub fn strs<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Value::Seq(items.into_iter().map(|s| Value::Str(s.into())).collect())
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// 全部元素都是字符串时返回它们
    pub fn as_string_seq(&self) -> Option<Vec<&str>> {
        match self {
            Value::Seq(items) => items.iter().map(Value::as_str).collect(),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Opaque)
    }
}

/// 结构引用 - 单个子实体或有序子实体列表
pub enum ChildRef<'a> {
    One(Box<dyn Entity + 'a>),
    Many(Vec<Box<dyn Entity + 'a>>),
}

impl<'a> ChildRef<'a> {
    pub fn one<E: Entity + 'a>(entity: E) -> Self {
        ChildRef::One(Box::new(entity))
    }

    pub fn many<I, E>(entities: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Entity + 'a,
    {
        ChildRef::Many(
            entities
                .into_iter()
                .map(|e| Box::new(e) as Box<dyn Entity + 'a>)
                .collect(),
        )
    }
}

/// 实体能力接口
///
/// 替代运行时反射：每种实体类型自己列出属性和子引用。
pub trait Entity {
    /// 类型名，用于配置查找和节点名前缀
    fn type_name(&self) -> &str;

    /// 全部属性 (按迭代顺序)
    fn attributes(&self) -> Vec<(String, Value)>;

    /// 解析单个属性；计算型访问器通过覆盖此方法提供
    fn attribute(&self, name: &str) -> Option<Value> {
        self.attributes()
            .into_iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v)
    }

    /// 解析结构引用属性，属性不存在时返回 None
    fn child_refs(&self, name: &str) -> Option<ChildRef<'_>>;
}

impl<T: Entity + ?Sized> Entity for &T {
    fn type_name(&self) -> &str {
        (**self).type_name()
    }

    fn attributes(&self) -> Vec<(String, Value)> {
        (**self).attributes()
    }

    fn attribute(&self, name: &str) -> Option<Value> {
        (**self).attribute(name)
    }

    fn child_refs(&self, name: &str) -> Option<ChildRef<'_>> {
        (**self).child_refs(name)
    }
}
