use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("no identity attribute configured for type {type_name}")]
    MissingIdAttr { type_name: String },
    #[error("{type_name} has no attribute {attr}")]
    MissingAttribute { type_name: String, attr: String },
    #[error("identity attribute {attr} of {type_name} is not a string or a sequence of strings")]
    InvalidIdentity { type_name: String, attr: String },
    #[error("arrow on attr {key} has guessed={guessed} but value presence disagrees")]
    ArrowInvariant { key: String, guessed: bool },
}

impl GraphError {
    /// 配置错误 (对外可见)；ArrowInvariant 属于内部断言
    pub fn is_configuration(&self) -> bool {
        !matches!(self, GraphError::ArrowInvariant { .. })
    }
}

pub type Result<T> = std::result::Result<T, GraphError>;
