use thiserror::Error;

#[derive(Error, Debug)]
pub enum SandhiError {
    // 分类错误
    #[error("Invalid syllable classification: {0}")]
    InvalidClassification(String),

    // 调号错误
    #[error("Invalid tone marker: {0}")]
    InvalidToneMarker(char),

    // 规则表错误
    #[error("Unknown rule set: {0}")]
    UnknownRuleSet(String),

    // 回应载荷错误
    #[error("Key not found in payload body: {0}")]
    KeyNotFound(String),

    #[error("Payload parse error: {0}")]
    PayloadParse(#[from] serde_json::Error),

    // 其他错误
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SandhiResult<T> = Result<T, SandhiError>;
