//! 调号与音节分类
//!
//! 定义声调符号集（'1'-'9'）与音节的声学分类（舒声/入声/喉入声）

use std::fmt;
use std::str::FromStr;

use crate::error::{SandhiError, SandhiResult};

/// 调号 - 台罗拼音的声调符号
///
/// 符号集为固定的 '1' 到 '9'。第 6 调在现代台语中已并入第 2 调，
/// 不出现在任何规则表中，但仍是合法的输入符号。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToneMarker {
    T1,
    T2,
    T3,
    T4,
    T5,
    T6,
    T7,
    T8,
    T9,
}

impl ToneMarker {
    /// 从字符解析调号
    ///
    /// # 参数
    /// - `ch`: 声调字符（'1'-'9'）
    ///
    /// # 返回
    /// - `Err(InvalidToneMarker)`: 字符不在符号集内
    pub fn from_char(ch: char) -> SandhiResult<Self> {
        match ch {
            '1' => Ok(ToneMarker::T1),
            '2' => Ok(ToneMarker::T2),
            '3' => Ok(ToneMarker::T3),
            '4' => Ok(ToneMarker::T4),
            '5' => Ok(ToneMarker::T5),
            '6' => Ok(ToneMarker::T6),
            '7' => Ok(ToneMarker::T7),
            '8' => Ok(ToneMarker::T8),
            '9' => Ok(ToneMarker::T9),
            _ => Err(SandhiError::InvalidToneMarker(ch)),
        }
    }

    /// 调号对应的字符
    pub fn as_char(&self) -> char {
        match self {
            ToneMarker::T1 => '1',
            ToneMarker::T2 => '2',
            ToneMarker::T3 => '3',
            ToneMarker::T4 => '4',
            ToneMarker::T5 => '5',
            ToneMarker::T6 => '6',
            ToneMarker::T7 => '7',
            ToneMarker::T8 => '8',
            ToneMarker::T9 => '9',
        }
    }
}

impl fmt::Display for ToneMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// 音节分类
///
/// 上游切分模块根据韵尾判定：
/// - 舒声：开音节或鼻音韵尾
/// - 入声：塞音韵尾（-p/-t/-k）
/// - 喉入声：喉塞音韵尾（-h）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyllableClass {
    /// 舒声
    Plain,
    /// 入声
    Entering,
    /// 喉入声
    GlottalEntering,
}

impl FromStr for SyllableClass {
    type Err = SandhiError;

    /// 解析上游传来的分类标签
    ///
    /// 同时接受连字符和下划线写法（"glottal-entering" / "glottal_entering"）
    fn from_str(s: &str) -> SandhiResult<Self> {
        match s {
            "plain" => Ok(SyllableClass::Plain),
            "entering" => Ok(SyllableClass::Entering),
            "glottal-entering" | "glottal_entering" => Ok(SyllableClass::GlottalEntering),
            _ => Err(SandhiError::InvalidClassification(s.to_string())),
        }
    }
}
