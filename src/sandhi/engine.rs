//! 变调引擎
//!
//! 按音节分类查对应规则表，返回变调后的调号

use crate::error::SandhiResult;
use crate::sandhi::ruleset::RuleSetKind;
use crate::tone::{SyllableClass, ToneMarker};

/// 变调引擎
///
/// 纯函数式：无内部状态、无副作用，结果只取决于
/// (调号, 分类, 规则表)。规则表是 `'static` 不可变数据，
/// 多线程并发调用无需加锁。
pub struct SandhiEngine {
    kind: RuleSetKind,
}

impl SandhiEngine {
    /// 创建新的变调引擎
    pub fn new(kind: RuleSetKind) -> Self {
        Self { kind }
    }

    /// 应用变调规则
    ///
    /// # 参数
    /// - `marker`: 本调调号
    /// - `class`: 音节分类（舒声/入声/喉入声）
    ///
    /// # 返回
    /// - 变调后的调号；规则表未覆盖该调号时按原样返回
    pub fn apply(&self, marker: ToneMarker, class: SyllableClass) -> ToneMarker {
        let ruleset = self.kind.ruleset();
        let result = ruleset.lookup(marker, class);

        tracing::trace!(
            "变调: {} {:?} {} -> {}",
            ruleset.name,
            class,
            marker,
            result
        );

        result
    }

    /// 应用变调规则（字符串分类标签）
    ///
    /// 上游切分模块以文本标签传递分类时使用
    ///
    /// # 返回
    /// - `Err(InvalidClassification)`: 标签不是三种分类之一
    pub fn apply_tagged(&self, marker: ToneMarker, class_tag: &str) -> SandhiResult<ToneMarker> {
        let class: SyllableClass = class_tag.parse()?;
        Ok(self.apply(marker, class))
    }

    /// 切换规则表
    pub fn set_kind(&mut self, kind: RuleSetKind) {
        self.kind = kind;
    }

    /// 当前规则表
    pub fn kind(&self) -> RuleSetKind {
        self.kind
    }
}
