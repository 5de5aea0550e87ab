//! 变调规则表
//!
//! 每个 RuleSet 由三张独立的调号映射表组成（舒声/入声/喉入声）。
//! 规则表是部分映射：表内没有的调号按原样返回（恒等回退）。

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SandhiError, SandhiResult};
use crate::tone::{SyllableClass, ToneMarker};

use crate::tone::ToneMarker::*;

/// 变调规则表
///
/// 不可变配置数据，构造后不再修改。原实现用子类继承组装各套规则，
/// 这里改为静态表 + 枚举选择。
pub struct RuleSet {
    /// 规则表名称
    pub name: &'static str,
    /// 舒声变调规则
    plain: &'static [(ToneMarker, ToneMarker)],
    /// 入声变调规则（-p/-t/-k 韵尾）
    entering: &'static [(ToneMarker, ToneMarker)],
    /// 喉入声变调规则（-h 韵尾）
    glottal_entering: &'static [(ToneMarker, ToneMarker)],
}

impl RuleSet {
    /// 按分类查表
    ///
    /// # 参数
    /// - `marker`: 本调调号
    /// - `class`: 音节分类
    ///
    /// # 返回
    /// - 变调后的调号；表内没有该调号时返回输入本身
    pub fn lookup(&self, marker: ToneMarker, class: SyllableClass) -> ToneMarker {
        let table = match class {
            SyllableClass::Plain => self.plain,
            SyllableClass::Entering => self.entering,
            SyllableClass::GlottalEntering => self.glottal_entering,
        };

        table
            .iter()
            .find(|(from, _)| *from == marker)
            .map(|(_, to)| *to)
            .unwrap_or(marker)
    }

    /// 检查调号是否在指定分类的映射定义域内
    pub fn covers(&self, marker: ToneMarker, class: SyllableClass) -> bool {
        let table = match class {
            SyllableClass::Plain => self.plain,
            SyllableClass::Entering => self.entering,
            SyllableClass::GlottalEntering => self.glottal_entering,
        };
        table.iter().any(|(from, _)| *from == marker)
    }
}

/// 一般变调 - 标准变调环
///
/// 1→7→3→2→1，5→7；入声 4↔8；喉入声 4→2、8→3
static REGULAR: RuleSet = RuleSet {
    name: "regular",
    plain: &[(T1, T7), (T7, T3), (T3, T2), (T2, T1), (T5, T7)],
    entering: &[(T4, T8), (T8, T4)],
    glottal_entering: &[(T4, T2), (T8, T3)],
};

/// 三连音变调
///
/// 叠音词首音节的高调（1/5/7）变作第 9 调，其余沿用标准变调环
static TRI_SYLLABLE: RuleSet = RuleSet {
    name: "tri_syllable",
    plain: &[(T1, T9), (T2, T1), (T3, T2), (T5, T9), (T7, T9)],
    entering: &[(T4, T8), (T8, T4)],
    glottal_entering: &[(T4, T2), (T8, T3)],
};

/// 仔前变调
///
/// "仔" 前音节的变调：高调并入第 7 调，喉入声 4→1、8→7
static PRE_DIMINUTIVE: RuleSet = RuleSet {
    name: "pre_diminutive",
    plain: &[(T1, T7), (T2, T1), (T3, T1), (T5, T7), (T7, T7)],
    entering: &[(T4, T8), (T8, T4)],
    glottal_entering: &[(T4, T1), (T8, T7)],
};

/// 规则表选择
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSetKind {
    /// 一般变调
    Regular,
    /// 三连音变调
    TriSyllable,
    /// 仔前变调
    PreDiminutive,
}

impl RuleSetKind {
    /// 取得对应的规则表
    pub fn ruleset(&self) -> &'static RuleSet {
        match self {
            RuleSetKind::Regular => &REGULAR,
            RuleSetKind::TriSyllable => &TRI_SYLLABLE,
            RuleSetKind::PreDiminutive => &PRE_DIMINUTIVE,
        }
    }

    /// 规则表名称
    pub fn name(&self) -> &'static str {
        self.ruleset().name
    }
}

impl FromStr for RuleSetKind {
    type Err = SandhiError;

    fn from_str(s: &str) -> SandhiResult<Self> {
        match s {
            "regular" => Ok(RuleSetKind::Regular),
            "tri_syllable" => Ok(RuleSetKind::TriSyllable),
            "pre_diminutive" => Ok(RuleSetKind::PreDiminutive),
            _ => Err(SandhiError::UnknownRuleSet(s.to_string())),
        }
    }
}
