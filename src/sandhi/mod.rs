//! 变调模块
//!
//! RuleSet（规则表）+ SandhiEngine（变调引擎）

pub mod engine;
pub mod ruleset;

pub use engine::SandhiEngine;
pub use ruleset::{RuleSet, RuleSetKind};
