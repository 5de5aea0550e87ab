//! 变调演示
//!
//! 运行: cargo run --example sandhi_demo

use sandhi_core::{RuleSetKind, SandhiEngine, SyllableClass, ToneMarker};

fn main() {
    sandhi_core::init_logging();

    let cases = [
        ('1', SyllableClass::Plain),
        ('2', SyllableClass::Plain),
        ('5', SyllableClass::Plain),
        ('4', SyllableClass::Entering),
        ('8', SyllableClass::Entering),
        ('4', SyllableClass::GlottalEntering),
        ('8', SyllableClass::GlottalEntering),
        ('6', SyllableClass::Plain),
    ];

    for kind in [
        RuleSetKind::Regular,
        RuleSetKind::TriSyllable,
        RuleSetKind::PreDiminutive,
    ] {
        let engine = SandhiEngine::new(kind);
        println!("=== {} ===", kind.name());

        for (ch, class) in cases {
            let marker = ToneMarker::from_char(ch).expect("调号字符合法");
            let result = engine.apply(marker, class);
            println!("  {:?} {} -> {}", class, marker, result);
        }
    }
}
