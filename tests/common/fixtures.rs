//! Mask specification fixtures.
//!
//! Real-world specifications shared across the integration tests.

use masker::{MaskAlternative, MaskSpec, NumericConfig};

/// Brazilian individual (CPF) or company (CNPJ) taxpayer number.
pub fn cpf_cnpj() -> MaskSpec {
    MaskSpec::alternatives(["999.999.999-99", "99.999.999/9999-99"])
}

/// Brazilian identity card, with a letter-first variant.
pub fn rg() -> MaskSpec {
    MaskSpec::Alternatives(vec![
        MaskAlternative::literal("*9.999.999-9"),
        MaskAlternative::pattern("A-99.999.999", "/^[a-zA-Z]/").expect("valid regex"),
    ])
}

/// Legacy and Mercosul vehicle plates.
pub fn car_plate() -> MaskSpec {
    MaskSpec::Alternatives(vec![
        MaskAlternative::literal("AAA-9*99"),
        MaskAlternative::pattern("AAA9A99", "/^[A-Z]{3}\\d[A-Z].*/i").expect("valid regex"),
    ])
}

/// CPF or a letter-first identity number.
pub fn cpf_or_rg() -> MaskSpec {
    MaskSpec::Alternatives(vec![
        MaskAlternative::literal("999.999.999-99"),
        MaskAlternative::pattern("A-99.999.999", "/^[a-zA-Z]/").expect("valid regex"),
    ])
}

/// Four alternatives mixing length selection and a regex.
pub fn four_alternatives() -> MaskSpec {
    MaskSpec::Alternatives(vec![
        MaskAlternative::literal("**.999"),
        MaskAlternative::literal("**9-999"),
        MaskAlternative::literal("**/99/9999"),
        MaskAlternative::pattern("AA-9999", "/^[a-zA-Z]{2}/").expect("valid regex"),
    ])
}

/// Brazilian real amounts.
pub fn brl() -> MaskSpec {
    MaskSpec::numeric(NumericConfig::default().with_prefix("R$ ").with_decimal(2))
}

/// Templates used by the invariant tests.
pub fn sample_templates() -> Vec<&'static str> {
    vec![
        "999.999.999-99",
        "99.999.999/9999-99",
        "[9 ][+9]9999-9999",
        "+99 (99) [9]9999-9999",
        "(99) [9 ]9999-9999",
        "[9]99",
        "[9][9]99",
        "[+9]99",
        "\\[+9\\]99",
        "99/99/\\*999",
        "99/99/\\",
        "999-AAA-999",
        "AAA-9*99",
        "[A9]*",
        "[99",
        "",
        "---",
    ]
}

/// Raw values used by the invariant tests.
pub fn sample_values() -> Vec<String> {
    vec![
        String::new(),
        "1".to_string(),
        "12".to_string(),
        "123".to_string(),
        "12345678".to_string(),
        "912345678".to_string(),
        "9912345678".to_string(),
        "5511912345678".to_string(),
        "12345678901234567890".to_string(),
        "a1b2c3d4e5".to_string(),
        "ABC1D23".to_string(),
        "123ABC456".to_string(),
        "(11) 9 1234-5678".to_string(),
        "!!!".to_string(),
        "🔢📱☎️".to_string(),
        "9".repeat(500),
        "x".repeat(100),
    ]
}
