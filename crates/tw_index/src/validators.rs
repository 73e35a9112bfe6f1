use phf::phf_map;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

/// 类名剩余部分的校验器
///
/// 固定的枚举而不是闭包：配置表通过名字引用它们（见 [`Validator::from_name`]），
/// 类名匹配时按挂载顺序逐个调用 [`Validator::matches`]。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Validator {
    Any,
    AnyNonArbitrary,
    Number,
    Integer,
    Fraction,
    Percent,
    Length,
    TshirtSize,

    ArbitraryValue,
    ArbitraryValueLength,
    ArbitraryValueNumber,
    ArbitraryValuePosition,
    ArbitraryValueSize,
    ArbitraryValueImage,
    ArbitraryValueShadow,
    ArbitraryValueWeight,
    ArbitraryValueFamilyName,

    ArbitraryVariable,
    ArbitraryVariableLength,
    ArbitraryVariablePosition,
    ArbitraryVariableSize,
    ArbitraryVariableImage,
    ArbitraryVariableShadow,
    ArbitraryVariableWeight,
    ArbitraryVariableFamilyName,
}

/// 配置中使用的校验器名字
static VALIDATOR_NAMES: phf::Map<&'static str, Validator> = phf_map! {
    "any" => Validator::Any,
    "any-non-arbitrary" => Validator::AnyNonArbitrary,
    "number" => Validator::Number,
    "integer" => Validator::Integer,
    "fraction" => Validator::Fraction,
    "percent" => Validator::Percent,
    "length" => Validator::Length,
    "tshirt-size" => Validator::TshirtSize,
    "arbitrary-value" => Validator::ArbitraryValue,
    "arbitrary-value-length" => Validator::ArbitraryValueLength,
    "arbitrary-value-number" => Validator::ArbitraryValueNumber,
    "arbitrary-value-position" => Validator::ArbitraryValuePosition,
    "arbitrary-value-size" => Validator::ArbitraryValueSize,
    "arbitrary-value-image" => Validator::ArbitraryValueImage,
    "arbitrary-value-shadow" => Validator::ArbitraryValueShadow,
    "arbitrary-value-weight" => Validator::ArbitraryValueWeight,
    "arbitrary-value-family-name" => Validator::ArbitraryValueFamilyName,
    "arbitrary-variable" => Validator::ArbitraryVariable,
    "arbitrary-variable-length" => Validator::ArbitraryVariableLength,
    "arbitrary-variable-position" => Validator::ArbitraryVariablePosition,
    "arbitrary-variable-size" => Validator::ArbitraryVariableSize,
    "arbitrary-variable-image" => Validator::ArbitraryVariableImage,
    "arbitrary-variable-shadow" => Validator::ArbitraryVariableShadow,
    "arbitrary-variable-weight" => Validator::ArbitraryVariableWeight,
    "arbitrary-variable-family-name" => Validator::ArbitraryVariableFamilyName,
};

impl Validator {
    pub fn from_name(name: &str) -> Option<Self> {
        VALIDATOR_NAMES.get(name).copied()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Validator::Any => "any",
            Validator::AnyNonArbitrary => "any-non-arbitrary",
            Validator::Number => "number",
            Validator::Integer => "integer",
            Validator::Fraction => "fraction",
            Validator::Percent => "percent",
            Validator::Length => "length",
            Validator::TshirtSize => "tshirt-size",
            Validator::ArbitraryValue => "arbitrary-value",
            Validator::ArbitraryValueLength => "arbitrary-value-length",
            Validator::ArbitraryValueNumber => "arbitrary-value-number",
            Validator::ArbitraryValuePosition => "arbitrary-value-position",
            Validator::ArbitraryValueSize => "arbitrary-value-size",
            Validator::ArbitraryValueImage => "arbitrary-value-image",
            Validator::ArbitraryValueShadow => "arbitrary-value-shadow",
            Validator::ArbitraryValueWeight => "arbitrary-value-weight",
            Validator::ArbitraryValueFamilyName => "arbitrary-value-family-name",
            Validator::ArbitraryVariable => "arbitrary-variable",
            Validator::ArbitraryVariableLength => "arbitrary-variable-length",
            Validator::ArbitraryVariablePosition => "arbitrary-variable-position",
            Validator::ArbitraryVariableSize => "arbitrary-variable-size",
            Validator::ArbitraryVariableImage => "arbitrary-variable-image",
            Validator::ArbitraryVariableShadow => "arbitrary-variable-shadow",
            Validator::ArbitraryVariableWeight => "arbitrary-variable-weight",
            Validator::ArbitraryVariableFamilyName => "arbitrary-variable-family-name",
        }
    }

    /// 判断类名剩余部分（如 `p-4` 中的 `4`）是否被该校验器接受
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Validator::Any => true,
            Validator::AnyNonArbitrary => {
                !arbitrary_value_regex().is_match(value)
                    && !arbitrary_variable_regex().is_match(value)
            }
            Validator::Number => is_number(value),
            Validator::Integer => is_integer(value),
            Validator::Fraction => fraction_regex().is_match(value),
            Validator::Percent => is_percent(value),
            Validator::Length => is_length(value),
            Validator::TshirtSize => tshirt_regex().is_match(value),

            Validator::ArbitraryValue => arbitrary_value_regex().is_match(value),
            Validator::ArbitraryValueLength => {
                is_arbitrary_value(value, &["length"], is_length_only)
            }
            Validator::ArbitraryValueNumber => is_arbitrary_value(value, &["number"], is_number),
            Validator::ArbitraryValuePosition => {
                is_arbitrary_value(value, &["position", "percentage"], never)
            }
            Validator::ArbitraryValueSize => {
                is_arbitrary_value(value, &["length", "size", "bg-size"], never)
            }
            Validator::ArbitraryValueImage => {
                is_arbitrary_value(value, &["image", "url"], is_image)
            }
            Validator::ArbitraryValueShadow => {
                is_arbitrary_value(value, &["shadow"], is_shadow)
            }
            Validator::ArbitraryValueWeight => {
                is_arbitrary_value(value, &["number", "weight"], always)
            }
            Validator::ArbitraryValueFamilyName => {
                is_arbitrary_value(value, &["family-name"], never)
            }

            Validator::ArbitraryVariable => arbitrary_variable_regex().is_match(value),
            Validator::ArbitraryVariableLength => {
                is_arbitrary_variable(value, &["length"], false)
            }
            Validator::ArbitraryVariablePosition => {
                is_arbitrary_variable(value, &["position", "percentage"], false)
            }
            Validator::ArbitraryVariableSize => {
                is_arbitrary_variable(value, &["length", "size", "bg-size"], false)
            }
            Validator::ArbitraryVariableImage => {
                is_arbitrary_variable(value, &["image", "url"], false)
            }
            Validator::ArbitraryVariableShadow => {
                is_arbitrary_variable(value, &["shadow"], true)
            }
            Validator::ArbitraryVariableWeight => {
                is_arbitrary_variable(value, &["number", "weight"], false)
            }
            Validator::ArbitraryVariableFamilyName => {
                is_arbitrary_variable(value, &["family-name"], false)
            }
        }
    }
}

impl fmt::Display for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl TryFrom<String> for Validator {
    type Error = String;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Validator::from_name(&name).ok_or_else(|| format!("unknown validator '{}'", name))
    }
}

impl From<Validator> for String {
    fn from(validator: Validator) -> Self {
        validator.name().to_string()
    }
}

// ── 正则 ──────────────────────────────────────────────────────

macro_rules! static_regex {
    ($name:ident, $pattern:expr) => {
        fn $name() -> &'static Regex {
            static RE: OnceLock<Regex> = OnceLock::new();
            RE.get_or_init(|| Regex::new($pattern).expect("static regex pattern is valid"))
        }
    };
}

static_regex!(
    arbitrary_value_regex,
    r"(?i)^\[(?:([0-9A-Za-z_][0-9A-Za-z_-]*):)?(.+)\]$"
);
static_regex!(
    arbitrary_variable_regex,
    r"(?i)^\((?:([0-9A-Za-z_][0-9A-Za-z_-]*):)?(.+)\)$"
);
static_regex!(fraction_regex, r"^[0-9]+/[0-9]+$");
static_regex!(tshirt_regex, r"^([0-9]+(\.[0-9]+)?)?(xs|sm|md|lg|xl)$");
static_regex!(
    length_unit_regex,
    r"[0-9]+(%|px|r?em|[sdl]?v([hwib]|min|max)|pt|pc|in|cm|mm|cap|ch|ex|r?lh|cq(w|h|i|b|min|max))|(?-u:\b)(calc|min|max|clamp)\(.+\)|^0$"
);
static_regex!(
    color_function_regex,
    r"^(rgba?|hsla?|hwb|(ok)?(lab|lch)|color-mix)\(.+\)$"
);
static_regex!(
    image_regex,
    r"^(url|image|image-set|cross-fade|element|(repeating-)?(linear|radial|conic)-gradient)\(.+\)$"
);
static_regex!(
    shadow_regex,
    r"^(inset_)?-?(([0-9]+)?\.?([0-9]+)[a-z]+|0)_-?(([0-9]+)?\.?([0-9]+)[a-z]+|0)"
);

// ── 基础判断 ──────────────────────────────────────────────────

/// 十进制数（`4`, `0.5`, `.5`, `-1`, `1e3`）
pub fn is_number(value: &str) -> bool {
    if value.is_empty() || !value.bytes().any(|b| b.is_ascii_digit()) {
        return false;
    }
    value.parse::<f64>().is_ok_and(f64::is_finite)
}

/// 规范形式的整数（`3`, `-3`；不接受 `03`, `+3`）
pub fn is_integer(value: &str) -> bool {
    value
        .parse::<i64>()
        .is_ok_and(|n| n.to_string() == value)
}

pub fn is_percent(value: &str) -> bool {
    value.strip_suffix('%').is_some_and(is_number)
}

/// 数字、`px`/`full`/`screen` 或分数
pub fn is_length(value: &str) -> bool {
    is_number(value)
        || matches!(value, "px" | "full" | "screen")
        || fraction_regex().is_match(value)
}

fn is_length_only(value: &str) -> bool {
    length_unit_regex().is_match(value) && !color_function_regex().is_match(value)
}

fn is_image(value: &str) -> bool {
    image_regex().is_match(value)
}

fn is_shadow(value: &str) -> bool {
    shadow_regex().is_match(value)
}

fn never(_: &str) -> bool {
    false
}

fn always(_: &str) -> bool {
    true
}

/// `[label:value]` 形式的任意值
///
/// 带标签时只看标签是否在 `labels` 中，否则用 `test_value` 判断值本身。
fn is_arbitrary_value(value: &str, labels: &[&str], test_value: fn(&str) -> bool) -> bool {
    let Some(captures) = arbitrary_value_regex().captures(value) else {
        return false;
    };

    match captures.get(1).map(|m| m.as_str()) {
        Some(label) if !label.is_empty() && label != "0" => labels.contains(&label),
        _ => captures.get(2).is_some_and(|m| test_value(m.as_str())),
    }
}

/// `(label:--var)` 形式的任意变量
fn is_arbitrary_variable(value: &str, labels: &[&str], match_no_label: bool) -> bool {
    let Some(captures) = arbitrary_variable_regex().captures(value) else {
        return false;
    };

    match captures.get(1).map(|m| m.as_str()) {
        Some(label) if !label.is_empty() && label != "0" => labels.contains(&label),
        _ => match_no_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number() {
        for ok in ["0", "4", "1.5", ".5", "-1", "1e3", "100"] {
            assert!(Validator::Number.matches(ok), "{}", ok);
        }
        for bad in ["", "px", "1px", "inf", "NaN", "e", "1/2", "[4]"] {
            assert!(!Validator::Number.matches(bad), "{}", bad);
        }
    }

    #[test]
    fn test_integer() {
        assert!(Validator::Integer.matches("3"));
        assert!(Validator::Integer.matches("-3"));
        assert!(!Validator::Integer.matches("03"));
        assert!(!Validator::Integer.matches("+3"));
        assert!(!Validator::Integer.matches("1.5"));
        assert!(!Validator::Integer.matches(""));
    }

    #[test]
    fn test_fraction_and_percent() {
        assert!(Validator::Fraction.matches("1/2"));
        assert!(Validator::Fraction.matches("12/16"));
        assert!(!Validator::Fraction.matches("1/"));
        assert!(!Validator::Fraction.matches("a/2"));

        assert!(Validator::Percent.matches("50%"));
        assert!(Validator::Percent.matches("12.5%"));
        assert!(!Validator::Percent.matches("%"));
        assert!(!Validator::Percent.matches("50"));
    }

    #[test]
    fn test_length() {
        assert!(Validator::Length.matches("px"));
        assert!(Validator::Length.matches("full"));
        assert!(Validator::Length.matches("3"));
        assert!(Validator::Length.matches("2/3"));
        assert!(!Validator::Length.matches("auto"));
    }

    #[test]
    fn test_tshirt_size() {
        for ok in ["xs", "sm", "md", "lg", "xl", "2xl", "2.5xl"] {
            assert!(Validator::TshirtSize.matches(ok), "{}", ok);
        }
        for bad in ["", "xxl", "2xs-", "large", "2.xl"] {
            assert!(!Validator::TshirtSize.matches(bad), "{}", bad);
        }
    }

    #[test]
    fn test_any_non_arbitrary() {
        assert!(Validator::AnyNonArbitrary.matches("sans"));
        assert!(!Validator::AnyNonArbitrary.matches("[Inter]"));
        assert!(!Validator::AnyNonArbitrary.matches("(--font)"));
    }

    #[test]
    fn test_arbitrary_value() {
        assert!(Validator::ArbitraryValue.matches("[13px]"));
        assert!(Validator::ArbitraryValue.matches("[length:var(--x)]"));
        assert!(!Validator::ArbitraryValue.matches("[]"));
        assert!(!Validator::ArbitraryValue.matches("13px"));
    }

    #[test]
    fn test_arbitrary_value_length() {
        assert!(Validator::ArbitraryValueLength.matches("[3px]"));
        assert!(Validator::ArbitraryValueLength.matches("[3.5rem]"));
        assert!(Validator::ArbitraryValueLength.matches("[50%]"));
        assert!(Validator::ArbitraryValueLength.matches("[0]"));
        assert!(Validator::ArbitraryValueLength.matches("[calc(100%-1rem)]"));
        assert!(Validator::ArbitraryValueLength.matches("[length:var(--size)]"));
        assert!(!Validator::ArbitraryValueLength.matches("[#fff]"));
        assert!(!Validator::ArbitraryValueLength.matches("[rgb(1,2,3)]"));
        assert!(!Validator::ArbitraryValueLength.matches("[color:red]"));
    }

    #[test]
    fn test_digits_are_ascii_only() {
        // 阿拉伯-印度数字
        assert!(!Validator::ArbitraryValueLength.matches("[٣px]"));
        assert!(!Validator::ArbitraryValueShadow.matches("[٠_٣px_٦px]"));
        assert!(!Validator::TshirtSize.matches("٢xl"));
        assert!(!Validator::Length.matches("١/٢"));
    }

    #[test]
    fn test_arbitrary_value_image_and_shadow() {
        assert!(Validator::ArbitraryValueImage.matches("[url(/img.png)]"));
        assert!(Validator::ArbitraryValueImage.matches("[linear-gradient(red,blue)]"));
        assert!(Validator::ArbitraryValueImage.matches("[image:var(--bg)]"));
        assert!(!Validator::ArbitraryValueImage.matches("[#fff]"));

        assert!(Validator::ArbitraryValueShadow.matches("[0_35px_60px_-15px_rgba(0,0,0,0.3)]"));
        assert!(Validator::ArbitraryValueShadow.matches("[inset_0_1px_0]"));
        assert!(!Validator::ArbitraryValueShadow.matches("[red]"));
    }

    #[test]
    fn test_arbitrary_value_labels_only() {
        assert!(Validator::ArbitraryValuePosition.matches("[position:center]"));
        assert!(!Validator::ArbitraryValuePosition.matches("[center]"));
        assert!(Validator::ArbitraryValueSize.matches("[size:50%]"));
        assert!(Validator::ArbitraryValueFamilyName.matches("[family-name:Inter]"));
        assert!(!Validator::ArbitraryValueFamilyName.matches("[Inter]"));
        assert!(Validator::ArbitraryValueWeight.matches("[700]"));
        assert!(Validator::ArbitraryValueWeight.matches("[weight:bold]"));
        assert!(!Validator::ArbitraryValueWeight.matches("[color:red]"));
        assert!(Validator::ArbitraryValueNumber.matches("[3]"));
        assert!(!Validator::ArbitraryValueNumber.matches("[3px]"));
    }

    #[test]
    fn test_arbitrary_variable() {
        assert!(Validator::ArbitraryVariable.matches("(--my-color)"));
        assert!(!Validator::ArbitraryVariable.matches("--my-color"));

        assert!(Validator::ArbitraryVariableLength.matches("(length:--gap)"));
        assert!(!Validator::ArbitraryVariableLength.matches("(--gap)"));
        assert!(Validator::ArbitraryVariableShadow.matches("(--shadow)"));
        assert!(Validator::ArbitraryVariableShadow.matches("(shadow:--shadow)"));
        assert!(!Validator::ArbitraryVariableShadow.matches("(color:--shadow)"));
        assert!(Validator::ArbitraryVariableImage.matches("(url:--bg)"));
        assert!(Validator::ArbitraryVariableFamilyName.matches("(family-name:--font)"));
    }

    #[test]
    fn test_names_round_trip() {
        for (name, validator) in VALIDATOR_NAMES.entries() {
            assert_eq!(validator.name(), *name);
            assert_eq!(Validator::from_name(name), Some(*validator));
        }
        assert_eq!(Validator::from_name("nope"), None);
    }

    #[test]
    fn test_serde_by_name() {
        let json = serde_json::to_string(&Validator::ArbitraryValueLength).unwrap();
        assert_eq!(json, "\"arbitrary-value-length\"");
        let parsed: Validator = serde_json::from_str("\"tshirt-size\"").unwrap();
        assert_eq!(parsed, Validator::TshirtSize);
        assert!(serde_json::from_str::<Validator>("\"bogus\"").is_err());
    }
}
