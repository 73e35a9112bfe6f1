//! 内置的 Tailwind CSS v4 规则表
//!
//! class group 的顺序有意义：同一节点上的校验器按这里的顺序挂载，先匹配者胜出。
//! 例如 `text-lg` 先命中 `font-size`（`tshirt-size`），`text-red-500` 才落到 `text-color`。

use indexmap::IndexMap;

use crate::config::{Config, DEFAULT_CACHE_SIZE};
use crate::definition::ClassDefinition;
use crate::defs;
use crate::validators::Validator::*;

macro_rules! table {
    ($($key:literal => $value:expr),* $(,)?) => {{
        let mut table = IndexMap::new();
        $(table.insert($key.to_string(), $value);)*
        table
    }};
}

macro_rules! conflict_table {
    ($($key:literal => [$($target:literal),* $(,)?]),* $(,)?) => {{
        let mut table = IndexMap::new();
        $(table.insert($key.to_string(), vec![$($target.to_string()),*]);)*
        table
    }};
}

fn theme(scale: &str) -> ClassDefinition {
    ClassDefinition::theme(scale)
}

fn nest(key: &str, definitions: Vec<ClassDefinition>) -> ClassDefinition {
    ClassDefinition::nest(key, definitions)
}

/// 默认配置
pub fn default_config() -> Config {
    Config {
        prefix: None,
        cache_size: DEFAULT_CACHE_SIZE,
        theme: default_theme(),
        class_groups: default_class_groups(),
        conflicting_class_groups: default_conflicting_class_groups(),
        conflicting_class_group_modifiers: conflict_table! {
            "font-size" => ["leading"],
        },
        order_sensitive_modifiers: [
            "*",
            "**",
            "after",
            "backdrop",
            "before",
            "details-content",
            "file",
            "first-letter",
            "first-line",
            "marker",
            "placeholder",
            "selection",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
    }
}

fn default_theme() -> IndexMap<String, Vec<ClassDefinition>> {
    table! {
        "animate" => defs!["spin", "ping", "pulse", "bounce"],
        "aspect" => defs!["video"],
        "blur" => defs![TshirtSize],
        "breakpoint" => defs![TshirtSize],
        "color" => defs![Any],
        "container" => defs![TshirtSize],
        "drop-shadow" => defs![TshirtSize],
        "ease" => defs!["in", "out", "in-out"],
        "font" => defs![AnyNonArbitrary],
        "font-weight" => defs![
            "thin",
            "extralight",
            "light",
            "normal",
            "medium",
            "semibold",
            "bold",
            "extrabold",
            "black",
        ],
        "inset-shadow" => defs![TshirtSize],
        "leading" => defs!["none", "tight", "snug", "normal", "relaxed", "loose"],
        "perspective" => defs!["dramatic", "near", "normal", "midrange", "distant", "none"],
        "radius" => defs![TshirtSize],
        "shadow" => defs![TshirtSize],
        "spacing" => defs!["px", Number],
        "text" => defs![TshirtSize],
        "text-shadow" => defs![TshirtSize],
        "tracking" => defs!["tighter", "tight", "normal", "wide", "wider", "widest"],
    }
}

fn default_class_groups() -> IndexMap<String, Vec<ClassDefinition>> {
    table! {
        // 布局
        "aspect" => defs![
            nest("aspect", defs!["auto", "square", Fraction, ArbitraryValue, ArbitraryVariable, theme("aspect")]),
        ],
        "container" => defs!["container"],
        "columns" => defs![nest("columns", defs![Number, ArbitraryValue, ArbitraryVariable, theme("container")])],
        "break-after" => defs![nest("break-after", scale_break())],
        "break-before" => defs![nest("break-before", scale_break())],
        "break-inside" => defs![nest("break-inside", defs!["auto", "avoid", "avoid-page", "avoid-column"])],
        "box-decoration" => defs![nest("box-decoration", defs!["slice", "clone"])],
        "box" => defs![nest("box", defs!["border", "content"])],
        "display" => defs![
            "block",
            "inline-block",
            "inline",
            "flex",
            "inline-flex",
            "table",
            "inline-table",
            "table-caption",
            "table-cell",
            "table-column",
            "table-column-group",
            "table-footer-group",
            "table-header-group",
            "table-row-group",
            "table-row",
            "flow-root",
            "grid",
            "inline-grid",
            "contents",
            "list-item",
            "hidden",
        ],
        "sr" => defs!["sr-only", "not-sr-only"],
        "float" => defs![nest("float", defs!["right", "left", "none", "start", "end"])],
        "clear" => defs![nest("clear", defs!["left", "right", "both", "none", "start", "end"])],
        "isolation" => defs!["isolate", "isolation-auto"],
        "object-fit" => defs![nest("object", defs!["contain", "cover", "fill", "none", "scale-down"])],
        "object-position" => defs![nest("object", scale_position_with_arbitrary())],
        "overflow" => defs![nest("overflow", scale_overflow())],
        "overflow-x" => defs![nest("overflow-x", scale_overflow())],
        "overflow-y" => defs![nest("overflow-y", scale_overflow())],
        "overscroll" => defs![nest("overscroll", scale_overscroll())],
        "overscroll-x" => defs![nest("overscroll-x", scale_overscroll())],
        "overscroll-y" => defs![nest("overscroll-y", scale_overscroll())],
        "position" => defs!["static", "fixed", "absolute", "relative", "sticky"],
        "inset" => defs![nest("inset", scale_inset())],
        "inset-x" => defs![nest("inset-x", scale_inset())],
        "inset-y" => defs![nest("inset-y", scale_inset())],
        "start" => defs![nest("start", scale_inset())],
        "end" => defs![nest("end", scale_inset())],
        "top" => defs![nest("top", scale_inset())],
        "right" => defs![nest("right", scale_inset())],
        "bottom" => defs![nest("bottom", scale_inset())],
        "left" => defs![nest("left", scale_inset())],
        "visibility" => defs!["visible", "invisible", "collapse"],
        "z" => defs![nest("z", defs![Integer, "auto", ArbitraryVariable, ArbitraryValue])],

        // Flexbox 与 Grid
        "basis" => defs![
            nest("basis", [
                defs![Fraction, "full", "auto", theme("container")],
                scale_unambiguous_spacing(),
            ].concat()),
        ],
        "flex-direction" => defs![nest("flex", defs!["row", "row-reverse", "col", "col-reverse"])],
        "flex-wrap" => defs![nest("flex", defs!["nowrap", "wrap", "wrap-reverse"])],
        "flex" => defs![nest("flex", defs![Number, Fraction, "auto", "initial", "none", ArbitraryValue])],
        "grow" => defs![nest("grow", defs!["", Number, ArbitraryVariable, ArbitraryValue])],
        "shrink" => defs![nest("shrink", defs!["", Number, ArbitraryVariable, ArbitraryValue])],
        "order" => defs![
            nest("order", defs![Integer, "first", "last", "none", ArbitraryVariable, ArbitraryValue]),
        ],
        "grid-cols" => defs![nest("grid-cols", scale_grid_template_cols_rows())],
        "col-start-end" => defs![nest("col", scale_grid_col_row_start_and_end())],
        "col-start" => defs![nest("col-start", scale_grid_col_row_start_or_end())],
        "col-end" => defs![nest("col-end", scale_grid_col_row_start_or_end())],
        "grid-rows" => defs![nest("grid-rows", scale_grid_template_cols_rows())],
        "row-start-end" => defs![nest("row", scale_grid_col_row_start_and_end())],
        "row-start" => defs![nest("row-start", scale_grid_col_row_start_or_end())],
        "row-end" => defs![nest("row-end", scale_grid_col_row_start_or_end())],
        "grid-flow" => defs![nest("grid-flow", defs!["row", "col", "dense", "row-dense", "col-dense"])],
        "auto-cols" => defs![nest("auto-cols", scale_grid_auto_cols_rows())],
        "auto-rows" => defs![nest("auto-rows", scale_grid_auto_cols_rows())],
        "gap" => defs![nest("gap", scale_unambiguous_spacing())],
        "gap-x" => defs![nest("gap-x", scale_unambiguous_spacing())],
        "gap-y" => defs![nest("gap-y", scale_unambiguous_spacing())],
        "justify-content" => defs![nest("justify", [scale_align_primary_axis(), defs!["normal"]].concat())],
        "justify-items" => defs![nest("justify-items", [scale_align_secondary_axis(), defs!["normal"]].concat())],
        "justify-self" => defs![nest("justify-self", [defs!["auto"], scale_align_secondary_axis()].concat())],
        "align-content" => defs![nest("content", [defs!["normal"], scale_align_primary_axis()].concat())],
        "align-items" => defs![
            nest("items", [scale_align_secondary_axis(), defs![nest("baseline", defs!["", "last"])]].concat()),
        ],
        "align-self" => defs![
            nest("self", [
                defs!["auto"],
                scale_align_secondary_axis(),
                defs![nest("baseline", defs!["", "last"])],
            ].concat()),
        ],
        "place-content" => defs![nest("place-content", scale_align_primary_axis())],
        "place-items" => defs![nest("place-items", [scale_align_secondary_axis(), defs!["baseline"]].concat())],
        "place-self" => defs![nest("place-self", [defs!["auto"], scale_align_secondary_axis()].concat())],

        // 间距
        "p" => defs![nest("p", scale_unambiguous_spacing())],
        "px" => defs![nest("px", scale_unambiguous_spacing())],
        "py" => defs![nest("py", scale_unambiguous_spacing())],
        "ps" => defs![nest("ps", scale_unambiguous_spacing())],
        "pe" => defs![nest("pe", scale_unambiguous_spacing())],
        "pt" => defs![nest("pt", scale_unambiguous_spacing())],
        "pr" => defs![nest("pr", scale_unambiguous_spacing())],
        "pb" => defs![nest("pb", scale_unambiguous_spacing())],
        "pl" => defs![nest("pl", scale_unambiguous_spacing())],
        "m" => defs![nest("m", scale_margin())],
        "mx" => defs![nest("mx", scale_margin())],
        "my" => defs![nest("my", scale_margin())],
        "ms" => defs![nest("ms", scale_margin())],
        "me" => defs![nest("me", scale_margin())],
        "mt" => defs![nest("mt", scale_margin())],
        "mr" => defs![nest("mr", scale_margin())],
        "mb" => defs![nest("mb", scale_margin())],
        "ml" => defs![nest("ml", scale_margin())],
        "space-x" => defs![nest("space-x", scale_unambiguous_spacing())],
        "space-x-reverse" => defs!["space-x-reverse"],
        "space-y" => defs![nest("space-y", scale_unambiguous_spacing())],
        "space-y-reverse" => defs!["space-y-reverse"],

        // 尺寸
        "size" => defs![nest("size", scale_sizing())],
        "w" => defs![nest("w", [defs![theme("container"), "screen"], scale_sizing()].concat())],
        "min-w" => defs![nest("min-w", [defs![theme("container"), "screen", "none"], scale_sizing()].concat())],
        "max-w" => defs![
            nest("max-w", [
                defs![
                    theme("container"),
                    "screen",
                    "none",
                    "prose",
                    nest("screen", defs![theme("breakpoint")]),
                ],
                scale_sizing(),
            ].concat()),
        ],
        "h" => defs![nest("h", [defs!["screen", "lh"], scale_sizing()].concat())],
        "min-h" => defs![nest("min-h", [defs!["screen", "lh", "none"], scale_sizing()].concat())],
        "max-h" => defs![nest("max-h", [defs!["screen", "lh"], scale_sizing()].concat())],

        // 排版
        "font-size" => defs![
            nest("text", defs!["base", theme("text"), ArbitraryVariableLength, ArbitraryValueLength]),
        ],
        "font-smoothing" => defs!["antialiased", "subpixel-antialiased"],
        "font-style" => defs!["italic", "not-italic"],
        "font-weight" => defs![
            nest("font", defs![theme("font-weight"), ArbitraryVariableWeight, ArbitraryValueWeight]),
        ],
        "font-stretch" => defs![
            nest("font-stretch", defs![
                "ultra-condensed",
                "extra-condensed",
                "condensed",
                "semi-condensed",
                "normal",
                "semi-expanded",
                "expanded",
                "extra-expanded",
                "ultra-expanded",
                Percent,
                ArbitraryValue,
            ]),
        ],
        "font-family" => defs![
            nest("font", defs![ArbitraryVariableFamilyName, ArbitraryValueFamilyName, theme("font")]),
        ],
        "fvn-normal" => defs!["normal-nums"],
        "fvn-ordinal" => defs!["ordinal"],
        "fvn-slashed-zero" => defs!["slashed-zero"],
        "fvn-figure" => defs!["lining-nums", "oldstyle-nums"],
        "fvn-spacing" => defs!["proportional-nums", "tabular-nums"],
        "fvn-fraction" => defs!["diagonal-fractions", "stacked-fractons"],
        "tracking" => defs![nest("tracking", defs![theme("tracking"), ArbitraryVariable, ArbitraryValue])],
        "line-clamp" => defs![nest("line-clamp", defs![Number, "none", ArbitraryVariable, ArbitraryValueNumber])],
        "leading" => defs![nest("leading", [defs![theme("leading")], scale_unambiguous_spacing()].concat())],
        "list-image" => defs![nest("list-image", defs!["none", ArbitraryVariable, ArbitraryValue])],
        "list-style-position" => defs![nest("list", defs!["inside", "outside"])],
        "list-style-type" => defs![nest("list", defs!["disc", "decimal", "none", ArbitraryVariable, ArbitraryValue])],
        "text-alignment" => defs![nest("text", defs!["left", "center", "right", "justify", "start", "end"])],
        "placeholder-color" => defs![nest("placeholder", scale_color())],
        "text-color" => defs![nest("text", scale_color())],
        "text-decoration" => defs!["underline", "overline", "line-through", "no-underline"],
        "text-decoration-style" => defs![nest("decoration", [scale_line_style(), defs!["wavy"]].concat())],
        "text-decoration-thickness" => defs![
            nest("decoration", defs![Number, "from-font", "auto", ArbitraryVariable, ArbitraryValueLength]),
        ],
        "text-decoration-color" => defs![nest("decoration", scale_color())],
        "underline-offset" => defs![nest("underline-offset", defs![Number, "auto", ArbitraryVariable, ArbitraryValue])],
        "text-transform" => defs!["uppercase", "lowercase", "capitalize", "normal-case"],
        "text-overflow" => defs!["truncate", "text-ellipsis", "text-clip"],
        "text-wrap" => defs![nest("text", defs!["wrap", "nowrap", "balance", "pretty"])],
        "indent" => defs![nest("indent", scale_unambiguous_spacing())],
        "vertical-align" => defs![
            nest("align", defs![
                "baseline",
                "top",
                "middle",
                "bottom",
                "text-top",
                "text-bottom",
                "sub",
                "super",
                ArbitraryVariable,
                ArbitraryValue,
            ]),
        ],
        "whitespace" => defs![
            nest("whitespace", defs!["normal", "nowrap", "pre", "pre-line", "pre-wrap", "break-spaces"]),
        ],
        "break" => defs![nest("break", defs!["normal", "words", "all", "keep"])],
        "wrap" => defs![nest("wrap", defs!["break-word", "anywhere", "normal"])],
        "hyphens" => defs![nest("hyphens", defs!["none", "manual", "auto"])],
        "content" => defs![nest("content", defs!["none", ArbitraryVariable, ArbitraryValue])],

        // 背景
        "bg-attachment" => defs![nest("bg", defs!["fixed", "local", "scroll"])],
        "bg-clip" => defs![nest("bg-clip", defs!["border", "padding", "content", "text"])],
        "bg-origin" => defs![nest("bg-origin", defs!["border", "padding", "content"])],
        "bg-position" => defs![nest("bg", scale_bg_position())],
        "bg-repeat" => defs![nest("bg", scale_bg_repeat())],
        "bg-size" => defs![nest("bg", scale_bg_size())],
        "bg-image" => defs![
            nest("bg", defs![
                "none",
                ClassDefinition::nested([
                    ("linear", defs![
                        nest("to", defs!["t", "tr", "r", "br", "b", "bl", "l", "tl"]),
                        Integer,
                        ArbitraryVariable,
                        ArbitraryValue,
                    ]),
                    ("radial", defs!["", ArbitraryVariable, ArbitraryValue]),
                    ("conic", defs![Integer, ArbitraryVariable, ArbitraryValue]),
                ]),
                ArbitraryVariableImage,
                ArbitraryValueImage,
            ]),
        ],
        "bg-color" => defs![nest("bg", scale_color())],
        "gradient-from-pos" => defs![nest("from", scale_gradient_stop_position())],
        "gradient-via-pos" => defs![nest("via", scale_gradient_stop_position())],
        "gradient-to-pos" => defs![nest("to", scale_gradient_stop_position())],
        "gradient-from" => defs![nest("from", scale_color())],
        "gradient-via" => defs![nest("via", scale_color())],
        "gradient-to" => defs![nest("to", scale_color())],

        // 边框
        "rounded" => defs![nest("rounded", scale_radius())],
        "rounded-s" => defs![nest("rounded-s", scale_radius())],
        "rounded-e" => defs![nest("rounded-e", scale_radius())],
        "rounded-t" => defs![nest("rounded-t", scale_radius())],
        "rounded-r" => defs![nest("rounded-r", scale_radius())],
        "rounded-b" => defs![nest("rounded-b", scale_radius())],
        "rounded-l" => defs![nest("rounded-l", scale_radius())],
        "rounded-ss" => defs![nest("rounded-ss", scale_radius())],
        "rounded-se" => defs![nest("rounded-se", scale_radius())],
        "rounded-ee" => defs![nest("rounded-ee", scale_radius())],
        "rounded-es" => defs![nest("rounded-es", scale_radius())],
        "rounded-tl" => defs![nest("rounded-tl", scale_radius())],
        "rounded-tr" => defs![nest("rounded-tr", scale_radius())],
        "rounded-br" => defs![nest("rounded-br", scale_radius())],
        "rounded-bl" => defs![nest("rounded-bl", scale_radius())],
        "border-w" => defs![nest("border", scale_border_width())],
        "border-w-x" => defs![nest("border-x", scale_border_width())],
        "border-w-y" => defs![nest("border-y", scale_border_width())],
        "border-w-s" => defs![nest("border-s", scale_border_width())],
        "border-w-e" => defs![nest("border-e", scale_border_width())],
        "border-w-t" => defs![nest("border-t", scale_border_width())],
        "border-w-r" => defs![nest("border-r", scale_border_width())],
        "border-w-b" => defs![nest("border-b", scale_border_width())],
        "border-w-l" => defs![nest("border-l", scale_border_width())],
        "divide-x" => defs![nest("divide-x", scale_border_width())],
        "divide-x-reverse" => defs!["divide-x-reverse"],
        "divide-y" => defs![nest("divide-y", scale_border_width())],
        "divide-y-reverse" => defs!["divide-y-reverse"],
        "border-style" => defs![nest("border", [scale_line_style(), defs!["hidden", "none"]].concat())],
        "divide-style" => defs![nest("divide", [scale_line_style(), defs!["hidden", "none"]].concat())],
        "border-color" => defs![nest("border", scale_color())],
        "border-color-x" => defs![nest("border-x", scale_color())],
        "border-color-y" => defs![nest("border-y", scale_color())],
        "border-color-s" => defs![nest("border-s", scale_color())],
        "border-color-e" => defs![nest("border-e", scale_color())],
        "border-color-t" => defs![nest("border-t", scale_color())],
        "border-color-r" => defs![nest("border-r", scale_color())],
        "border-color-b" => defs![nest("border-b", scale_color())],
        "border-color-l" => defs![nest("border-l", scale_color())],
        "divide-color" => defs![nest("divide", scale_color())],
        "outline-style" => defs![nest("outline", [scale_line_style(), defs!["none", "hidden"]].concat())],
        "outline-offset" => defs![nest("outline-offset", defs![Number, ArbitraryVariable, ArbitraryValue])],
        "outline-w" => defs![nest("outline", defs![Number, ArbitraryVariable, ArbitraryValueLength])],
        "outline-color" => defs![nest("outline", scale_color())],

        // 效果
        "shadow" => defs![
            nest("shadow", defs!["", "none", theme("shadow"), ArbitraryVariableShadow, ArbitraryValueShadow]),
        ],
        "shadow-color" => defs![nest("shadow", scale_color())],
        "inset-shadow" => defs![
            nest("inset-shadow", defs!["none", theme("inset-shadow"), ArbitraryVariable, ArbitraryValue]),
        ],
        "inset-shadow-color" => defs![nest("inset-shadow", scale_color())],
        "ring-w" => defs![nest("ring", scale_border_width())],
        "ring-w-inset" => defs!["ring-inset"],
        "ring-color" => defs![nest("ring", scale_color())],
        "ring-offset-w" => defs![nest("ring-offset", defs![Number, ArbitraryValueLength])],
        "ring-offset-color" => defs![nest("ring-offset", scale_color())],
        "inset-ring-w" => defs![nest("inset-ring", scale_border_width())],
        "inset-ring-color" => defs![nest("inset-ring", scale_color())],
        "text-shadow" => defs![
            nest("text-shadow", defs!["none", theme("text-shadow"), ArbitraryVariableShadow, ArbitraryValueShadow]),
        ],
        "text-shadow-color" => defs![nest("text-shadow", scale_color())],
        "opacity" => defs![nest("opacity", defs![Number, ArbitraryValue, ArbitraryValue])],
        "mix-blend" => defs![
            nest("mix-blend", [scale_blend_mode(), defs!["plus-darker", "plus-lighter"]].concat()),
        ],
        "bg-blend" => defs![nest("bg-blend", scale_blend_mode())],
        "mask-clip" => defs![
            nest("mask-clip", defs!["border", "padding", "content", "fill", "stroke", "view"]),
            "mask-no-clip",
        ],
        "mask-composite" => defs![nest("mask", defs!["add", "subtract", "intersect", "exclude"])],
        "mask-image-linear-pos" => defs![nest("mask-linear", defs![Number])],
        "mask-image-linear-from-pos" => defs![nest("mask-linear-from", scale_mask_image_position())],
        "mask-image-linear-to-pos" => defs![nest("mask-linear-to", scale_mask_image_position())],
        "mask-image-linear-from-color" => defs![nest("mask-linear-from", scale_color())],
        "mask-image-linear-to-color" => defs![nest("mask-linear-to", scale_color())],
        "mask-image-t-from-pos" => defs![nest("mask-t-from", scale_mask_image_position())],
        "mask-image-t-to-pos" => defs![nest("mask-t-to", scale_mask_image_position())],
        "mask-image-t-from-color" => defs![nest("mask-t-from", scale_color())],
        "mask-image-t-to-color" => defs![nest("mask-t-to", scale_color())],
        "mask-image-r-from-pos" => defs![nest("mask-r-from", scale_mask_image_position())],
        "mask-image-r-to-pos" => defs![nest("mask-r-to", scale_mask_image_position())],
        "mask-image-r-from-color" => defs![nest("mask-r-from", scale_color())],
        "mask-image-r-to-color" => defs![nest("mask-r-to", scale_color())],
        "mask-image-b-from-pos" => defs![nest("mask-b-from", scale_mask_image_position())],
        "mask-image-b-to-pos" => defs![nest("mask-b-to", scale_mask_image_position())],
        "mask-image-b-from-color" => defs![nest("mask-b-from", scale_color())],
        "mask-image-b-to-color" => defs![nest("mask-b-to", scale_color())],
        "mask-image-l-from-pos" => defs![nest("mask-l-from", scale_mask_image_position())],
        "mask-image-l-to-pos" => defs![nest("mask-l-to", scale_mask_image_position())],
        "mask-image-l-from-color" => defs![nest("mask-l-from", scale_color())],
        "mask-image-l-to-color" => defs![nest("mask-l-to", scale_color())],
        "mask-image-x-from-pos" => defs![nest("mask-x-from", scale_mask_image_position())],
        "mask-image-x-to-pos" => defs![nest("mask-x-to", scale_mask_image_position())],
        "mask-image-x-from-color" => defs![nest("mask-x-from", scale_color())],
        "mask-image-x-to-color" => defs![nest("mask-x-to", scale_color())],
        "mask-image-y-from-pos" => defs![nest("mask-y-from", scale_mask_image_position())],
        "mask-image-y-to-pos" => defs![nest("mask-y-to", scale_mask_image_position())],
        "mask-image-y-from-color" => defs![nest("mask-y-from", scale_color())],
        "mask-image-y-to-color" => defs![nest("mask-y-to", scale_color())],
        "mask-image-radial" => defs![nest("mask-radial", defs![ArbitraryValue, ArbitraryValue])],
        "mask-image-radial-from-pos" => defs![nest("mask-radial-from", scale_mask_image_position())],
        "mask-image-radial-to-pos" => defs![nest("mask-radial-to", scale_mask_image_position())],
        "mask-image-radial-from-color" => defs![nest("mask-radial-from", scale_color())],
        "mask-image-radial-to-color" => defs![nest("mask-radial-to", scale_color())],
        "mask-image-radial-shape" => defs![nest("mask-radial", defs!["circle", "ellipse"])],
        "mask-image-radial-size" => defs![
            nest("mask-radial", defs![
                ClassDefinition::nested([
                    ("closest", defs!["side", "corner"]),
                    ("farthest", defs!["side", "corner"]),
                ]),
            ]),
        ],
        "mask-image-radial-pos" => defs![nest("mask-radial-at", scale_position())],
        "mask-image-conic-pos" => defs![nest("mask-conic-at", defs![Number])],
        "mask-image-conic-from-pos" => defs![nest("mask-conic-from", scale_mask_image_position())],
        "mask-image-conic-to-pos" => defs![nest("mask-conic-to", scale_mask_image_position())],
        "mask-image-conic-from-color" => defs![nest("mask-conic-from", scale_color())],
        "mask-image-conic-to-color" => defs![nest("mask-conic-to", scale_color())],
        "mask-mode" => defs![nest("mask", defs!["alpha", "luminance", "match"])],
        "mask-origin" => defs![nest("mask-origin", defs!["border", "padding", "content", "fill", "stroke", "view"])],
        "mask-position" => defs![nest("mask", scale_bg_position())],
        "mask-repeat" => defs![nest("mask", scale_bg_repeat())],
        "mask-size" => defs![nest("mask", scale_bg_size())],
        "mask-type" => defs![nest("mask-type", defs!["alpha", "luminance"])],
        "mask-image" => defs![nest("mask", defs!["none", ArbitraryVariable, ArbitraryValue])],

        // 滤镜
        "filter" => defs![nest("filter", defs!["", "none", ArbitraryVariable, ArbitraryValue])],
        "blur" => defs![nest("blur", scale_blur())],
        "brightness" => defs![nest("brightness", defs![Number, ArbitraryVariable, ArbitraryValue])],
        "contrast" => defs![nest("contrast", defs![Number, ArbitraryVariable, ArbitraryValue])],
        "drop-shadow" => defs![
            nest("drop-shadow", defs!["", "none", theme("drop-shadow"), ArbitraryVariableShadow, ArbitraryValueShadow]),
        ],
        "drop-shadow-color" => defs![nest("drop-shadow", scale_color())],
        "grayscale" => defs![nest("grayscale", defs!["", Number, ArbitraryVariable, ArbitraryValue])],
        "hue-rotate" => defs![nest("hue-rotate", defs![Number, ArbitraryVariable, ArbitraryValue])],
        "invert" => defs![nest("invert", defs!["", Number, ArbitraryVariable, ArbitraryValue])],
        "saturate" => defs![nest("saturate", defs![Number, ArbitraryVariable, ArbitraryValue])],
        "sepia" => defs![nest("sepia", defs!["", Number, ArbitraryVariable, ArbitraryValue])],
        "backdrop-filter" => defs![nest("backdrop-filter", defs!["", "none", ArbitraryVariable, ArbitraryValue])],
        "backdrop-blur" => defs![nest("backdrop-blur", scale_blur())],
        "backdrop-brightness" => defs![nest("backdrop-brightness", defs![Number, ArbitraryVariable, ArbitraryValue])],
        "backdrop-contrast" => defs![nest("backdrop-contrast", defs![Number, ArbitraryVariable, ArbitraryValue])],
        "backdrop-grayscale" => defs![nest("backdrop-grayscale", defs!["", Number, ArbitraryVariable, ArbitraryValue])],
        "backdrop-hue-rotate" => defs![nest("backdrop-hue-rotate", defs![Number, ArbitraryVariable, ArbitraryValue])],
        "backdrop-invert" => defs![nest("backdrop-invert", defs![Number, ArbitraryVariable, ArbitraryValue])],
        "backdrop-opacity" => defs![nest("backdrop-opacity", defs![Number, ArbitraryVariable, ArbitraryValue])],
        "backdrop-saturate" => defs![nest("backdrop-saturate", defs![Number, ArbitraryVariable, ArbitraryValue])],
        "backdrop-sepia" => defs![nest("backdrop-sepia", defs!["", Number, ArbitraryVariable, ArbitraryValue])],

        // 表格
        "border-collapse" => defs![nest("border", defs!["collapse", "separate"])],
        "border-spacing" => defs![nest("border-spacing", scale_unambiguous_spacing())],
        "border-spacing-x" => defs![nest("border-spacing-x", scale_unambiguous_spacing())],
        "border-spacing-y" => defs![nest("border-spacing-y", scale_unambiguous_spacing())],
        "table-layout" => defs![nest("table", defs!["auto", "fixed"])],
        "caption" => defs![nest("caption", defs!["top", "bottom"])],

        // 过渡与动画
        "transition" => defs![
            nest("transition", defs![
                "",
                "all",
                "colors",
                "opacity",
                "shadow",
                "transform",
                "none",
                ArbitraryVariable,
                ArbitraryValue,
            ]),
        ],
        "transition-behavior" => defs![nest("transition", defs!["normal", "discrete"])],
        "duration" => defs![nest("duration", defs![Number, "initial", ArbitraryVariable, ArbitraryValue])],
        "ease" => defs![
            nest("ease", defs!["linear", "initial", theme("ease"), ArbitraryVariable, ArbitraryValue]),
        ],
        "delay" => defs![nest("delay", defs![Number, "initial", ArbitraryVariable, ArbitraryValue])],
        "animate" => defs![nest("animate", defs!["none", theme("animate"), ArbitraryVariable, ArbitraryValue])],

        // 变换
        "backface" => defs![nest("backface", defs!["hidden", "visible"])],
        "perspective" => defs![nest("perspective", defs![theme("perspective"), ArbitraryVariable, ArbitraryValue])],
        "perspective-origin" => defs![nest("perspective-origin", scale_origin())],
        "rotate" => defs![nest("rotate", scale_rotate())],
        "rotate-x" => defs![nest("rotate-x", scale_rotate())],
        "rotate-y" => defs![nest("rotate-y", scale_rotate())],
        "rotate-z" => defs![nest("rotate-z", scale_rotate())],
        "scale" => defs![nest("scale", scale_scale())],
        "scale-x" => defs![nest("scale-x", scale_scale())],
        "scale-y" => defs![nest("scale-y", scale_scale())],
        "scale-z" => defs![nest("scale-z", scale_scale())],
        "scale-3d" => defs!["scale-3d"],
        "skew" => defs![nest("skew", scale_skew())],
        "skew-x" => defs![nest("skew-x", scale_skew())],
        "skew-y" => defs![nest("skew-y", scale_skew())],
        "transform" => defs![nest("transform", defs![ArbitraryVariable, ArbitraryValue, "", "none", "gpu", "cpu"])],
        "transform-origin" => defs![nest("origin", scale_position_with_arbitrary())],
        "transform-style" => defs![nest("transform", defs!["3d", "flat"])],
        "translate" => defs![nest("translate", scale_translate())],
        "translate-x" => defs![nest("translate-x", scale_translate())],
        "translate-y" => defs![nest("translate-y", scale_translate())],
        "translate-z" => defs![nest("translate-z", scale_translate())],
        "translate-none" => defs!["translate-none"],

        // 交互
        "accent" => defs![nest("accent", scale_color())],
        "appearance" => defs![nest("appearance", defs!["none", "auto"])],
        "caret-color" => defs![nest("caret", scale_color())],
        "color-scheme" => defs![
            nest("scheme", defs!["normal", "dark", "light", "light-dark", "only-dark", "only-light"]),
        ],
        "cursor" => defs![
            nest("cursor", defs![
                "auto",
                "default",
                "pointer",
                "wait",
                "text",
                "move",
                "help",
                "not-allowed",
                "none",
                "context-menu",
                "progress",
                "cell",
                "crosshair",
                "vertical-text",
                "alias",
                "copy",
                "no-drop",
                "grab",
                "grabbing",
                "all-scroll",
                "col-resize",
                "row-resize",
                "n-resize",
                "e-resize",
                "s-resize",
                "w-resize",
                "ne-resize",
                "nw-resize",
                "se-resize",
                "sw-resize",
                "ew-resize",
                "ns-resize",
                "nesw-resize",
                "nwse-resize",
                "zoom-in",
                "zoom-out",
                ArbitraryVariable,
                ArbitraryValue,
            ]),
        ],
        "field-sizing" => defs![nest("field-sizing", defs!["fixed", "content"])],
        "pointer-events" => defs![nest("pointer-events", defs!["auto", "none"])],
        "resize" => defs![nest("resize", defs!["none", "", "y", "x"])],
        "scroll-behavior" => defs![nest("scroll", defs!["auto", "smooth"])],
        "scroll-m" => defs![nest("scroll-m", scale_unambiguous_spacing())],
        "scroll-mx" => defs![nest("scroll-mx", scale_unambiguous_spacing())],
        "scroll-my" => defs![nest("scroll-my", scale_unambiguous_spacing())],
        "scroll-ms" => defs![nest("scroll-ms", scale_unambiguous_spacing())],
        "scroll-me" => defs![nest("scroll-me", scale_unambiguous_spacing())],
        "scroll-mt" => defs![nest("scroll-mt", scale_unambiguous_spacing())],
        "scroll-mr" => defs![nest("scroll-mr", scale_unambiguous_spacing())],
        "scroll-mb" => defs![nest("scroll-mb", scale_unambiguous_spacing())],
        "scroll-ml" => defs![nest("scroll-ml", scale_unambiguous_spacing())],
        "scroll-p" => defs![nest("scroll-p", scale_unambiguous_spacing())],
        "scroll-px" => defs![nest("scroll-px", scale_unambiguous_spacing())],
        "scroll-py" => defs![nest("scroll-py", scale_unambiguous_spacing())],
        "scroll-ps" => defs![nest("scroll-ps", scale_unambiguous_spacing())],
        "scroll-pe" => defs![nest("scroll-pe", scale_unambiguous_spacing())],
        "scroll-pt" => defs![nest("scroll-pt", scale_unambiguous_spacing())],
        "scroll-pr" => defs![nest("scroll-pr", scale_unambiguous_spacing())],
        "scroll-pb" => defs![nest("scroll-pb", scale_unambiguous_spacing())],
        "scroll-pl" => defs![nest("scroll-pl", scale_unambiguous_spacing())],
        "snap-align" => defs![nest("snap", defs!["start", "end", "center", "align-none"])],
        "snap-stop" => defs![nest("snap", defs!["normal", "always"])],
        "snap-type" => defs![nest("snap", defs!["none", "x", "y", "both"])],
        "snap-strictness" => defs![nest("snap", defs!["mandatory", "proximity"])],
        "touch" => defs![nest("touch", defs!["auto", "none", "manipulation"])],
        "touch-x" => defs![nest("touch-pan", defs!["x", "left", "right"])],
        "touch-y" => defs![nest("touch-pan", defs!["y", "up", "down"])],
        "touch-pz" => defs!["touch-pinch-zoom"],
        "select" => defs![nest("select", defs!["none", "text", "all", "auto"])],
        "will-change" => defs![
            nest("will-change", defs!["auto", "scroll", "contents", "transform", ArbitraryVariable, ArbitraryValue]),
        ],

        // SVG
        "fill" => defs![nest("fill", [defs!["none"], scale_color()].concat())],
        "stroke-w" => defs![
            nest("stroke", defs![Number, ArbitraryVariableLength, ArbitraryValueLength, ArbitraryValueNumber]),
        ],
        "stroke" => defs![nest("stroke", [defs!["none"], scale_color()].concat())],

        // 无障碍
        "forced-color-adjust" => defs![nest("forced-color-adjust", defs!["auto", "none"])],
    }
}

fn default_conflicting_class_groups() -> IndexMap<String, Vec<String>> {
    conflict_table! {
        "overflow" => ["overflow-x", "overflow-y"],
        "overscroll" => ["overscroll-x", "overscroll-y"],
        "inset" => ["inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left"],
        "inset-x" => ["right", "left"],
        "inset-y" => ["top", "bottom"],
        "flex" => ["basis", "grow", "shrink"],
        "gap" => ["gap-x", "gap-y"],
        "p" => ["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"],
        "px" => ["pr", "pl"],
        "py" => ["pt", "pb"],
        "m" => ["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"],
        "mx" => ["mr", "ml"],
        "my" => ["mt", "mb"],
        "size" => ["w", "h"],
        "font-size" => ["leading"],
        "fvn-normal" => [
            "fvn-ordinal",
            "fvn-slashed-zero",
            "fvn-figure",
            "fvn-spacing",
            "fvn-fraction",
        ],
        "fvn-ordinal" => ["fvn-normal"],
        "fvn-slashed-zero" => ["fvn-normal"],
        "fvn-figure" => ["fvn-normal"],
        "fvn-spacing" => ["fvn-normal"],
        "fvn-fraction" => ["fvn-normal"],
        "line-clamp" => ["display", "overflow"],
        "rounded" => [
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-ss",
            "rounded-se",
            "rounded-ee",
            "rounded-es",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-s" => ["rounded-ss", "rounded-es"],
        "rounded-e" => ["rounded-se", "rounded-ee"],
        "rounded-t" => ["rounded-tl", "rounded-tr"],
        "rounded-r" => ["rounded-tr", "rounded-br"],
        "rounded-b" => ["rounded-br", "rounded-bl"],
        "rounded-l" => ["rounded-tl", "rounded-bl"],
        "border-spacing" => ["border-spacing-x", "border-spacing-y"],
        "border-w" => [
            "border-w-x",
            "border-w-y",
            "border-w-s",
            "border-w-e",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
        "border-w-x" => ["border-w-r", "border-w-l"],
        "border-w-y" => ["border-w-t", "border-w-b"],
        "border-color" => [
            "border-color-x",
            "border-color-y",
            "border-color-s",
            "border-color-e",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
        "border-color-x" => ["border-color-r", "border-color-l"],
        "border-color-y" => ["border-color-t", "border-color-b"],
        "translate" => ["translate-x", "translate-y", "translate-none"],
        "translate-none" => ["translate", "translate-x", "translate-y", "translate-z"],
        "scroll-m" => [
            "scroll-mx",
            "scroll-my",
            "scroll-ms",
            "scroll-me",
            "scroll-mt",
            "scroll-mr",
            "scroll-mb",
            "scroll-ml",
        ],
        "scroll-mx" => ["scroll-mr", "scroll-ml"],
        "scroll-my" => ["scroll-mt", "scroll-mb"],
        "scroll-p" => [
            "scroll-px",
            "scroll-py",
            "scroll-ps",
            "scroll-pe",
            "scroll-pt",
            "scroll-pr",
            "scroll-pb",
            "scroll-pl",
        ],
        "scroll-px" => ["scroll-pr", "scroll-pl"],
        "scroll-py" => ["scroll-pt", "scroll-pb"],
        "touch" => ["touch-x", "touch-y", "touch-pz"],
        "touch-x" => ["touch"],
        "touch-y" => ["touch"],
        "touch-pz" => ["touch"],
    }
}

// ── 常用刻度 ──────────────────────────────────────────────────

fn scale_break() -> Vec<ClassDefinition> {
    defs!["auto", "avoid", "all", "avoid-page", "page", "left", "right", "column"]
}

fn scale_position() -> Vec<ClassDefinition> {
    defs![
        "center",
        "top",
        "bottom",
        "left",
        "right",
        "top-left",
        "left-top",
        "top-right",
        "right-top",
        "bottom-right",
        "right-bottom",
        "bottom-left",
        "left-bottom",
    ]
}

fn scale_position_with_arbitrary() -> Vec<ClassDefinition> {
    [scale_position(), defs![ArbitraryVariable, ArbitraryValue]].concat()
}

fn scale_overflow() -> Vec<ClassDefinition> {
    defs!["auto", "hidden", "clip", "visible", "scroll"]
}

fn scale_overscroll() -> Vec<ClassDefinition> {
    defs!["auto", "contain", "none"]
}

/// 不会和其他 class group 混淆的间距值
fn scale_unambiguous_spacing() -> Vec<ClassDefinition> {
    defs![ArbitraryVariable, ArbitraryValue, theme("spacing")]
}

fn scale_inset() -> Vec<ClassDefinition> {
    [defs![Fraction, "full", "auto"], scale_unambiguous_spacing()].concat()
}

fn scale_grid_template_cols_rows() -> Vec<ClassDefinition> {
    defs![Integer, "none", "subgrid", ArbitraryVariable, ArbitraryValue]
}

fn scale_grid_col_row_start_and_end() -> Vec<ClassDefinition> {
    defs![
        "auto",
        nest("span", defs!["full", Integer, ArbitraryVariable, ArbitraryValue]),
        Integer,
        ArbitraryVariable,
        ArbitraryValue,
    ]
}

fn scale_grid_col_row_start_or_end() -> Vec<ClassDefinition> {
    defs![Integer, "auto", ArbitraryVariable, ArbitraryValue]
}

fn scale_grid_auto_cols_rows() -> Vec<ClassDefinition> {
    defs!["auto", "min", "max", "fr", ArbitraryVariable, ArbitraryValue]
}

fn scale_align_primary_axis() -> Vec<ClassDefinition> {
    defs![
        "start",
        "end",
        "center",
        "between",
        "around",
        "evenly",
        "stretch",
        "baseline",
        "center-safe",
        "end-safe",
    ]
}

fn scale_align_secondary_axis() -> Vec<ClassDefinition> {
    defs!["start", "end", "center", "stretch", "center-safe", "end-safe"]
}

fn scale_margin() -> Vec<ClassDefinition> {
    [defs!["auto"], scale_unambiguous_spacing()].concat()
}

fn scale_sizing() -> Vec<ClassDefinition> {
    [
        defs![
            Fraction, "auto", "full", "dvw", "dvh", "lvw", "lvh", "svw", "svh", "min", "max", "fit",
        ],
        scale_unambiguous_spacing(),
    ]
    .concat()
}

fn scale_color() -> Vec<ClassDefinition> {
    defs![theme("color"), ArbitraryVariable, ArbitraryValue]
}

fn scale_bg_position() -> Vec<ClassDefinition> {
    [
        scale_position(),
        defs![
            ArbitraryVariablePosition,
            ArbitraryValuePosition,
            nest("position", defs![ArbitraryVariable, ArbitraryValue]),
        ],
    ]
    .concat()
}

fn scale_bg_repeat() -> Vec<ClassDefinition> {
    defs!["no-repeat", nest("repeat", defs!["", "x", "y", "space", "round"])]
}

fn scale_bg_size() -> Vec<ClassDefinition> {
    defs![
        "auto",
        "cover",
        "contain",
        ArbitraryVariableSize,
        ArbitraryValueSize,
        nest("size", defs![ArbitraryVariable, ArbitraryValue]),
    ]
}

fn scale_gradient_stop_position() -> Vec<ClassDefinition> {
    defs![Percent, ArbitraryVariableLength, ArbitraryValueLength]
}

fn scale_radius() -> Vec<ClassDefinition> {
    // 空字面量对应 v3 的 `rounded`
    defs!["", "none", "full", theme("radius"), ArbitraryVariable, ArbitraryValue]
}

fn scale_border_width() -> Vec<ClassDefinition> {
    defs!["", Number, ArbitraryVariableLength, ArbitraryValueLength]
}

fn scale_line_style() -> Vec<ClassDefinition> {
    defs!["solid", "dashed", "dotted", "double"]
}

fn scale_origin() -> Vec<ClassDefinition> {
    defs![
        "center",
        "top",
        "top-right",
        "right",
        "bottom-right",
        "bottom",
        "bottom-left",
        "left",
        "top-left",
        ArbitraryVariable,
        ArbitraryValue,
    ]
}

fn scale_blend_mode() -> Vec<ClassDefinition> {
    defs![
        "normal",
        "multiply",
        "screen",
        "overlay",
        "darken",
        "lighten",
        "color-dodge",
        "color-burn",
        "hard-light",
        "soft-light",
        "difference",
        "exclusion",
        "hue",
        "saturation",
        "color",
        "luminosity",
    ]
}

fn scale_mask_image_position() -> Vec<ClassDefinition> {
    defs![Number, Percent, ArbitraryVariable, ArbitraryValuePosition]
}

fn scale_blur() -> Vec<ClassDefinition> {
    defs!["", "none", theme("blur"), ArbitraryVariable, ArbitraryValue]
}

fn scale_rotate() -> Vec<ClassDefinition> {
    defs!["none", Number, ArbitraryVariable, ArbitraryValue]
}

fn scale_scale() -> Vec<ClassDefinition> {
    defs!["none", Number, ArbitraryVariable, ArbitraryValue]
}

fn scale_skew() -> Vec<ClassDefinition> {
    defs![Number, ArbitraryVariable, ArbitraryValue, theme("spacing")]
}

fn scale_translate() -> Vec<ClassDefinition> {
    defs![Fraction, "full", ArbitraryVariable, ArbitraryValue, theme("spacing")]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_map::ClassMap;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_valid() {
        let config = default_config();
        config.validate().unwrap();
        let map = ClassMap::new(&config).unwrap();
        assert_eq!(map.group_count(), config.class_groups.len());
    }

    #[test]
    fn test_default_groups() {
        let map = ClassMap::new(&default_config()).unwrap();
        let group = |class: &str| {
            map.class_group_id(class)
                .map(|g| map.group_label(g).into_owned())
        };

        assert_eq!(group("p-4").as_deref(), Some("p"));
        assert_eq!(group("px-2").as_deref(), Some("px"));
        assert_eq!(group("block").as_deref(), Some("display"));
        assert_eq!(group("text-lg").as_deref(), Some("font-size"));
        assert_eq!(group("text-red-500").as_deref(), Some("text-color"));
        assert_eq!(group("text-center").as_deref(), Some("text-alignment"));
        assert_eq!(group("bg-fixed").as_deref(), Some("bg-attachment"));
        assert_eq!(group("bg-blue-500").as_deref(), Some("bg-color"));
        assert_eq!(group("bg-[url(/a.png)]").as_deref(), Some("bg-image"));
        assert_eq!(group("shadow").as_deref(), Some("shadow"));
        assert_eq!(group("shadow-lg").as_deref(), Some("shadow"));
        assert_eq!(group("shadow-red-500").as_deref(), Some("shadow-color"));
        assert_eq!(group("leading-7").as_deref(), Some("leading"));
        assert_eq!(group("col-span-2").as_deref(), Some("col-start-end"));
        assert_eq!(group("-m-2").as_deref(), Some("m"));
        assert_eq!(group("w-1/2").as_deref(), Some("w"));
        assert_eq!(group("border-2").as_deref(), Some("border-w"));
        assert_eq!(group("border-red-500").as_deref(), Some("border-color"));
        assert_eq!(group("rounded").as_deref(), Some("rounded"));
        assert_eq!(group("font-bold").as_deref(), Some("font-weight"));
        assert_eq!(group("font-sans").as_deref(), Some("font-family"));
        assert_eq!(group("custom-class").as_deref(), None);
    }

    #[test]
    fn test_font_size_conflicts_with_leading() {
        let config = default_config();
        let map = ClassMap::new(&config).unwrap();
        let font_size = map.group_index("font-size").unwrap();
        let names = |postfix| {
            map.conflicting_groups(font_size, postfix)
                .map(|g| map.group_name(g).to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(names(false), vec!["leading"]);
        assert_eq!(names(true), vec!["leading", "leading"]);
    }
}
