use serde::Deserialize;
use wasm_bindgen::prelude::*;

use tailmerge_core::{ClassValue, TailwindMerge};
use tailmerge_tw_index::ConfigOverrides;

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct JsMergeOptions {
    /// 合并进默认配置的覆盖项
    config: Option<ConfigOverrides>,
    /// 是否启用进程内结果缓存
    cache: bool,
}

fn parse_options(options: JsValue) -> Result<JsMergeOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(JsMergeOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn build_engine(options: JsMergeOptions) -> Result<TailwindMerge, JsError> {
    let mut builder = TailwindMerge::builder();
    if let Some(config) = options.config {
        builder = builder.with_configuration(config);
    }
    if options.cache {
        builder = builder.with_memory_cache();
    }
    builder
        .build()
        .map_err(|e| JsError::new(&format!("Invalid configuration: {}", e)))
}

fn parse_class_value(value: JsValue) -> Result<ClassValue, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(ClassValue::Class(String::new()));
    }
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid class value: {}", e)))
}

// ── WASM 导出 ─────────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 合并引擎的 JS 包装
///
/// ```js
/// const tw = new TwMerge({ config: { prefix: "tw" }, cache: true });
/// tw.merge(["tw:p-2", { "tw:p-4": true }]); // "tw:p-4"
/// ```
#[wasm_bindgen]
pub struct TwMerge {
    engine: TailwindMerge,
}

#[wasm_bindgen]
impl TwMerge {
    /// @param options - `{ config?, cache? }`，可选
    #[wasm_bindgen(constructor)]
    pub fn new(options: JsValue) -> Result<TwMerge, JsError> {
        let engine = build_engine(parse_options(options)?)?;
        Ok(TwMerge { engine })
    }

    /// 合并类名
    ///
    /// @param value - 字符串、数组或 `{ [class]: boolean }` 对象，可任意嵌套
    pub fn merge(&self, value: JsValue) -> Result<String, JsError> {
        let value = parse_class_value(value)?;
        Ok(self.engine.merge(&value.flatten()))
    }

    /// 给每个类名加上同一个修饰符后合并
    pub fn modify(&self, modifier: &str, classes: &str) -> String {
        self.engine.modify(modifier, classes)
    }
}
