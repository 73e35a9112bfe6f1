/// 基本使用示例：展示如何合并 Tailwind 类名
///
/// 运行示例（`RUST_LOG=debug` 可以看到缓存命中情况）：
/// ```bash
/// cargo run --example basic_usage -p tailmerge-core
/// ```
use tailmerge_core::{ClassValue, TailwindMerge};
use tailmerge_tw_index::load_overrides_from_json;

fn main() {
    env_logger::init();

    println!("=== TailMerge 基本使用示例 ===\n");

    // 1. 默认配置
    let tw = TailwindMerge::builder()
        .with_memory_cache()
        .build()
        .expect("Failed to build engine");

    let inputs = [
        "px-2 py-1 bg-red hover:bg-dark-red p-3 bg-[#B91C1C]",
        "text-lg/7 leading-9 text-sm",
        "hover:focus:p-2 focus:hover:p-4 my-class",
        "px-2 py-1 bg-red hover:bg-dark-red p-3 bg-[#B91C1C]",
    ];
    for input in inputs {
        println!("  {:<55} → {}", input, tw.merge(input));
    }

    // 2. 条件类名
    let values = [
        ClassValue::from("p-2 text-sm"),
        ClassValue::from([("p-4", true), ("text-lg", false)]),
    ];
    println!("\n  merge_values → {}", tw.merge_values(&values));
    println!("  modify       → {}", tw.modify("md", "p-2 px-4"));

    // 3. JSON 覆盖配置
    let overrides = load_overrides_from_json(
        r#"{
            "prefix": "tw",
            "classGroups": { "elevation": [{ "elevation": ["low", "high"] }] }
        }"#,
    )
    .expect("Failed to parse overrides");

    let custom = TailwindMerge::builder()
        .with_configuration(overrides)
        .build()
        .expect("Failed to build engine");

    println!(
        "\n  prefix tw    → {}",
        custom.merge("tw:elevation-low tw:elevation-high p-2 tw:p-1")
    );
}
