//! # Compose Command Module / 生成命令模块
//!
//! This module implements the composer's single action: load both documents,
//! resolve the matrix, then append the step summary and the pipeline outputs.
//!
//! 此模块实现生成器的唯一操作：加载两个文档、解析矩阵，
//! 然后追加步骤摘要和流水线输出。

use anyhow::{bail, Context, Result};
use colored::*;

use crate::{
    core::{
        config::ComposeConfig,
        documents::{load_platform_map, load_repros, PlatformMap},
        index::PlatformIndex,
        planner::{plan_matrix, MatrixPlan},
    },
    infra::{fs::append_text, t},
    reporting::{
        console::{print_matrix, print_warnings},
        outputs::render_pipeline_outputs,
        summary::render_step_summary,
    },
};

/// Executes the compose command with the provided configuration.
///
/// The step summary is written before the output destination is checked, so
/// a run without an output file still leaves its summary behind.
///
/// 使用给定的配置执行生成命令。
/// 步骤摘要会在检查输出位置之前写入，因此即使缺少输出文件，运行仍会留下摘要。
///
/// # Arguments
/// * `config` - Resolved document and output locations
/// * `locale` - The language locale to use for console messages
///
/// # Returns
/// The composed `MatrixPlan`
pub fn execute(config: &ComposeConfig, locale: &str) -> Result<MatrixPlan> {
    println!(
        "{}",
        t!("workspace_detected", locale = locale, path = config.workspace().display())
    );

    println!(
        "{}",
        t!("loading_platform_map", locale = locale, path = config.platform_map.display())
    );
    let platform_map = load_platform_map(&config.platform_map)?;
    let index = build_index(&platform_map, config.strict_labels, locale)?;
    println!(
        "{}",
        t!(
            "platforms_indexed",
            locale = locale,
            platforms = index.platform_count(),
            labels = index.label_count()
        )
        .cyan()
    );

    println!(
        "{}",
        t!("loading_repros", locale = locale, path = config.repros.display())
    );
    let repros = load_repros(&config.repros)?;
    println!(
        "{}",
        t!("repros_loaded", locale = locale, count = repros.len()).cyan()
    );

    let plan = plan_matrix(&index, &repros);

    print_warnings(&plan, index.conflicts(), locale);
    print_matrix(&plan, locale);

    write_step_summary(config, &plan, locale)?;
    write_pipeline_outputs(config, &plan, locale)?;

    Ok(plan)
}

/// Builds the platform index, rejecting label conflicts when `strict` is set.
///
/// 构建平台索引；当设置了 `strict` 时拒绝标签冲突。
pub fn build_index(platform_map: &PlatformMap, strict: bool, locale: &str) -> Result<PlatformIndex> {
    let index = PlatformIndex::build(platform_map.platforms.iter().cloned());

    if strict {
        if let Some(conflict) = index.conflicts().first() {
            bail!(t!(
                "label_conflict_strict",
                locale = locale,
                label = conflict.label.as_str(),
                previous = conflict.previous.as_str(),
                current = conflict.current.as_str()
            )
            .to_string());
        }
    }

    Ok(index)
}

fn write_step_summary(config: &ComposeConfig, plan: &MatrixPlan, locale: &str) -> Result<()> {
    let Some(path) = &config.step_summary else {
        println!("{}", t!("summary_not_configured", locale = locale).dimmed());
        return Ok(());
    };

    append_text(path, &render_step_summary(plan))
        .with_context(|| t!("summary_write_failed", locale = locale, path = path.display()))?;
    println!(
        "{}",
        t!("summary_written", locale = locale, path = path.display()).green()
    );
    Ok(())
}

fn write_pipeline_outputs(config: &ComposeConfig, plan: &MatrixPlan, locale: &str) -> Result<()> {
    let Some(path) = &config.output else {
        bail!(t!("output_not_defined", locale = locale).to_string());
    };

    let outputs = render_pipeline_outputs(plan)?;
    append_text(path, &outputs)
        .with_context(|| t!("outputs_write_failed", locale = locale, path = path.display()))?;
    println!(
        "{}",
        t!("outputs_written", locale = locale, path = path.display()).green()
    );
    Ok(())
}
