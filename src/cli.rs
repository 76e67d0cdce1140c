// src/cli.rs
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use colored::*;
use std::{env, path::PathBuf};

use crate::core::config::{ComposeConfig, OUTPUT_ENV, STEP_SUMMARY_ENV, WORKSPACE_ENV};
use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for `--lang <VALUE>` or `--lang=<VALUE>`.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        return args.get(pos + 1).cloned();
    }
    args.iter()
        .find_map(|arg| arg.strip_prefix("--lang="))
        .map(str::to_string)
}

/// Builds the command-line interface with help text in `locale`.
///
/// Every flag is optional; the CI-provided environment variables fill in
/// the output destinations and the workspace.
///
/// 使用 `locale` 语言的帮助文本构建命令行接口。
/// 所有参数都是可选的；CI 提供的环境变量会填充输出位置和工作区。
pub fn build_cli(locale: &str) -> Command {
    Command::new("repro-matrix")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("workspace")
                .long("workspace")
                .help(t!("arg_workspace", locale = locale).to_string())
                .value_name("WORKSPACE")
                .env(WORKSPACE_ENV)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("platform-map")
                .long("platform-map")
                .help(t!("arg_platform_map", locale = locale).to_string())
                .value_name("PLATFORM_MAP")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("repros")
                .long("repros")
                .help(t!("arg_repros", locale = locale).to_string())
                .value_name("REPROS")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("step-summary")
                .long("step-summary")
                .help(t!("arg_step_summary", locale = locale).to_string())
                .value_name("STEP_SUMMARY")
                .env(STEP_SUMMARY_ENV)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .help(t!("arg_output", locale = locale).to_string())
                .value_name("OUTPUT")
                .env(OUTPUT_ENV)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("strict-labels")
                .long("strict-labels")
                .help(t!("arg_strict_labels", locale = locale).to_string())
                .action(ArgAction::SetTrue),
        )
}

/// Turns parsed arguments into a [`ComposeConfig`].
///
/// The workspace falls back to the current directory.
///
/// 将解析后的参数转换为 [`ComposeConfig`]。工作区缺省为当前目录。
pub fn config_from_matches(matches: &ArgMatches) -> Result<ComposeConfig> {
    let workspace = match matches
        .get_one::<PathBuf>("workspace")
        .filter(|p| !p.as_os_str().is_empty())
    {
        Some(path) => path.clone(),
        None => env::current_dir().context("Failed to determine the current directory")?,
    };

    Ok(ComposeConfig::for_workspace(workspace)
        .with_platform_map(matches.get_one::<PathBuf>("platform-map").cloned())
        .with_repros(matches.get_one::<PathBuf>("repros").cloned())
        .with_step_summary(matches.get_one::<PathBuf>("step-summary").cloned())
        .with_output(matches.get_one::<PathBuf>("output").cloned())
        .with_strict_labels(matches.get_flag("strict-labels")))
}

pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let locale = crate::init(pre_parse_language().as_deref());

    let matches = build_cli(locale).get_matches();
    let config = config_from_matches(&matches)?;

    commands::compose::execute(&config, locale)?;
    Ok(())
}

/// Reports a fatal error on stderr with its full context chain.
///
/// 在 stderr 上报告致命错误及其完整的上下文链。
pub fn report_failure(error: &anyhow::Error) {
    eprintln!(
        "{} {:#}",
        format!("{}:", t!("compose_failed")).red().bold(),
        error
    );
}
