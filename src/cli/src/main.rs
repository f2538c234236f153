//! lucky-draw - 抽奖命令行工具
//!
//! 从文件或标准输入读取参与者名单，校验后抽出中奖者并导出结果

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use lucky_draw_core::export::{self, ExportFormat};
use lucky_draw_core::{Draw, DrawConfig, DrawError, DrawSettings, DrawSettingsBuilder, Parser};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod display;

/// lucky-draw - 抽奖命令行工具
#[derive(ClapParser, Debug)]
#[command(name = "lucky-draw")]
#[command(version, about, long_about = None)]
struct Cli {
    /// 活动名称
    #[arg(long)]
    event: String,

    /// 奖项名称
    #[arg(long)]
    prize: String,

    /// 中奖数量
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// 名单文件，省略时从标准输入读取
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// 随机种子，相同种子与名单可复现结果
    #[arg(long)]
    seed: Option<String>,

    /// 显示完整邮箱
    #[arg(long, conflicts_with = "hide_emails")]
    show_emails: bool,

    /// 隐藏邮箱，覆盖 LUCKY_DRAW_SHOW_EMAILS
    #[arg(long)]
    hide_emails: bool,

    /// 导出格式: names | emails | winners
    #[arg(long)]
    export: Option<ExportFormat>,

    /// 导出目录，省略时导出内容输出到标准输出
    #[arg(long, requires = "export")]
    output_dir: Option<PathBuf>,

    /// 记录被跳过的行
    #[arg(long)]
    report_skipped: bool,

    /// 以 JSON 输出抽奖结果
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// 命令行参数覆盖环境变量配置
    fn settings(&self) -> DrawSettings {
        self.apply(DrawSettings::from_env())
    }

    fn apply(&self, base: DrawSettings) -> DrawSettings {
        let mut builder = DrawSettingsBuilder::from_settings(base);
        if let Some(seed) = &self.seed {
            builder = builder.seed(seed);
        }
        if self.show_emails {
            builder = builder.show_emails(true);
        }
        if self.hide_emails {
            builder = builder.show_emails(false);
        }
        builder.build()
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(draw_err) = err.downcast_ref::<DrawError>() {
                eprintln!("{}", draw_err);
                return ExitCode::from(2);
            }
            error!("抽奖失败: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = cli.settings();
    let text = read_roster(cli.input.as_deref())?;

    let report = Parser::new()
        .id_retry_cap(settings.id_retry_cap)
        .parse_with_report(&text);
    if cli.report_skipped {
        for skipped in &report.skipped {
            warn!("跳过第 {} 行 ({}): {}", skipped.line_number, skipped.reason, skipped.content);
        }
    }
    info!("读取参与者 {} 人", report.participants.len());

    let config = DrawConfig::new(cli.event.trim(), cli.prize.trim(), cli.count);
    let draw = Draw::new().seed(settings.seed.as_deref());
    let result = draw.run(&config, &report.participants)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", display::render_winners(&config, &result, settings.show_emails));
    }

    if let Some(format) = cli.export {
        let content = export::render(&result.winners, format);
        match &cli.output_dir {
            Some(dir) => {
                let path = dir.join(export::file_name(&config, format));
                std::fs::write(&path, content)
                    .with_context(|| format!("写入导出文件失败: {}", path.display()))?;
                info!("已导出 {}", path.display());
            }
            None => println!("{}", content),
        }
    }

    Ok(())
}

fn read_roster(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("读取名单文件失败: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("读取标准输入失败")?;
            Ok(text)
        }
    }
}
