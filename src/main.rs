use anyhow::{Context, Result};
use clap::Parser;
use exam_dedup::{App, Config};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exam-dedup")]
#[command(about = "试卷题目查重工具 - 比较多份 Word 试卷中的重复与相似题目")]
#[command(version)]
struct Args {
    /// 待比较的试卷文件（至少 2 个，支持 .docx / .txt）
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// 保存报告的路径（.txt 或 .docx）
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// 导出比较结果 JSON 的路径
    #[arg(long)]
    json: Option<PathBuf>,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 不在标准输出打印报告
    #[arg(short, long)]
    quiet: bool,

    /// 输出详细日志
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    /// 命令行参数优先于配置文件和环境变量
    fn into_config(self) -> Result<(Config, Vec<PathBuf>, bool)> {
        let base = match &self.config {
            Some(path) => Config::from_file(path)
                .with_context(|| format!("无法加载配置文件: {}", path.display()))?,
            None => Config::default(),
        };
        let mut config = base.with_env();

        if let Some(output) = self.output {
            config.report_file = Some(output.to_string_lossy().to_string());
        }
        if let Some(json) = self.json {
            config.json_file = Some(json.to_string_lossy().to_string());
        }
        config.verbose_logging |= self.verbose;

        Ok((config, self.paths, self.quiet))
    }
}

fn main() -> Result<()> {
    let (config, paths, quiet) = Args::parse().into_config()?;

    // 初始化日志
    exam_dedup::utils::logging::init(config.verbose_logging, config.log_file.as_deref())?;

    // 初始化并运行应用
    let output = App::new(config).run(&paths)?;

    if !quiet {
        print!("{}", output.report);
    }

    Ok(())
}
