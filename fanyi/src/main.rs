//! fanyi命令行
//!
//! ```text
//! fanyi "Hello" --vendor baidu --to zh
//! cat lines.txt | fanyi --vendor tencent --batch --to en
//! ```

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use fanyi::config::{FileConfig, VendorConfig};
use fanyi::{Lang, Provider, Translator, Vendor};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fanyi", version, about = "Translate text with Aliyun, Baidu, Tencent, Volcengine or NiuTrans")]
struct Args {
    /// Text to translate, prompted for on stdin when omitted
    text: Option<String>,

    /// aliyun | baidu | tencent | volc | niutrans
    #[arg(long)]
    vendor: Option<Vendor>,

    /// Source language code, `auto` to let the vendor detect it
    #[arg(long)]
    from: Option<Lang>,

    /// Target language code
    #[arg(long)]
    to: Option<Lang>,

    /// TOML config file, environment variables are used when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Translate every stdin line as one batch item
    #[arg(long)]
    batch: bool,

    /// Print supported languages and exit
    #[arg(long)]
    list_langs: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    // .env不存在时忽略
    let _ = dotenvy::dotenv();
    setup_logging(args.verbose)?;

    if args.list_langs {
        for lang in Lang::ALL {
            println!("{:<6} {}", lang.code(), lang.name());
        }
        return Ok(());
    }

    let (vendor, config) = load_config(&args)?;
    debug!(%vendor, "loaded config");
    let provider = Provider::new(config)?;

    let mut stdin = BufReader::new(tokio::io::stdin());
    let text = match (&args.text, args.batch) {
        (Some(t), _) => Some(t.clone()),
        (None, false) => Some(prompt(&mut stdin, "please give me your text: ").await?),
        (None, true) => None,
    };
    let from = match args.from {
        Some(l) => l,
        None => {
            prompt_lang(
                &mut stdin,
                "please input your text lang code (default auto): ",
                Lang::Auto,
            )
            .await?
        }
    };
    let to = match args.to {
        Some(l) => l,
        None => {
            prompt_lang(
                &mut stdin,
                "please input your target lang code (default zh): ",
                Lang::Zh,
            )
            .await?
        }
    };

    if args.batch {
        let batch = provider
            .as_batch()
            .ok_or_else(|| anyhow!("{vendor} does not support batch translation"))?;
        let mut input = String::new();
        stdin.read_to_string(&mut input).await?;
        let queries: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();
        let results = batch.translate_batch(&queries, from, to).await?;
        println!("{}", results.join("\n"));
        return Ok(());
    }

    let text = text.unwrap_or_default();
    let res = provider.translate(&text, from, to).await?;
    println!("{res}");
    Ok(())
}

/// 指定了配置文件时从文件读取，否则读取环境变量
fn load_config(args: &Args) -> Result<(Vendor, VendorConfig)> {
    match &args.config {
        Some(path) => {
            let file = FileConfig::from_file(path)?;
            let vendor = args.vendor.or(file.vendor).unwrap_or(Vendor::Aliyun);
            Ok((vendor, file.vendor_config(vendor)?))
        }
        None => {
            let vendor = args.vendor.unwrap_or(Vendor::Aliyun);
            Ok((vendor, VendorConfig::from_env(vendor)?))
        }
    }
}

fn setup_logging(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}

async fn prompt<R>(stdin: &mut R, message: &str) -> Result<String>
where
    R: AsyncBufReadExt + Unpin,
{
    // 提示写到stderr，stdout只输出译文
    eprint!("{message}");
    let mut line = String::new();
    let n = stdin.read_line(&mut line).await?;
    if n == 0 {
        bail!("stdin closed");
    }
    Ok(line.trim().to_owned())
}

/// 直接回车时使用`default`
async fn prompt_lang<R>(stdin: &mut R, message: &str, default: Lang) -> Result<Lang>
where
    R: AsyncBufReadExt + Unpin,
{
    let code = prompt(stdin, message).await?;
    if code.is_empty() {
        return Ok(default);
    }
    code.parse::<Lang>()
        .with_context(|| format!("unsupported language `{code}`"))
}
