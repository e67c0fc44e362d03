use clap::Parser;
use portfolio_content::config::toml_config::{LogFormat, SiteConfig};
use portfolio_content::core::source::{PROJECTS_PATH, RESUME_PATH};
use portfolio_content::core::contact::CONTACT_PATH;
use portfolio_content::core::site::render_site;
use portfolio_content::core::ConfigProvider;
use portfolio_content::utils::error::ErrorSeverity;
use portfolio_content::utils::{logger, validation::Validate};
use portfolio_content::{HostPage, LocalStorage};

#[derive(Parser)]
#[command(name = "toml-render")]
#[command(about = "Render the portfolio page with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "portfolio.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override offline setting from config
    #[arg(long)]
    offline: Option<bool>,

    /// Dry run - show what would be rendered without writing anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置，日誌格式由配置決定
    let mut config = match SiteConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(1);
        }
    };

    match config.log_format() {
        LogFormat::Json => logger::init_json_logger(),
        LogFormat::Compact => logger::init_cli_logger(args.verbose || config.verbose()),
    }

    tracing::info!("🚀 Starting TOML-based page render");
    tracing::info!("📁 Configuration loaded from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(offline) = args.offline {
        config.render.offline = Some(offline);
        tracing::info!("🔧 Offline mode overridden to: {}", offline);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    tracing::info!("✅ Configuration loaded and validated successfully");

    display_config_summary(&config, &args);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - Nothing will be written");
        perform_dry_run(&config)?;
        return Ok(());
    }

    let storage = LocalStorage::new(config.output_path().to_string());

    match render_site(&config, storage).await {
        Ok(output_path) => {
            tracing::info!("✅ Page build completed successfully!");
            println!("✅ Page build completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Page build failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}

fn display_config_summary(config: &SiteConfig, args: &Args) {
    println!("📋 Configuration Summary:");
    println!("  Site: {}", config.site.name);
    if let Some(description) = &config.site.description {
        println!("  Description: {}", description);
    }
    println!("  API: {}", config.api_base_url());
    println!("  Output: {}", config.output_path());
    println!("  Host Page: {}", config.host_page().unwrap_or("(built-in)"));
    println!("  Offline: {}", config.offline());
    println!("  Contact: {}", config.contact_email());

    if args.dry_run {
        println!("  🔍 DRY RUN MODE ENABLED");
    }

    println!();
}

fn perform_dry_run(config: &SiteConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Dry Run Analysis:");
    println!();

    // 資料來源分析
    println!("📡 Content Sources:");
    if config.offline() {
        println!("  📴 Offline: built-in content only");
    } else {
        let base = config.api_base_url().trim_end_matches('/');
        println!("  GET {}{}", base, PROJECTS_PATH);
        println!("  GET {}{}", base, RESUME_PATH);
        println!("  POST {}{} (contact form)", base, CONTACT_PATH);
        println!("  Either request failing switches the whole page to built-in content");
    }

    // Host page 綁定檢查
    println!();
    println!("📄 Host Page:");
    let host = match config.host_page() {
        Some(path) => HostPage::from_file(path)?,
        None => HostPage::builtin()?,
    };
    println!("  ✅ All required elements present ({} bytes)", host.markup().len());

    println!();
    println!("💾 Output:");
    println!("  {}/index.html", config.output_path().trim_end_matches('/'));

    println!();
    println!("✅ Dry run analysis complete. Use --verbose for more details during actual run.");

    Ok(())
}
