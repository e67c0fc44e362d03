use anyhow::Context;
use clap::Parser;
use portfolio_content::config::DEFAULT_API_BASE_URL;
use portfolio_content::core::contact::{ContactForm, DEFAULT_CONTACT_EMAIL};
use portfolio_content::page::NotificationKind;
use portfolio_content::utils::logger;
use portfolio_content::{ContactClient, HostPage, PageController, PageView, StaticContentSource};

#[derive(Parser)]
#[command(name = "contact")]
#[command(about = "Submit the portfolio contact form from the command line")]
struct Args {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,

    #[arg(long)]
    message: String,

    #[arg(long, default_value = DEFAULT_API_BASE_URL)]
    api_base_url: String,

    /// Shown in the error notice when the backend cannot be reached
    #[arg(long, default_value = DEFAULT_CONTACT_EMAIL)]
    contact_email: String,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    logger::init_cli_logger(args.verbose);
    tracing::info!("📨 Submitting contact form to {}", args.api_base_url);

    let mut controller = PageController::new(
        StaticContentSource,
        ContactClient::new(args.api_base_url),
        PageView::new(HostPage::builtin().context("built-in host page failed to bind")?),
    )
    .with_contact_email(args.contact_email);

    *controller.form_mut() = ContactForm::new(args.name, args.email, args.message);

    let notification = controller.submit_contact().await;
    match notification.kind() {
        Some(NotificationKind::Success) => {
            println!("{}", notification.message());
            Ok(())
        }
        _ => {
            eprintln!("{}", notification.message());
            std::process::exit(1);
        }
    }
}
