use clap::Parser;
use ocr_web_client::app::{App, ViewTarget};
use ocr_web_client::cli::{Args, Command};
use ocr_web_client::client::ProcessingClient;
use ocr_web_client::config::Config;
use ocr_web_client::mode::SubmitOptions;
use ocr_web_client::replay;
use ocr_web_client::submission::SubmissionState;
use ocr_web_client::surface::HeadlessSurface;
use ocr_web_client::viewer::Point;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from(&args);

    tracing::info!("Starting ocr-web-client v{}", env!("CARGO_PKG_VERSION"));
    tracing::debug!("Using service at {}", config.server_url);

    let client = ProcessingClient::new(&config)?;

    match args.command {
        Command::Submit {
            file,
            mode,
            white_background,
            out,
        } => {
            let mut app = App::new(client, HeadlessSurface::new(), HeadlessSurface::new());
            app.select_file(file.as_deref());

            let state = app.submit(mode, SubmitOptions { white_background }).await;
            if state != SubmissionState::Succeeded {
                let surface = app.submission().surface();
                let reason = surface
                    .alerts
                    .last()
                    .cloned()
                    .unwrap_or_else(|| surface.status.clone());
                anyhow::bail!("{}", reason);
            }

            if let Some(text) = &app.submission().surface().output_text {
                println!("{}", text);
            }
            if let Some(path) = app.download(&out)? {
                println!("{}", path.display());
            }
        }
        Command::Replay {
            image,
            script,
            origin_x,
            origin_y,
        } => {
            let events = replay::load_script(&script)?;
            let modal = HeadlessSurface::with_image_origin(Point::new(origin_x, origin_y));
            let mut app = App::new(client, HeadlessSurface::new(), modal);

            app.select_file(Some(&image));
            if !app.open_viewer(ViewTarget::Preview) {
                anyhow::bail!("{} is not a displayable image", image.display());
            }

            for snapshot in replay::run(&mut app, &events) {
                println!("{}", serde_json::to_string(&snapshot)?);
            }
        }
    }

    Ok(())
}
