use clap::Parser;
use territory_map::app::{handle_fatal_error, initialize_app, AppConfig};
use territory_map::cli::{execute_command, Cli};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();
    let verbose = cli.verbose;

    let app = match AppConfig::new(verbose) {
        Ok(app) => app.with_config_path(cli.config),
        Err(e) => handle_fatal_error(e, verbose),
    };

    let result = async {
        let runtime = initialize_app(&app).await?;
        execute_command(cli.command, &runtime).await
    }
    .await;

    if let Err(e) = result {
        handle_fatal_error(e, verbose);
    }
}
