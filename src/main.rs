use log::info;
use post_wall::{
    app::App, config::api::ApiConfig, modules::terminal::terminal_session::run_session,
};
use tokio::io::BufReader;

/// The main function that starts the terminal client
///
/// It reads the API location from the environment (or `.env`), builds the page and hands
/// stdin and stdout to the session loop.
///
/// # Internal Variables
///
/// - `config`: Location of the posts API.
/// - `app`: The root composer holding the post store and the creation form.
///
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = ApiConfig::from_env()?;
    info!("using posts API at {}", config.base_url);

    let app = App::from_config(config)?;
    run_session(app, BufReader::new(tokio::io::stdin()), &mut std::io::stdout()).await?;

    Ok(())
}
