mod telemetry;

use healthsphere_api::Application;
use healthsphere_infra::setup_context;
use telemetry::{get_subscriber, init_subscriber};
use tracing::error;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    openssl_probe::init_ssl_cert_env_vars();
    // A missing .env file is fine, the environment may be set some other way
    let _ = dotenvy::dotenv();

    let subscriber = get_subscriber("healthsphere_server".into(), "info".into());
    init_subscriber(subscriber);

    let context = match setup_context() {
        Ok(context) => context,
        Err(e) => {
            error!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e));
        }
    };

    let app = Application::new(context).await?;
    app.start().await
}
