use once_cell::sync::Lazy;
use quality_gate::settings::read_settings_file;
use quality_gate::startup::Application;
use std::net::SocketAddr;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    // Output of `get_subscriber` cannot be assigned to a variable since
    // the Sink is part of the return type, therefore, both branches
    // initialize on their own.
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = quality_gate::telemetry::get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout,
        );
        quality_gate::telemetry::init_subscriber(subscriber)
            .expect("Failed to initialize test telemetry.");
    } else {
        let subscriber = quality_gate::telemetry::get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink,
        );
        quality_gate::telemetry::init_subscriber(subscriber)
            .expect("Failed to initialize test telemetry.");
    }
});

pub struct TestApp {
    pub addr: SocketAddr,
    pub client: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub async fn get_health(&self) -> reqwest::Response {
        self.client
            .get(self.url("/api/health"))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// spawn_app
///
/// Spawns the app on a real socket so requests go through hyper, the
/// way a load balancer probe would reach it.
pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let mut app_settings =
        read_settings_file().expect("Failed to read settings file.");
    // NOTE: Must bind to any available port, set to 0.
    // Otherwise all bound to same port and tests complain about used
    // port number.
    app_settings.port = 0u16;

    let app = Application::build(app_settings)
        .await
        .expect("Failed to build application.");
    let addr = app.address();
    let _ = tokio::spawn(app.run_until_stopped());

    TestApp {
        addr,
        client: reqwest::Client::new(),
    }
}
