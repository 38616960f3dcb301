use anyhow::Result;

use irmix::config::AppConfig;
use irmix::telemetry;

fn main() -> Result<()> {
    let config = AppConfig::parse_args()?;
    telemetry::init_tracing(&config);
    run(&config)
}

#[cfg(windows)]
fn run(config: &AppConfig) -> Result<()> {
    use std::thread;

    use anyhow::Context;
    use irmix::controller::SessionController;
    use irmix::mixer::WasapiEndpoint;
    use irmix::remote::{self, Button};
    use irmix::transport::{LineTransport, SerialTransport};

    let endpoint = WasapiEndpoint::new().context("audio endpoint initialization failed")?;

    if config.list_sessions {
        return list_sessions(&endpoint);
    }

    let mut transport = SerialTransport::open(&config.port, config.baud, config.read_timeout())?;
    let mut controller = SessionController::new();

    // Populate the remote display once before the first button arrives.
    controller.handle(Button::Power, "", &endpoint, &mut transport)?;

    loop {
        if let Some(line) = transport.poll_line().context("serial read failed")? {
            if !line.is_empty() {
                controller
                    .handle(remote::decode(&line), &line, &endpoint, &mut transport)
                    .context("serial write failed")?;
            }
        }
        thread::sleep(config.poll_interval());
    }
}

#[cfg(windows)]
fn list_sessions(endpoint: &irmix::mixer::WasapiEndpoint) -> Result<()> {
    use irmix::mixer::{derive_label, AudioEndpoint};

    let count = endpoint.session_count()?;
    for index in 0..count {
        match endpoint.session(index) {
            Ok(session) => {
                let identity = session.identity().unwrap_or_default();
                let label = derive_label(&identity);
                match session.volume() {
                    Ok(level) => println!("{index}: {label} (volume {level:.2})"),
                    Err(_) => println!("{index}: {label}"),
                }
            }
            Err(err) => tracing::warn!("session {index}: {err}"),
        }
    }
    Ok(())
}

#[cfg(not(windows))]
fn run(_config: &AppConfig) -> Result<()> {
    anyhow::bail!(
        "irmix controls Windows per-application audio sessions; this platform is unsupported"
    )
}
