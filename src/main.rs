use color_eyre::eyre;
use hookserve::{Config, Event, Server};
use tracing_subscriber::EnvFilter;

fn describe(event: &Event) -> eyre::Result<String> {
    let line = match event {
        Event::Push(evt) => format!(
            "{} pushed {} commits to {} branch {}",
            evt.sender.login,
            evt.commits.len(),
            evt.repository.full_name,
            evt.reference.name(),
        ),
        Event::PullRequest(evt) => format!(
            "{} {} a pull request with {} changes in {}",
            evt.sender.login,
            evt.action,
            evt.pull_request.changed_files.unwrap_or_default(),
            evt.repository.full_name,
        ),
        Event::Ping(evt) => format!(
            "Ping received for {} hook {}",
            evt.repository
                .as_ref()
                .map(|r| r.full_name.as_str())
                .or_else(|| evt.organization.as_ref().map(|o| o.login.as_str()))
                .unwrap_or(&evt.hook.kind),
            evt.hook.name.as_deref().unwrap_or(&evt.hook.kind),
        ),
        Event::Create(evt) => format!(
            "{} created {:?} {} in {}",
            evt.sender.login,
            evt.ref_type,
            evt.reference.name(),
            evt.repository.full_name,
        ),
        Event::Delete(evt) => format!(
            "{} deleted {:?} {} in {}",
            evt.sender.login,
            evt.ref_type,
            evt.reference.name(),
            evt.repository.full_name,
        ),
        Event::Unknown(evt) => format!(
            "Unknown event type: {}. Data: {}",
            evt.event_type,
            serde_json::to_string_pretty(&evt.payload)?,
        ),
    };
    Ok(line)
}

#[actix_web::main]
async fn main() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    color_eyre::install()?;
    tracing_log::LogTracer::init()?;
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .finish(),
    )?;

    let config = Config::from_env()?;
    let (server, mut events) = Server::new(config);
    let handle = server.spawn()?;

    while let Some(event) = events.recv().await {
        tracing::info!("{}", describe(&event)?);
    }

    handle.stop(true).await;
    Ok(())
}
