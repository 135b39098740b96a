//! Application execution logic.
//!
//! This module turns one parsed subcommand into API calls and renders the
//! result as pretty-printed JSON.

use serde::Serialize;
use serde_json::{Map, Value, json};
use thiserror::Error;

use better_uptime::config::{Command, IncidentAction, MonitorAction, MonitorGroupAction, ValidatedConfig};
use better_uptime::monitors::{Monitor, MonitorListParams};
use better_uptime::transport::{HttpClient, HttpError, ReqwestClient};
use better_uptime::{BetterUptime, PageParams, UptimeError};

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// Failed to build the HTTP client.
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[source] HttpError),

    /// An API call failed.
    #[error(transparent)]
    Api(#[from] UptimeError),

    /// Failed to render the result.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    /// The command is handled before any client is built.
    #[error("'{0}' does not talk to the API")]
    LocalCommand(&'static str),
}

/// Executes one API subcommand and prints its result to stdout.
///
/// # Errors
///
/// Returns an error if the client cannot be built, the API call fails,
/// or the result cannot be rendered.
pub async fn execute(config: ValidatedConfig, command: Command) -> Result<(), RunError> {
    let http = ReqwestClient::with_timeout(config.timeout).map_err(RunError::HttpClient)?;
    let client = BetterUptime::with_client(http, config.base_url, &config.api_key)?;

    let output = dispatch(&client, command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Runs `command` against `client` and returns the value to print.
///
/// # Errors
///
/// Returns [`RunError::Api`] for failed calls and
/// [`RunError::LocalCommand`] for `init`.
pub async fn dispatch<C: HttpClient + Sync>(
    client: &BetterUptime<C>,
    command: Command,
) -> Result<Value, RunError> {
    match command {
        Command::Init { .. } => Err(RunError::LocalCommand("init")),
        Command::Monitors { action } => monitors(client, action).await,
        Command::MonitorGroups { action } => monitor_groups(client, action).await,
        Command::Incidents { action } => incidents(client, action).await,
    }
}

async fn monitors<C: HttpClient + Sync>(
    client: &BetterUptime<C>,
    action: MonitorAction,
) -> Result<Value, RunError> {
    let manager = client.monitors();

    match action {
        MonitorAction::List {
            url,
            name,
            page,
            per_page,
        } => {
            let params = MonitorListParams {
                url,
                pronounceable_name: name,
                page,
                per_page,
            };
            let monitors = manager.get_all(&params).await?;
            tracing::debug!("Listed {} monitors", monitors.len());
            monitors.iter().map(render_monitor).collect::<Result<Vec<_>, _>>().map(Value::Array)
        }
        MonitorAction::Get { id } => render_monitor(&manager.get(&id).await?),
        MonitorAction::Pause { id } => {
            let mut monitor = manager.get(&id).await?;
            monitor.pause().await?;
            tracing::info!("Paused monitor {id}");
            render_monitor(&monitor)
        }
        MonitorAction::Resume { id } => {
            let mut monitor = manager.get(&id).await?;
            monitor.resume().await?;
            tracing::info!("Resumed monitor {id}");
            render_monitor(&monitor)
        }
        MonitorAction::Move { id, group } => {
            let mut monitor = manager.get(&id).await?;
            monitor.move_to_group(group).await?;
            tracing::info!(
                "Moved monitor {id} to group {}",
                monitor.attributes().monitor_group_id.as_deref().unwrap_or("none")
            );
            render_monitor(&monitor)
        }
        MonitorAction::Set { id, assignments } => {
            let fields: Map<String, Value> = assignments.into_iter().collect();
            let mut monitor = manager.get(&id).await?;
            monitor.set_attributes(&fields)?;

            let changed = monitor.diff()?;
            monitor.save().await?;
            tracing::info!("Saved {} changed field(s) on monitor {id}", changed.len());

            Ok(json!({ "changed": changed, "monitor": render_monitor(&monitor)? }))
        }
        MonitorAction::Delete { id } => {
            let deleted = manager.delete(&id).await?;
            Ok(json!({ "id": id, "deleted": deleted }))
        }
    }
}

async fn monitor_groups<C: HttpClient + Sync>(
    client: &BetterUptime<C>,
    action: MonitorGroupAction,
) -> Result<Value, RunError> {
    let manager = client.monitor_groups();

    match action {
        MonitorGroupAction::List { page } => {
            let groups = manager
                .list(&PageParams {
                    page,
                    per_page: None,
                })
                .await?;
            render(&groups)
        }
        MonitorGroupAction::Monitors { id } => {
            let monitors = manager.monitors(&id).await?;
            monitors.iter().map(render_monitor).collect::<Result<Vec<_>, _>>().map(Value::Array)
        }
    }
}

async fn incidents<C: HttpClient + Sync>(
    client: &BetterUptime<C>,
    action: IncidentAction,
) -> Result<Value, RunError> {
    let manager = client.incidents();

    match action {
        IncidentAction::List { page, per_page } => {
            render(&manager.list(&PageParams { page, per_page }).await?)
        }
        IncidentAction::Acknowledge { id, by } => {
            let incident = manager.acknowledge(&id, by.as_deref()).await?;
            tracing::info!("Acknowledged incident {id}");
            render(&incident)
        }
        IncidentAction::Resolve { id, by } => {
            let incident = manager.resolve(&id, by.as_deref()).await?;
            tracing::info!("Resolved incident {id}");
            render(&incident)
        }
    }
}

fn render<T: Serialize + ?Sized>(value: &T) -> Result<Value, RunError> {
    Ok(serde_json::to_value(value)?)
}

fn render_monitor<C>(monitor: &Monitor<'_, C>) -> Result<Value, RunError> {
    Ok(json!({
        "id": monitor.id(),
        "type": monitor.resource_type(),
        "attributes": render(monitor.attributes())?,
    }))
}
