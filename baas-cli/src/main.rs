mod config;

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use baas_core::provider::{Provider, ProviderResult};
use baas_core::resource::{Resource, State, Value};
use baas_core::schema::{AttributeSchema, ResourceSchema};
use baas_provider::config::{API_TOKEN_ENV, ENDPOINT_ENV, TENANT_ID_ENV};
use baas_provider::schemas::{self, PROTECTION_GROUP};
use baas_provider::{BackupRecoveryProvider, ProviderConfig};
use baas_state::{LockInfo, ResourceState, StateBackend, StateFile, create_backend};

use config::Configuration;

const PROVIDER_NAME: &str = "backup_recovery";
const TENANT_ID: &str = "x_ibm_tenant_id";
const DEFAULT_CONFIG: &str = "baas.json";

#[derive(Parser)]
#[command(name = "baas")]
#[command(about = "Manage backup-and-recovery protection groups and runs", long_about = None)]
struct Cli {
    /// API endpoint, e.g. https://backup.example.com/v2
    #[arg(long, global = true, env = ENDPOINT_ENV)]
    endpoint: Option<String>,

    /// Bearer token sent with every request
    #[arg(long, global = true, env = API_TOKEN_ENV, hide_env_values = true)]
    api_token: Option<String>,

    /// Tenant for resources that do not set x_ibm_tenant_id
    #[arg(long, global = true, env = TENANT_ID_ENV)]
    tenant_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the configuration file against the provider schemas
    Validate {
        #[arg(default_value = DEFAULT_CONFIG)]
        file: PathBuf,
    },
    /// Read data sources and create or update resources
    Apply {
        #[arg(default_value = DEFAULT_CONFIG)]
        file: PathBuf,
    },
    /// Re-read everything recorded in state
    Refresh {
        #[arg(default_value = DEFAULT_CONFIG)]
        file: PathBuf,
    },
    /// Delete every managed resource recorded in state
    Destroy {
        #[arg(default_value = DEFAULT_CONFIG)]
        file: PathBuf,

        /// Skip confirmation prompt (auto-approve)
        #[arg(long)]
        auto_approve: bool,
    },
    /// Print the recorded state
    Show {
        #[arg(default_value = DEFAULT_CONFIG)]
        file: PathBuf,
    },
    /// Describe resource types, or the attributes of one
    Schema { resource_type: Option<String> },
    /// Remove a state lock left behind by an interrupted command
    ForceUnlock {
        lock_id: String,

        #[arg(default_value = DEFAULT_CONFIG)]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let flags = ProviderConfig {
        endpoint: cli.endpoint.unwrap_or_default(),
        api_token: cli.api_token,
        tenant_id: cli.tenant_id,
    };

    let result = match cli.command {
        Commands::Validate { file } => run_validate(&file, flags),
        Commands::Apply { file } => run_apply(&file, flags).await,
        Commands::Refresh { file } => run_refresh(&file, flags).await,
        Commands::Destroy { file, auto_approve } => run_destroy(&file, flags, auto_approve).await,
        Commands::Show { file } => run_show(&file).await,
        Commands::Schema { resource_type } => run_schema(resource_type.as_deref()),
        Commands::ForceUnlock { lock_id, file } => run_force_unlock(&file, &lock_id).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

// =============================================================================
// Configuration
// =============================================================================

/// Load a configuration file; flags and environment override the file's
/// provider block
fn load(file: &Path, flags: ProviderConfig) -> Result<(Configuration, ProviderConfig), String> {
    let config = Configuration::load(file).map_err(|e| format!("{:#}", e))?;
    let provider_config = flags.or(config.provider.clone());
    Ok((config, provider_config))
}

/// Fill in the default tenant, normalize blocks and validate every
/// resource and data source
fn prepare_resources(config: &mut Configuration, default_tenant: Option<&str>) -> Result<(), String> {
    let mut all_errors = Vec::new();

    for resource in config.resources.iter_mut().chain(config.data_sources.iter_mut()) {
        let Some(schema) = schemas::get_schema(&resource.id.resource_type) else {
            all_errors.push(format!("{}: unknown resource type", resource.id));
            continue;
        };

        if schema.is_data_source() != resource.read_only {
            let section = if schema.is_data_source() { "data" } else { "resources" };
            all_errors.push(format!("{}: must be declared under \"{}\"", resource.id, section));
            continue;
        }

        if !resource.attributes.contains_key(TENANT_ID)
            && let Some(tenant) = default_tenant
        {
            resource
                .attributes
                .insert(TENANT_ID.to_string(), Value::String(tenant.to_string()));
        }

        schema.normalize(&mut resource.attributes);
        if let Err(errors) = schema.validate(&resource.attributes) {
            for error in errors {
                all_errors.push(format!("{}: {}", resource.id, error));
            }
        }
    }

    if all_errors.is_empty() {
        Ok(())
    } else {
        Err(all_errors.join("\n"))
    }
}

fn create_provider(provider_config: &ProviderConfig) -> Result<BackupRecoveryProvider, String> {
    BackupRecoveryProvider::new(provider_config).map_err(|e| e.to_string())
}

// =============================================================================
// State
// =============================================================================

/// Locked state for the duration of one command
struct StateSession {
    backend: Box<dyn StateBackend>,
    lock: LockInfo,
    state: StateFile,
}

impl StateSession {
    async fn open(config: &Configuration, operation: &str) -> Result<Self, String> {
        let backend = create_backend(&config.backend)
            .await
            .map_err(|e| e.to_string())?;
        let lock = backend
            .acquire_lock(operation)
            .await
            .map_err(|e| e.to_string())?;

        match backend.read_state().await {
            Ok(state) => Ok(Self {
                backend,
                lock,
                state: state.unwrap_or_default(),
            }),
            Err(e) => {
                release_lock(backend.as_ref(), &lock).await;
                Err(e.to_string())
            }
        }
    }

    /// Persist the state and release the lock
    async fn close(mut self) -> Result<(), String> {
        self.state.increment_serial();
        let result = self
            .backend
            .write_state(&self.state)
            .await
            .map_err(|e| format!("Failed to save state: {}", e));
        release_lock(self.backend.as_ref(), &self.lock).await;
        result
    }
}

async fn release_lock(backend: &dyn StateBackend, lock: &LockInfo) {
    if let Err(e) = backend.release_lock(lock).await {
        log::warn!("Failed to release state lock {}: {}", lock.id, e);
    }
}

// =============================================================================
// Commands
// =============================================================================

fn run_validate(file: &Path, flags: ProviderConfig) -> Result<(), String> {
    let (mut config, provider_config) = load(file, flags)?;
    prepare_resources(&mut config, provider_config.tenant_id.as_deref())?;

    println!(
        "{}",
        format!(
            "Configuration is valid: {} resources, {} data sources.",
            config.resources.len(),
            config.data_sources.len()
        )
        .green()
    );
    Ok(())
}

enum Change {
    Created(State),
    Updated(State),
    Unchanged(State),
}

async fn run_apply(file: &Path, flags: ProviderConfig) -> Result<(), String> {
    let (mut config, provider_config) = load(file, flags)?;
    prepare_resources(&mut config, provider_config.tenant_id.as_deref())?;
    let provider = create_provider(&provider_config)?;

    let mut session = StateSession::open(&config, "apply").await?;

    println!("{}", "Applying changes...".cyan().bold());
    println!();

    let mut success_count = 0;
    let mut failure_count = 0;

    for data_source in &config.data_sources {
        match read_data_source(&provider, data_source, &mut session.state).await {
            Ok(()) => {
                println!("  {} read {}", "✓".green(), data_source.id);
                success_count += 1;
            }
            Err(e) => {
                println!("  {} read {} - {}", "✗".red(), data_source.id, e);
                failure_count += 1;
            }
        }
    }

    for resource in &config.resources {
        let saved = session.state.find_resource(&resource.id).cloned();
        match apply_resource(&provider, resource, saved.as_ref()).await {
            Ok(change) => {
                let (verb, state) = match change {
                    Change::Created(state) => ("created", state),
                    Change::Updated(state) => ("updated", state),
                    Change::Unchanged(state) => ("unchanged", state),
                };
                println!("  {} {} {}", "✓".green(), verb, resource.id);
                session
                    .state
                    .upsert_resource(ResourceState::from_state(&state, PROVIDER_NAME));
                success_count += 1;
            }
            Err(e) => {
                println!("  {} {} - {}", "✗".red(), resource.id, e);
                failure_count += 1;
            }
        }
    }

    session.close().await?;

    println!();
    if failure_count == 0 {
        println!(
            "{}",
            format!("Apply complete! {} resources processed.", success_count)
                .green()
                .bold()
        );
        Ok(())
    } else {
        Err(format!(
            "Apply failed. {} succeeded, {} failed.",
            success_count, failure_count
        ))
    }
}

async fn read_data_source(
    provider: &BackupRecoveryProvider,
    data_source: &Resource,
    state: &mut StateFile,
) -> ProviderResult<()> {
    let read = provider.read_data_source(data_source).await?;
    state.upsert_resource(ResourceState::from_state(&read, PROVIDER_NAME).with_data_source(true));
    Ok(())
}

/// Create the resource, or update it when the backend copy has drifted
/// from the configuration
async fn apply_resource(
    provider: &BackupRecoveryProvider,
    resource: &Resource,
    saved: Option<&ResourceState>,
) -> ProviderResult<Change> {
    let Some((prior, identifier)) =
        saved.and_then(|s| s.identifier.clone().map(|identifier| (s.to_state(), identifier)))
    else {
        return provider.create(resource).await.map(Change::Created);
    };

    let current = provider.read(&resource.id, &identifier, &prior).await?;
    if !current.exists {
        log::info!("{} was deleted outside of baas, creating it again", resource.id);
        return provider.create(resource).await.map(Change::Created);
    }

    if is_satisfied(&resource.attributes, &current.attributes) {
        Ok(Change::Unchanged(current))
    } else {
        provider
            .update(&resource.id, &identifier, &current, resource)
            .await
            .map(Change::Updated)
    }
}

/// Whether every configured value is reflected in the current state
///
/// Nested blocks match when every configured key matches; keys the
/// backend adds on its own are ignored.
fn is_satisfied(desired: &HashMap<String, Value>, current: &HashMap<String, Value>) -> bool {
    desired
        .iter()
        .all(|(key, value)| current.get(key).is_some_and(|actual| contains(value, actual)))
}

fn contains(desired: &Value, actual: &Value) -> bool {
    match (desired, actual) {
        (Value::Map(desired), Value::Map(actual)) => is_satisfied(desired, actual),
        (Value::List(desired), Value::List(actual)) => {
            desired.len() == actual.len()
                && desired.iter().zip(actual).all(|(d, a)| contains(d, a))
        }
        _ => desired == actual,
    }
}

async fn run_refresh(file: &Path, flags: ProviderConfig) -> Result<(), String> {
    let (mut config, provider_config) = load(file, flags)?;
    prepare_resources(&mut config, provider_config.tenant_id.as_deref())?;
    let provider = create_provider(&provider_config)?;

    let mut session = StateSession::open(&config, "refresh").await?;
    let mut failure_count = 0;

    let managed: Vec<ResourceState> = session
        .state
        .resources
        .iter()
        .filter(|r| !r.data_source)
        .cloned()
        .collect();

    for saved in managed {
        let id = saved.id();
        let Some(identifier) = saved.identifier.as_deref() else {
            continue;
        };
        match provider.read(&id, identifier, &saved.to_state()).await {
            Ok(current) if current.exists => {
                println!("  {} {}", "✓".green(), id);
                session
                    .state
                    .upsert_resource(ResourceState::from_state(&current, PROVIDER_NAME));
            }
            Ok(_) => {
                println!("  {} {} no longer exists", "-".yellow(), id);
                session.state.remove_resource(&id);
            }
            Err(e) => {
                println!("  {} {} - {}", "✗".red(), id, e);
                failure_count += 1;
            }
        }
    }

    for data_source in &config.data_sources {
        match read_data_source(&provider, data_source, &mut session.state).await {
            Ok(()) => println!("  {} {}", "✓".green(), data_source.id),
            Err(e) => {
                println!("  {} {} - {}", "✗".red(), data_source.id, e);
                failure_count += 1;
            }
        }
    }

    session.close().await?;

    if failure_count == 0 {
        println!("{}", "Refresh complete!".green().bold());
        Ok(())
    } else {
        Err(format!("Refresh failed for {} resources.", failure_count))
    }
}

async fn run_destroy(file: &Path, flags: ProviderConfig, auto_approve: bool) -> Result<(), String> {
    let (config, provider_config) = load(file, flags)?;
    let provider = create_provider(&provider_config)?;

    let mut session = StateSession::open(&config, "destroy").await?;

    // Reverse creation order
    let targets: Vec<ResourceState> = session
        .state
        .resources
        .iter()
        .rev()
        .filter(|r| !r.data_source)
        .cloned()
        .collect();

    if targets.is_empty() {
        println!("{}", "Nothing to destroy.".green());
        session.state.resources.clear();
        return session.close().await;
    }

    println!("{}", "The following resources will be destroyed:".red().bold());
    for target in &targets {
        println!("  {} {}", "-".red(), target.id());
    }
    println!();

    if !auto_approve && !confirm("Do you really want to destroy these resources?") {
        println!("{}", "Destroy cancelled.".yellow());
        return session.close().await;
    }

    let mut success_count = 0;
    let mut failure_count = 0;

    for target in &targets {
        let id = target.id();
        match destroy_resource(&provider, target).await {
            Ok(()) => {
                println!("  {} destroyed {}", "✓".green(), id);
                session.state.remove_resource(&id);
                success_count += 1;
            }
            Err(e) => {
                println!("  {} {} - {}", "✗".red(), id, e);
                failure_count += 1;
            }
        }
    }

    if failure_count == 0 {
        session.state.resources.retain(|r| !r.data_source);
    }
    session.close().await?;

    println!();
    if failure_count == 0 {
        println!(
            "{}",
            format!("Destroy complete! {} resources destroyed.", success_count)
                .green()
                .bold()
        );
        Ok(())
    } else {
        Err(format!(
            "Destroy failed. {} succeeded, {} failed.",
            success_count, failure_count
        ))
    }
}

/// Delete one resource, confirming protection groups are really gone
async fn destroy_resource(
    provider: &BackupRecoveryProvider,
    target: &ResourceState,
) -> ProviderResult<()> {
    let Some(identifier) = target.identifier.as_deref() else {
        return Ok(());
    };
    let id = target.id();
    let prior = target.to_state();

    provider.delete(&id, identifier, &prior).await?;

    if id.resource_type == PROTECTION_GROUP
        && let Some(tenant) = prior.attributes.get(TENANT_ID).and_then(Value::as_str)
    {
        provider.check_destroyed(&id, identifier, tenant).await?;
    }
    Ok(())
}

fn confirm(prompt: &str) -> bool {
    print!("{} Only 'yes' will be accepted: ", prompt);
    if io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    match io::stdin().lock().read_line(&mut answer) {
        Ok(_) => answer.trim() == "yes",
        Err(_) => false,
    }
}

async fn run_show(file: &Path) -> Result<(), String> {
    let config = Configuration::load(file).map_err(|e| format!("{:#}", e))?;
    let backend = create_backend(&config.backend)
        .await
        .map_err(|e| e.to_string())?;

    let Some(state) = backend.read_state().await.map_err(|e| e.to_string())? else {
        println!("{}", "No state recorded yet.".yellow());
        return Ok(());
    };

    println!(
        "{}",
        format!("State serial {} (lineage {})", state.serial, state.lineage).dimmed()
    );
    for resource in &state.resources {
        println!();
        let kind = if resource.data_source { "data" } else { "resource" };
        match &resource.identifier {
            Some(identifier) => println!(
                "{} {} ({})",
                kind.dimmed(),
                resource.id().to_string().bold(),
                identifier
            ),
            None => println!("{} {}", kind.dimmed(), resource.id().to_string().bold()),
        }

        let attributes = schemas::get_schema(&resource.resource_type)
            .map(|schema| schema.attributes)
            .unwrap_or_default();
        let mut keys: Vec<&String> = resource.attributes.keys().collect();
        keys.sort();
        for key in keys {
            let value = redact(&attributes, key, &resource.attributes[key]);
            println!("  {} = {}", key.cyan(), format_value(&value));
        }
    }
    Ok(())
}

fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => format!("\"{}\"", s),
        other => other.to_string(),
    }
}

/// Replace sensitive values, at any depth, with a placeholder
fn redact(attributes: &HashMap<String, AttributeSchema>, key: &str, value: &serde_json::Value) -> serde_json::Value {
    let Some(attr) = attributes.get(key) else {
        return value.clone();
    };
    if attr.sensitive {
        return serde_json::Value::String("(sensitive)".to_string());
    }
    match (attr.attr_type.nested(), value) {
        (Some(block), serde_json::Value::Array(items)) => serde_json::Value::Array(
            items
                .iter()
                .map(|item| match item {
                    serde_json::Value::Object(fields) => serde_json::Value::Object(
                        fields
                            .iter()
                            .map(|(k, v)| (k.clone(), redact(&block.attributes, k, v)))
                            .collect(),
                    ),
                    other => other.clone(),
                })
                .collect(),
        ),
        _ => value.clone(),
    }
}

fn run_schema(resource_type: Option<&str>) -> Result<(), String> {
    let Some(resource_type) = resource_type else {
        for schema in schemas::all_schemas() {
            let kind = if schema.is_data_source() { "data source" } else { "resource" };
            println!(
                "{:<32} {:<12} {}",
                schema.resource_type.bold(),
                kind,
                schema.description.as_deref().unwrap_or_default()
            );
        }
        return Ok(());
    };

    let schema = schemas::get_schema(resource_type)
        .ok_or_else(|| format!("Unknown resource type: {}", resource_type))?;
    print_schema(&schema);
    Ok(())
}

fn print_schema(schema: &ResourceSchema) {
    println!("{}", schema.resource_type.bold());
    if let Some(description) = &schema.description {
        println!("{}", description);
    }
    println!();
    for name in schema.sorted_attribute_names() {
        let attr = &schema.attributes[name];
        let mut flags = attr.mutability.to_string();
        if attr.sensitive {
            flags.push_str(", sensitive");
        }
        println!(
            "  {:<40} {:<12} {}",
            name.cyan(),
            attr.attr_type.to_string(),
            flags.dimmed()
        );
        if let Some(description) = &attr.description {
            println!("      {}", description);
        }
    }
}

async fn run_force_unlock(file: &Path, lock_id: &str) -> Result<(), String> {
    let config = Configuration::load(file).map_err(|e| format!("{:#}", e))?;
    let backend = create_backend(&config.backend)
        .await
        .map_err(|e| e.to_string())?;
    backend
        .force_unlock(lock_id)
        .await
        .map_err(|e| e.to_string())?;
    println!("{}", format!("Lock {} removed.", lock_id).green());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, Value)]) -> HashMap<String, Value> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn string(s: &str) -> Value {
        Value::String(s.to_string())
    }

    #[test]
    fn backend_additions_do_not_count_as_drift() {
        let desired = map(&[
            ("name", string("daily")),
            (
                "start_time",
                Value::List(vec![Value::Map(map(&[("hour", Value::Int(2))]))]),
            ),
        ]);
        let current = map(&[
            ("name", string("daily")),
            ("is_active", Value::Bool(true)),
            (
                "start_time",
                Value::List(vec![Value::Map(map(&[
                    ("hour", Value::Int(2)),
                    ("minute", Value::Int(0)),
                ]))]),
            ),
        ]);
        assert!(is_satisfied(&desired, &current));
    }

    #[test]
    fn changed_or_missing_values_are_drift() {
        let desired = map(&[("priority", string("kHigh"))]);
        assert!(!is_satisfied(&desired, &map(&[("priority", string("kLow"))])));
        assert!(!is_satisfied(&desired, &HashMap::new()));

        let desired = map(&[("tags", Value::List(vec![string("a"), string("b")]))]);
        let current = map(&[("tags", Value::List(vec![string("a")]))]);
        assert!(!is_satisfied(&desired, &current));
    }

    #[test]
    fn prepare_injects_default_tenant_and_normalizes_blocks() {
        let mut config = Configuration::parse(
            r#"{
                "resources": [{
                    "type": "protection_group",
                    "name": "daily",
                    "attributes": {
                        "name": "daily",
                        "policy_id": "pol-1",
                        "environment": "kPhysical",
                        "start_time": { "hour": 2, "minute": 30 }
                    }
                }]
            }"#,
        )
        .unwrap();

        prepare_resources(&mut config, Some("tenant-a/")).unwrap();

        let group = &config.resources[0];
        assert_eq!(group.attributes[TENANT_ID], string("tenant-a/"));
        assert!(matches!(&group.attributes["start_time"], Value::List(items) if items.len() == 1));
    }

    #[test]
    fn prepare_reports_every_problem() {
        let mut config = Configuration::parse(
            r#"{
                "resources": [
                    { "type": "protection_group", "name": "a", "attributes": { "name": "a" } },
                    { "type": "protection_group_runs", "name": "b" },
                    { "type": "volume", "name": "c" }
                ]
            }"#,
        )
        .unwrap();

        let err = prepare_resources(&mut config, None).unwrap_err();
        assert!(err.contains("protection_group.a: Required attribute 'policy_id' is missing"));
        assert!(err.contains("protection_group_runs.b: must be declared under \"data\""));
        assert!(err.contains("volume.c: unknown resource type"));
    }

    #[test]
    fn nested_sensitive_values_are_redacted() {
        let schema = schemas::get_schema(PROTECTION_GROUP).unwrap();
        let oracle = serde_json::json!([{
            "objects": [{
                "source_id": 7,
                "db_params": [{
                    "db_channels": [{
                        "credentials": [{ "username": "backup", "password": "hunter2" }]
                    }]
                }]
            }]
        }]);

        let shown = format_value(&redact(&schema.attributes, "oracle_params", &oracle));
        assert!(!shown.contains("hunter2"), "{}", shown);
        assert!(shown.contains("backup"));
        assert!(shown.contains("(sensitive)"));

        let name = redact(&schema.attributes, "name", &serde_json::json!("daily"));
        assert_eq!(format_value(&name), "\"daily\"");
    }
}
