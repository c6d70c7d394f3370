use super::{colorize_state, prompt_name, prompt_select, prompt_u32, success};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Password};
use serde_json::{json, Value};
use strato_core::Engine;
use strato_model::{EvictionPolicy, Region, Runtime};

const RESOURCE_TYPES: [&str; 3] = ["AppService", "StorageAccount", "CacheDB"];

pub fn run(engine: &mut Engine) -> Result<(), String> {
    let type_idx = prompt_select(
        "Resource type",
        &RESOURCE_TYPES.map(str::to_owned),
    )?;
    let type_tag = RESOURCE_TYPES[type_idx];

    let name = prompt_name()?;
    let options = match type_tag {
        "AppService" => app_service_options()?,
        "StorageAccount" => storage_account_options()?,
        _ => cache_db_options()?,
    };

    let resource = engine
        .create_resource(type_tag, &name, &options)
        .map_err(|e| e.to_string())?;

    success(&format!(
        "created {} '{}' (state: {})",
        resource.type_tag(),
        resource.name(),
        colorize_state(&resource.state().to_string())
    ));
    Ok(())
}

fn app_service_options() -> Result<Value, String> {
    let runtimes: Vec<String> = Runtime::ALL.iter().map(ToString::to_string).collect();
    let runtime = &runtimes[prompt_select("Runtime", &runtimes)?];

    let regions: Vec<String> = Region::ALL.iter().map(ToString::to_string).collect();
    let region = &regions[prompt_select("Region", &regions)?];

    let replica_count = prompt_u32("Replica count (1-10)")?;

    Ok(json!({
        "runtime": runtime,
        "region": region,
        "replica_count": replica_count,
    }))
}

fn storage_account_options() -> Result<Value, String> {
    let encryption_enabled = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Enable encryption?")
        .default(true)
        .interact()
        .map_err(|e| e.to_string())?;

    let access_key = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("Access key (min 16 characters)")
        .interact()
        .map_err(|e| e.to_string())?;

    let max_size_gb = prompt_u32("Max size in GB (1-10000)")?;

    Ok(json!({
        "encryption_enabled": encryption_enabled,
        "access_key": access_key,
        "max_size_gb": max_size_gb,
    }))
}

fn cache_db_options() -> Result<Value, String> {
    let ttl_seconds = prompt_u32("TTL in seconds (1-86400)")?;
    let capacity_mb = prompt_u32("Capacity in MB (1-10000)")?;

    let policies: Vec<String> = EvictionPolicy::ALL.iter().map(ToString::to_string).collect();
    let eviction_policy = &policies[prompt_select("Eviction policy", &policies)?];

    Ok(json!({
        "ttl_seconds": ttl_seconds,
        "capacity_mb": capacity_mb,
        "eviction_policy": eviction_policy,
    }))
}
