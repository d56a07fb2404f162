use std::path::PathBuf;
use console::style;
use crate::cli::commands::ValidateArgs;
use crate::config;
use crate::errors::SimError;

pub async fn handle_validate(args: ValidateArgs) -> Result<(), SimError> {
    let path = PathBuf::from(&args.config);
    let (main, model) = config::load_experiment(&path).await?;
    let budget = model.budget();

    println!("{} Configuration is valid: {}", style("✓").green(), args.config);
    println!("  Scenario:      {}", main.network_config_file.unwrap_or_default());
    println!("  Hosts:         {}", model.hosts().len());
    println!("  Exploits:      {}", model.exploits().len());
    println!("  Escalations:   {}", model.escalations().len());
    println!("  Sensitive:     {}", model.sensitive_hosts().join(", "));
    println!("  Initial hosts: {}", model.initial_hosts().join(", "));
    println!(
        "  Budget:        step_limit={} service={} os={} process={}",
        budget.step_limit, budget.service_scan_cost, budget.os_scan_cost, budget.process_scan_cost
    );
    Ok(())
}
