use agentflow_bootstrap::{run, BootstrapConfig, BootstrapProgress, SystemLookup, SystemRunner};
use tracing_subscriber::EnvFilter;

fn print_banner() {
    println!();
    println!("  ╔═══════════════════════════════════════╗");
    println!("  ║         AgentFlow — bootstrap         ║");
    println!("  ╚═══════════════════════════════════════╝");
    println!();
}

fn render(progress: BootstrapProgress) {
    match progress {
        BootstrapProgress::InterpreterSelected { interpreter } => {
            println!("  ✓ Found {}", interpreter.raw_version);
        }
        BootstrapProgress::ToolPresent { tool } => {
            println!("  ✓ {tool} is already installed");
            println!();
        }
        BootstrapProgress::Installing { strategy } => {
            println!("  · Installing via {}...", strategy.display_name());
            println!();
        }
        BootstrapProgress::InstallCompleted { tool } => {
            println!();
            println!("  ✓ {tool} installed successfully!");
            println!();
        }
        _ => {}
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    print_banner();

    let config = BootstrapConfig::default();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let code = match run(&config, &SystemRunner, &SystemLookup, &args, render).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("  ✗ {err}");
            eprintln!("    {}", err.fix_suggestion());
            1
        }
    };

    std::process::exit(code);
}
