use ask_page::{Agent, AgentConfig, OllamaBackend, Session, render};
use clap::Parser;
use tokio::io::BufReader;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match AgentConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load configuration {}: {}", path.display(), e);
                return;
            }
        },
        None => AgentConfig::default(),
    };
    if let Some(model) = &args.model {
        config.model = model.clone();
    }
    if let Some(host) = args.host.as_ref().filter(|h| !h.is_empty()) {
        config.host = host.clone();
    }
    config.hide_reasoning |= args.hide_reasoning;

    let backend = match OllamaBackend::new(&config.host) {
        Ok(backend) => backend,
        Err(e) => {
            ::log::error!("Invalid backend host {}: {}", config.host, e);
            return;
        }
    };

    let agent = Agent::from_source(&args.source, backend, config);

    if let Some((mode, input)) = args.one_shot() {
        println!("{}", render(agent.query(mode, input).await));
        return;
    }

    println!("🤖 Web Content Analysis Agent - Ready!");
    println!("📊 Loaded {} elements", agent.dataset().len());
    if !agent.fingerprint().is_empty() {
        println!("🔑 Content fingerprint: {}", agent.fingerprint());
    }
    println!("💡 Type 'exit' to quit");
    println!("{}", "-".repeat(50));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut session = Session::new(&agent);
    if let Err(e) = session
        .run(stdin, tokio::io::stdout(), tokio::signal::ctrl_c())
        .await
    {
        ::log::error!("Session ended with I/O error: {}", e);
    }

    ::log::info!("Session finished after {} questions", session.dispatched());
}
