use financial_document_crew::{
    config::LlmConfig,
    crew::Crew,
    loader::{load_financial_document, DEFAULT_DOCUMENT_PATH},
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let document_path = args.next().unwrap_or_else(|| DEFAULT_DOCUMENT_PATH.to_string());
    let query = args.next().unwrap_or_else(|| {
        "Analyze this financial document and summarize the investment outlook".to_string()
    });

    info!("Financial Document Crew starting");
    info!(document = %document_path, "Loading document");

    let document_text = load_financial_document(&document_path)?;

    let config = LlmConfig::from_env().map_err(|e| {
        eprintln!("⚠️  OPENAI_API_KEY not set in .env");
        eprintln!("📌 See .env.example for setup instructions");
        e
    })?;

    let crew = Crew::new(config)?;

    info!(query = %query, "Running crew");

    match crew.kickoff(&query, &document_text).await {
        Ok(result) => {
            println!("\n=== CREW RESULT ===");
            for (i, task) in result.task_outputs.iter().enumerate() {
                println!("\n--- Task {} ({}) ---", i + 1, task.agent_role);
                println!("{}", task.output);
            }
            println!("\n=== FINAL OUTPUT ===");
            println!("{}", result.final_output);
            Ok(())
        }
        Err(e) => {
            eprintln!("Crew run failed: {}", e);
            Err(Box::new(e) as Box<dyn std::error::Error>)
        }
    }
}
