//! Standalone entry point: one uncached test call against Azure OpenAI.

use llm_gateway::{Gateway, GatewayConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let test_prompt = "Hello, how are you?";

    let gateway = match Gateway::new(GatewayConfig::from_env()) {
        Ok(gateway) => gateway,
        Err(e) => {
            println!("Error building gateway: {e}");
            return;
        }
    };

    println!("Making call to Azure OpenAI...");
    match gateway.complete(test_prompt, false, "azure").await {
        Ok(response) => println!("Azure response: {response}"),
        Err(e) => println!("Error calling Azure OpenAI: {e}"),
    }

    println!("\nNote: the gemini provider is currently disabled.");
}
