use dial_client::{ChatRole, LlmClient, Message};
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = LlmClient::from_env()?;

    let completion = client
        .generate(
            vec![
                Message {
                    role: ChatRole::System,
                    content: "You are a concise, upbeat assistant.".to_string(),
                }
                .into(),
                Message {
                    role: ChatRole::User,
                    content: "Share a fun fact about Rust programming.".to_string(),
                }
                .into(),
            ],
            None,
        )
        .await?;

    println!("Assistant:\n{}", completion.content);
    println!("({} tokens)", completion.usage.total_tokens);

    Ok(())
}
