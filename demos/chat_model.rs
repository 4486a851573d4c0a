//! Drives the orchestration-facing handle instead of the direct call path.

use dial_client::{ChatModel, ChatRole, LlmClient, Message};
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let client = LlmClient::from_env()?;
    let model = client.chat_model()?;

    let completion = model
        .chat(vec![Message {
            role: ChatRole::User,
            content: "In one sentence, what is a borrow checker?".to_string(),
        }])
        .await?;

    println!("{}", completion.content);

    Ok(())
}
