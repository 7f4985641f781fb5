use mq_chat::{cli, config, ChatSender};
use std::env;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main]
async fn main() {
    env_logger::init();
    let queue = match cli::queue_arg(env::args()) {
        Some(queue) => queue,
        None => cli::usage_error("sender"),
    };

    let sender = ChatSender::connect(&config::broker_url()).await.unwrap();
    sender.declare_queue(&queue).await.unwrap();

    println!("Chatting to queue: {}", queue);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.unwrap() {
        sender.send_line(&queue, &line).await.unwrap();
        println!("Sent: {}", line);
    }
}
