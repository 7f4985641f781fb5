use mq_chat::{cli, config, ChatReceiver};
use std::env;

#[tokio::main]
async fn main() {
    env_logger::init();
    let queue = match cli::queue_arg(env::args()) {
        Some(queue) => queue,
        None => cli::usage_error("receiver"),
    };

    let receiver = ChatReceiver::connect(&config::broker_url()).await.unwrap();
    receiver.declare_queue(&queue).await.unwrap();

    println!("Listening on queue: {}", queue);

    tokio::select! {
        drained = receiver.drain(&queue, |body| async move {
            println!("Message: {}", String::from_utf8_lossy(&body));
        }) => drained.unwrap(),
        _ = tokio::signal::ctrl_c() => log::info!("interrupted, exiting..."),
    }
}
