use lapin::{
    options::{BasicPublishOptions, QueueDeclareOptions},
    types::FieldTable,
    BasicProperties, Channel, Connection, ConnectionProperties,
};
use tokio_amqp::*;

/// Publishing side of the chat: owns one connection and one channel for the
/// lifetime of the process.
#[derive(Debug)]
pub struct ChatSender {
    #[allow(dead_code)]
    conn: Connection,
    channel: Channel,
}

impl ChatSender {
    pub async fn connect(url: &str) -> Result<Self, lapin::Error> {
        let conn = Connection::connect(url, ConnectionProperties::default().with_tokio()).await?;
        let channel = conn.create_channel().await?;
        log::debug!("sender connected to {}", url);

        Ok(Self { conn, channel })
    }

    /// Idempotent: creates the queue if absent, no-op if it already exists.
    pub async fn declare_queue(&self, queue: &str) -> Result<&Self, lapin::Error> {
        self.channel
            .queue_declare(queue, QueueDeclareOptions::default(), FieldTable::default())
            .await?;
        log::debug!("declared queue \"{}\"", queue);
        Ok(self)
    }

    /// Publishes one line of chat verbatim to the named queue. The publish is
    /// awaited before returning, so a single sender's lines hit the queue in
    /// input order.
    pub async fn send_line(&self, queue: &str, line: &str) -> Result<(), lapin::Error> {
        self.channel
            .basic_publish(
                "",
                queue,
                BasicPublishOptions::default(),
                line.as_bytes().to_vec(),
                BasicProperties::default(),
            )
            .await?;
        Ok(())
    }
}



#[cfg(test)]
mod send_line {
    use super::*;
    use test_utils::{wait_a_moment, Queue, URL};

    #[tokio::test]
    async fn line_arrives_byte_for_byte() {
        const LINE: &str = "hello";
        let queue = Queue::new().await;

        let sender = ChatSender::connect(URL).await.unwrap();
        sender
            .declare_queue(&queue.name)
            .await
            .unwrap()
            .send_line(&queue.name, LINE)
            .await
            .unwrap();
        wait_a_moment().await;

        let msg = queue.get().await.unwrap();
        assert_eq!(msg.data, LINE.as_bytes())
    }

    #[tokio::test]
    async fn consecutive_lines_keep_input_order() {
        let queue = Queue::new().await;

        let sender = ChatSender::connect(URL).await.unwrap();
        sender.declare_queue(&queue.name).await.unwrap();
        for line in &["a", "b", "c"] {
            sender.send_line(&queue.name, line).await.unwrap();
        }
        wait_a_moment().await;

        for expected in &["a", "b", "c"] {
            let msg = queue.get().await.unwrap();
            assert_eq!(String::from_utf8_lossy(&msg.data), *expected);
        }
    }
}
